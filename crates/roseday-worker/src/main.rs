//! The roseday worker daemon.
//!
//! Installs and activates the worker against a desktop host, then delivers
//! hourly wake events until a shutdown signal arrives.

use tracing::info;

use roseday_core::{TracingConfig, init_tracing};
use roseday_worker::{
    DesktopHost, DesktopHostConfig, SchedulerConfig, WakeScheduler, Worker, WorkerEvent,
    shutdown_signal,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(TracingConfig::daemon())?;

    let host = DesktopHost::new(DesktopHostConfig::default());
    let worker = Worker::new(host);

    worker.dispatch(WorkerEvent::Install).await?;
    worker.dispatch(WorkerEvent::Activate).await?;

    let scheduler = WakeScheduler::new(SchedulerConfig::default());
    let stop = scheduler.stop_handle();

    tokio::spawn(async move {
        shutdown_signal().await;
        stop.stop();
    });

    scheduler.run(&worker).await;
    info!("worker daemon stopped");
    Ok(())
}
