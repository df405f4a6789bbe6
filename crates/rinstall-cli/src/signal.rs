// Termination signals that stop a running batch

use std::future::Future;
use std::io;

use tracing::info;

/// Future that resolves on the first Ctrl-C, SIGTERM or SIGHUP
///
/// Handlers are installed when this is called, not when the future is first
/// polled, so a signal that arrives while manifests are still being located
/// is not lost. Once installed, those signals no longer kill the process
/// outright; the batch stops its running jobs and exits instead.
pub fn shutdown_signal() -> io::Result<impl Future<Output = ()>> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;
        let mut hangup = signal(SignalKind::hangup())?;

        Ok(async move {
            let name = tokio::select! {
                _ = interrupt.recv() => "SIGINT",
                _ = terminate.recv() => "SIGTERM",
                _ = hangup.recv() => "SIGHUP",
            };
            info!(signal = name, "Received termination signal");
        })
    }

    #[cfg(not(unix))]
    {
        Ok(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!(signal = "Ctrl-C", "Received termination signal");
            }
        })
    }
}
