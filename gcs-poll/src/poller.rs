//! The per-subscriber polling task.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use gcs_telemetry::PollResult;

use crate::state::PollUpdate;

/// Handle to a running polling loop.
///
/// Lifecycle: a loop is Idle until spawned (there is no handle yet), Running
/// from the moment `spawn_poller` returns, and Cancelled once `cancel` or
/// `shutdown` fires - a terminal state with no way back. Dropping the handle
/// leaves the loop running detached; subscribers stop their loop explicitly
/// when their screen goes away.
#[derive(Debug)]
pub struct PollHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Request cancellation. Idempotent and prompt: an in-flight fetch or a
    /// pending inter-tick sleep is aborted rather than waited out, and no
    /// further tick runs.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the loop task is still running. May remain true briefly after
    /// `cancel` while the current tick is being torn down.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancel and wait for the task to finish. After this returns, no
    /// further subscriber callback will run.
    pub async fn shutdown(self) {
        self.token.cancel();
        let _ = self.task.await;
    }
}

/// Spawn a polling loop: one independent, cancellable task for one
/// subscriber.
///
/// Each tick awaits `poll_fn`, folds the [`PollResult`] into a
/// [`PollUpdate`](crate::PollUpdate), hands it to `on_update`, then sleeps
/// `interval`. Ticks are strictly sequential - the next fetch never starts
/// before the previous tick's update has been delivered. The interval is
/// this subscriber's own configuration; live screens run at 1 s, statistics
/// screens at 5 s.
///
/// Every fetch outcome is a typed result, so no tick can terminate the loop;
/// only the handle's cancellation does, and both the fetch and the sleep are
/// cancellation points.
pub fn spawn_poller<T, P, Fut, U>(interval: Duration, mut poll_fn: P, mut on_update: U) -> PollHandle
where
    T: Send + 'static,
    P: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = PollResult<T>> + Send,
    U: FnMut(PollUpdate<T>) + Send + 'static,
{
    let token = CancellationToken::new();
    let task_token = token.clone();

    let task = tokio::spawn(async move {
        tracing::debug!("polling loop started (interval {:?})", interval);

        loop {
            let result = tokio::select! {
                _ = task_token.cancelled() => break,
                result = poll_fn() => result,
            };

            on_update(PollUpdate::from(result));

            tokio::select! {
                _ = task_token.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        tracing::debug!("polling loop cancelled");
    });

    PollHandle { token, task }
}
