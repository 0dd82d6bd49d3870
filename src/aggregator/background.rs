use std::future::Future;

use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::warn;

/// Owns every detached evaluation task the Aggregator spawns. Unlike a
/// bare `tokio::spawn` whose handle is dropped, every task here has an
/// explicit owner that can be reaped and, at shutdown, drained.
pub struct BackgroundTasks {
    tasks: Mutex<JoinSet<()>>,
}

impl BackgroundTasks {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Hand off a detached evaluation. The caller's HTTP response does
    /// not wait on `fut`.
    pub async fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock().await;
        tasks.spawn(fut);
        reap(&mut tasks);
    }
}

impl Default for BackgroundTasks {
    fn default() -> Self {
        Self::new()
    }
}

fn reap(tasks: &mut JoinSet<()>) {
    while let Some(result) = tasks.try_join_next() {
        if let Err(err) = result {
            warn!(error = %err, "background evaluation task panicked");
        }
    }
}
