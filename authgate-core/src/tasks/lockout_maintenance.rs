// authgate-core/src/tasks/lockout_maintenance.rs

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::auth::UserLock;

/// Spawns a background task that periodically drops expired lockout entries.
/// Purely memory hygiene; lockout checks are correct without it.
pub fn spawn_lockout_prune_task(lock: Arc<UserLock>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            sleep(interval).await;
            lock.prune_stale();
        }
    })
}
