//! Expiry Sweep Task
//!
//! Background task that periodically reclaims expired cache entries.
//!
//! Expired entries are already invisible to `get` and `touch`; the sweep only
//! frees their memory earlier than the next access would.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{BoundedExpiringCache, Identifiable};

/// Spawns a background task that purges expired entries every
/// `interval_secs` seconds.
///
/// Returns the task's JoinHandle so it can be aborted on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(BoundedExpiringCache::<Page>::default());
/// let sweep_handle = spawn_sweeper(cache.clone(), 60);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweeper<V>(cache: Arc<BoundedExpiringCache<V>>, interval_secs: u64) -> JoinHandle<()>
where
    V: Identifiable + Send + Sync + 'static,
{
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
