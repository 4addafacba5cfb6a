use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockTable = DashMap<String, Arc<Mutex<()>>>;

/// Registry of per-aggregate exclusive locks.
///
/// Whole-document writes are load, mutate, save. Holding the guard for an
/// aggregate id across that sequence serialises writers of the same
/// aggregate while leaving other aggregates untouched. An entry lives only
/// while someone holds or waits on it.
#[derive(Debug, Default)]
pub struct AggregateLocks {
    locks: Arc<LockTable>,
}

/// Exclusive access to one aggregate; releasing it prunes the idle entry.
#[derive(Debug)]
pub struct AggregateGuard {
    guard: Option<OwnedMutexGuard<()>>,
    aggregate_id: String,
    locks: Arc<LockTable>,
}

impl Drop for AggregateGuard {
    fn drop(&mut self) {
        // Release the mutex first so its Arc no longer counts as a holder.
        drop(self.guard.take());
        self.locks
            .remove_if(&self.aggregate_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl AggregateLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `aggregate_id`.
    pub async fn acquire(&self, aggregate_id: &str) -> AggregateGuard {
        // Clone the Arc out so the map shard is released before awaiting.
        let lock = self
            .locks
            .entry(aggregate_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        AggregateGuard {
            guard: Some(guard),
            aggregate_id: aggregate_id.to_string(),
            locks: Arc::clone(&self.locks),
        }
    }

    /// Number of aggregates currently held or waited on
    pub fn tracked(&self) -> usize {
        self.locks.len()
    }
}
