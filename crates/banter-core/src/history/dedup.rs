//! Seen-set of inbound messages per account.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use banter_types::account::AccountId;

/// Soft bound on remembered keys.
pub const DEDUP_CAPACITY: usize = 50;

/// Keys dropped at once when the bound is exceeded.
pub const DEDUP_EVICT_BATCH: usize = 20;

#[derive(Debug, Default)]
struct Seen {
    keys: HashSet<(AccountId, i64)>,
    order: VecDeque<(AccountId, i64)>,
}

/// Remembers which (account, message id) pairs were already handled.
///
/// Eviction is in bulk: once an insert pushes the set past
/// [`DEDUP_CAPACITY`], the oldest [`DEDUP_EVICT_BATCH`] keys are forgotten,
/// so a very old message could be handled twice.
#[derive(Debug)]
pub struct DedupWindow {
    seen: Mutex<Seen>,
    capacity: usize,
    evict_batch: usize,
}

impl DedupWindow {
    pub fn new() -> Self {
        Self::with_limits(DEDUP_CAPACITY, DEDUP_EVICT_BATCH)
    }

    pub fn with_limits(capacity: usize, evict_batch: usize) -> Self {
        Self {
            seen: Mutex::new(Seen::default()),
            capacity,
            evict_batch,
        }
    }

    /// Returns `true` the first time `(account, message_id)` is seen and
    /// marks it; `false` for duplicates.
    pub fn check_and_mark(&self, account: &AccountId, message_id: i64) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        let key = (account.clone(), message_id);
        if !seen.keys.insert(key.clone()) {
            return false;
        }
        seen.order.push_back(key);

        if seen.order.len() > self.capacity {
            for _ in 0..self.evict_batch {
                match seen.order.pop_front() {
                    Some(old) => {
                        seen.keys.remove(&old);
                    }
                    None => break,
                }
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DedupWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sighting_only() {
        let dedup = DedupWindow::new();
        let alpha = AccountId::new("alpha");
        let beta = AccountId::new("beta");
        assert!(dedup.check_and_mark(&alpha, 1));
        assert!(!dedup.check_and_mark(&alpha, 1));
        // same message id, different account
        assert!(dedup.check_and_mark(&beta, 1));
    }

    #[test]
    fn bulk_evicts_oldest_twenty_past_fifty() {
        let dedup = DedupWindow::new();
        let account = AccountId::new("alpha");
        for id in 0..50 {
            assert!(dedup.check_and_mark(&account, id));
        }
        assert_eq!(dedup.len(), 50);

        assert!(dedup.check_and_mark(&account, 50));
        assert_eq!(dedup.len(), 31);

        // evicted keys are accepted again, retained ones are not
        assert!(dedup.check_and_mark(&account, 0));
        assert!(!dedup.check_and_mark(&account, 20));
        assert!(!dedup.check_and_mark(&account, 50));
    }

    #[test]
    fn shared_across_threads() {
        let dedup = std::sync::Arc::new(DedupWindow::new());
        let account = AccountId::new("alpha");
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dedup = dedup.clone();
                let account = account.clone();
                std::thread::spawn(move || dedup.check_and_mark(&account, 7))
            })
            .collect();
        let firsts = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|first| *first)
            .count();
        assert_eq!(firsts, 1);
    }
}
