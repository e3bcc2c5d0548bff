//! Bounded recent-activity feed

use std::collections::VecDeque;

use crate::types::TransactionEntry;

/// Default cap on displayed transactions.
pub const DEFAULT_CAPACITY: usize = 5;

/// Most-recent-first list of synthetic transactions, bounded in length.
///
/// `record` inserts at the front; once the cap is exceeded the oldest
/// entry (the tail) is evicted.
#[derive(Debug, Clone)]
pub struct ActivityFeed {
    entries: VecDeque<TransactionEntry>,
    capacity: usize,
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Prepend a new entry, evicting the oldest beyond the cap.
    pub fn record(&mut self, entry: TransactionEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Entries newest-first.
    pub fn entries(&self) -> impl Iterator<Item = &TransactionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest entry, if any.
    pub fn latest(&self) -> Option<&TransactionEntry> {
        self.entries.front()
    }
}
