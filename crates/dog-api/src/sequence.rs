//! Request Sequencing
//!
//! Page loads complete in any order. Each load takes a ticket up front and
//! only the holder of the newest ticket may publish its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic ticket dispenser shared by every load of one view
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

/// Proof of issue order for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before
    pub fn next(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no newer ticket has been issued since `ticket`
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}
