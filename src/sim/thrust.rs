//! Pending thrust counter shared with input handlers
//!
//! Any thread may enqueue thrust units; only the ticking engine consumes them.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Cloneable handle to the queue of thrust units awaiting the next tick
#[derive(Debug, Clone, Default)]
pub struct ThrustQueue {
    pending: Arc<AtomicU32>,
}

impl ThrustQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one thrust unit
    pub fn request(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    pub fn pending(&self) -> u32 {
        self.pending.load(Ordering::SeqCst)
    }

    /// Remove one queued unit; false if none were queued
    pub fn take_one(&self) -> bool {
        self.pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Drop every queued unit; only the engine does this, when it installs an attempt
    pub(crate) fn clear(&self) {
        self.pending.store(0, Ordering::SeqCst);
    }
}
