//! src/graph/identity.rs
//!
//! Per-instance graph identities, used to route update notifications.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of one graph instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocator handing out increasing identities, starting at 1.
///
/// Owned by the host and passed to every graph constructor. Allocation takes
/// `&self` so one registry can be shared across threads.
#[derive(Debug)]
pub struct IdRegistry {
    last: AtomicU64,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Allocate the next identity. Identities are never reused.
    pub fn allocate(&self) -> GraphId {
        GraphId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}
