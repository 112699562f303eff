//! src/graph/update.rs
//!
//! "New data" notifications and the queue that routes them by graph identity.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use super::identity::GraphId;
use super::state::Graph;

/// Issued by [`Graph::on_new_sample`]; only the issuing graph accepts it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: GraphId,
    pub time: DateTime<Local>,
    pub value: u64,
}

/// FIFO of pending notifications, delivered in the order they were issued.
#[derive(Debug, Default)]
pub struct UpdateQueue {
    pending: VecDeque<Notification>,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deliver every pending notification to the graph whose identity matches.
    ///
    /// Returns the number delivered. Notifications with no matching graph
    /// (e.g. from a graph that has been dropped) are discarded.
    pub fn dispatch(&mut self, graphs: &mut [Graph]) -> usize {
        let mut delivered = 0;
        while let Some(n) = self.pending.pop_front() {
            match graphs.iter_mut().find(|g| g.id() == n.id) {
                Some(graph) => {
                    graph.update(&n);
                    delivered += 1;
                }
                None => tracing::debug!("dropping notification for unknown graph {}", n.id),
            }
        }
        delivered
    }
}
