//! `TimedQueue` — a min-heap of shared actions keyed by `(time, sequence)`.
//!
//! `BinaryHeap` is a max-heap, so entries reverse their ordering: the
//! smallest `(time, sequence)` compares greatest and pops first.  The
//! sequence number is threaded in from submission, which makes the order
//! total and independent of action contents.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use ag_action::Action;
use ag_core::TimeStep;

use crate::ActionId;

/// One queued action.
#[derive(Clone, Debug)]
pub struct QueueEntry {
    pub time:   TimeStep,
    pub id:     ActionId,
    pub action: Arc<Action>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.id == other.id
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TimedQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl TimedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, time: TimeStep, id: ActionId, action: Arc<Action>) {
        self.heap.push(QueueEntry { time, id, action });
    }

    #[inline]
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.peek()
    }

    /// Time of the head entry, if it is due at or before `target`.
    #[inline]
    pub fn due_time(&self, target: TimeStep) -> Option<TimeStep> {
        self.heap.peek().map(|e| e.time).filter(|&t| t <= target)
    }

    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    /// Pop head entries while `dead` says so.
    pub fn pop_while(&mut self, mut dead: impl FnMut(&QueueEntry) -> bool) -> usize {
        let mut popped = 0;
        while self.heap.peek().is_some_and(&mut dead) {
            self.heap.pop();
            popped += 1;
        }
        popped
    }

    /// Number of entries, including any not yet purged.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
