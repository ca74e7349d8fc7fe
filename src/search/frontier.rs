//! A min-priority frontier with stable ordering among equal keys.

use crate::search::Cost;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("attempted to pop from an empty frontier")]
    Empty,
}

/// An entry is identified by its insertion sequence number alone, so the same
/// item can sit in the frontier several times under different keys.
struct Entry<T> {
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Hash for Entry<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state);
    }
}

/// A [`Frontier`] returns its items in order of increasing key. Items pushed
/// with equal keys come out in the order they were pushed. There is no
/// decrease-key, pushing an item again simply adds another entry.
pub struct Frontier<T> {
    queue: PriorityQueue<Entry<T>, Reverse<(Cost, u64)>>,
    next_sequence: u64,
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, key: Cost) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue
            .push(Entry { sequence, item }, Reverse((key, sequence)));
    }

    /// Remove and return the item with the smallest key, together with that
    /// key.
    pub fn pop_with_key(&mut self) -> Result<(T, Cost), FrontierError> {
        match self.queue.pop() {
            Some((entry, Reverse((key, _)))) => Ok((entry.item, key)),
            None => Err(FrontierError::Empty),
        }
    }

    pub fn pop(&mut self) -> Result<T, FrontierError> {
        self.pop_with_key().map(|(item, _)| item)
    }

    /// The smallest key currently in the frontier.
    pub fn peek_key(&self) -> Option<Cost> {
        self.queue.peek().map(|(_, Reverse((key, _)))| *key)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Frontier<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.queue.len())
            .field("next_sequence", &self.next_sequence)
            .finish()
    }
}
