//! Frontiers hold the entries a search engine has generated but not yet
//! expanded. The three ordering policies share one interface so that the
//! engines only differ in which frontier they construct.

use crate::search::HeuristicValue;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque, fmt::Debug, hash::Hash};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("pop called on an empty frontier")]
    Empty,
}

pub trait Frontier<T>: Debug {
    /// Add an item to the frontier. Frontiers that are not priority ordered
    /// ignore the priority.
    fn push(&mut self, item: T, priority: HeuristicValue);

    /// Remove and return the next item according to the ordering policy.
    fn pop(&mut self) -> Result<T, FrontierError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// Last in, first out. Gives depth-first order.
#[derive(Debug, Clone)]
pub struct Lifo<T> {
    stack: Vec<T>,
}

impl<T> Lifo<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Frontier<T> for Lifo<T> {
    fn push(&mut self, item: T, _priority: HeuristicValue) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Result<T, FrontierError> {
        self.stack.pop().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First in, first out. Gives breadth-first order.
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    queue: VecDeque<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Frontier<T> for Fifo<T> {
    fn push(&mut self, item: T, _priority: HeuristicValue) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Result<T, FrontierError> {
        self.queue.pop_front().ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Smallest priority first, ties broken by insertion order.
///
/// Items are keys of the underlying [`PriorityQueue`], so pushing an item that
/// is already present replaces its priority instead of adding a second copy.
/// The engines push a freshly allocated node id every time, so this never
/// happens during a search.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T: Hash + Eq> {
    queue: PriorityQueue<T, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl<T: Hash + Eq> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }
}

impl<T: Hash + Eq> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Debug> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, priority: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(item, Reverse((priority, sequence)));
    }

    fn pop(&mut self) -> Result<T, FrontierError> {
        self.queue
            .pop()
            .map(|(item, _)| item)
            .ok_or(FrontierError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
