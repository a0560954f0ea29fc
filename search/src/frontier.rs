//! Frontier containers: LIFO stack, FIFO queue, and best-first min-heap.
//!
//! Frontiers hold arena ids only; node data lives in the arena. Visited
//! tracking stays in the search loops because the three algorithms mark
//! visited states at different moments (depth-first at pop time,
//! breadth-first at enqueue time, A* via a best-known-cost map).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::arena::NodeId;
use crate::node::FrontierKey;

/// LIFO frontier for depth-first search.
///
/// The last successor pushed is the first explored.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
    high_water: u64,
}

impl LifoFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node id onto the stack.
    pub fn push(&mut self, id: NodeId) {
        self.stack.push(id);
        self.high_water = self.high_water.max(self.stack.len() as u64);
    }

    /// Pop the most recently pushed id.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// FIFO frontier for breadth-first search.
///
/// Ids come back out in the order they went in, so all nodes at depth `k`
/// are expanded before any node at depth `k + 1`.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: u64,
}

impl FifoFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a node id.
    pub fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
        self.high_water = self.high_water.max(self.queue.len() as u64);
    }

    /// Dequeue the oldest id.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// A best-first entry wrapping an id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct HeapEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier for A* search.
///
/// Pops the entry with the lowest [`FrontierKey`] (lowest
/// `cost + heuristic`, ties broken by shallower depth, then older id).
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<HeapEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node id with its ordering key.
    pub fn push(&mut self, key: FrontierKey, id: NodeId) {
        self.heap.push(HeapEntry {
            key: Reverse(key),
            id,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
    }

    /// Pop the best (lowest-key) id.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
