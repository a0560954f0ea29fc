//! Core search node type and frontier ordering key.

use crate::arena::NodeId;

/// An immutable node in the search tree.
///
/// Ordering for best-first extraction uses `(priority, depth, id)` where
/// `priority = cost + heuristic`. Lower is better; ties broken by shallower
/// depth, then older arena id (arena ids are assigned in creation order).
///
/// `cost` and `heuristic` are meaningful for A* only; depth-first and
/// breadth-first nodes carry them as zero.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Arena index of this node, assigned monotonically at creation.
    pub id: NodeId,
    /// Parent arena index (`None` for the root). Always references an
    /// earlier arena slot, so parent chains are acyclic by construction.
    pub parent: Option<NodeId>,
    /// The wrapped state value.
    pub state: S,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Accumulated path cost from the start (unit edges: +1 per step).
    pub cost: f64,
    /// Heuristic estimate of remaining cost, fixed at creation.
    pub heuristic: f64,
}

impl<S> SearchNode<S> {
    /// Compute `priority = cost + heuristic` (the best-first ordering key).
    #[must_use]
    pub fn priority(&self) -> f64 {
        self.cost + self.heuristic
    }
}

/// The best-first frontier ordering key: `(priority, depth, id)`.
///
/// Lower priority first, then shallower depth, then older id. Comparison on
/// the `f64` priority uses [`f64::total_cmp`], so the order is total even if
/// a caller heuristic misbehaves and returns NaN (NaN sorts after every
/// real priority rather than corrupting the heap).
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub depth: u32,
    pub id: NodeId,
}

// Equality follows `cmp` so the ordering traits agree even on NaN.
impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.depth.cmp(&other.depth))
            .then(self.id.cmp(&other.id))
    }
}

impl<S> From<&SearchNode<S>> for FrontierKey {
    fn from(node: &SearchNode<S>) -> Self {
        Self {
            priority: node.priority(),
            depth: node.depth,
            id: node.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_key_lower_priority_wins() {
        let a = FrontierKey {
            priority: 1.0,
            depth: 5,
            id: 10,
        };
        let b = FrontierKey {
            priority: 2.0,
            depth: 1,
            id: 1,
        };
        assert!(a < b, "lower priority should sort first");
    }

    #[test]
    fn frontier_key_ties_broken_by_depth_then_id() {
        let a = FrontierKey {
            priority: 1.0,
            depth: 2,
            id: 5,
        };
        let b = FrontierKey {
            priority: 1.0,
            depth: 3,
            id: 1,
        };
        assert!(a < b, "shallower depth should sort first on priority tie");

        let c = FrontierKey {
            priority: 1.0,
            depth: 2,
            id: 3,
        };
        assert!(c < a, "older id should sort first on priority+depth tie");
    }

    #[test]
    fn nan_priority_sorts_last() {
        let real = FrontierKey {
            priority: 1.0e9,
            depth: 0,
            id: 0,
        };
        let nan = FrontierKey {
            priority: f64::NAN,
            depth: 0,
            id: 1,
        };
        assert!(real < nan, "NaN priority must sort after real priorities");
    }

    #[test]
    fn priority_is_sum_of_cost_and_heuristic() {
        let node = SearchNode {
            id: 0,
            parent: None,
            state: (),
            depth: 0,
            cost: 3.0,
            heuristic: 7.0,
        };
        assert!((node.priority() - 10.0).abs() < f64::EPSILON);
    }
}
