//! Per-search report: counters and termination reason.
//!
//! Every search run produces a [`SearchReport`] alongside its result,
//! regardless of whether a goal was reached. "No path exists" is a normal
//! outcome ([`TerminationReason::FrontierExhausted`]), never an error.

use crate::arena::NodeId;

/// Which algorithm produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Algorithm {
    /// Stable lowercase name used in the JSON rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
            Self::AStar => "a_star",
        }
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node satisfying the goal predicate was popped from the frontier.
    GoalReached { node: NodeId },
    /// The frontier emptied without a goal: no path exists.
    FrontierExhausted,
}

/// Counters describing one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Which algorithm ran.
    pub algorithm: Algorithm,
    /// Number of nodes popped from the frontier.
    pub expansions: u64,
    /// Number of nodes created (root included).
    pub nodes_created: u64,
    /// Successor states suppressed by visited/best-cost tracking.
    pub duplicates_suppressed: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
    /// Why the search stopped.
    pub termination: TerminationReason,
}

impl SearchReport {
    /// Render the report as a JSON value for external tooling.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let termination = match self.termination {
            TerminationReason::GoalReached { node } => serde_json::json!({
                "reason": "goal_reached",
                "node": node,
            }),
            TerminationReason::FrontierExhausted => serde_json::json!({
                "reason": "frontier_exhausted",
            }),
        };
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "expansions": self.expansions,
            "nodes_created": self.nodes_created,
            "duplicates_suppressed": self.duplicates_suppressed,
            "frontier_high_water": self.frontier_high_water,
            "termination": termination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_rendering_carries_all_counters() {
        let report = SearchReport {
            algorithm: Algorithm::BreadthFirst,
            expansions: 9,
            nodes_created: 12,
            duplicates_suppressed: 4,
            frontier_high_water: 5,
            termination: TerminationReason::GoalReached { node: 11 },
        };
        let json = report.to_json();
        assert_eq!(json["algorithm"], "breadth_first");
        assert_eq!(json["expansions"], 9);
        assert_eq!(json["nodes_created"], 12);
        assert_eq!(json["duplicates_suppressed"], 4);
        assert_eq!(json["frontier_high_water"], 5);
        assert_eq!(json["termination"]["reason"], "goal_reached");
        assert_eq!(json["termination"]["node"], 11);
    }

    #[test]
    fn exhausted_rendering_has_no_node_field() {
        let report = SearchReport {
            algorithm: Algorithm::DepthFirst,
            expansions: 3,
            nodes_created: 3,
            duplicates_suppressed: 0,
            frontier_high_water: 2,
            termination: TerminationReason::FrontierExhausted,
        };
        let json = report.to_json();
        assert_eq!(json["termination"]["reason"], "frontier_exhausted");
        assert!(json["termination"].get("node").is_none());
    }
}
