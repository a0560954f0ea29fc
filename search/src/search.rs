//! Search entry points and expansion loops.
//!
//! All three algorithms share the same caller contract: a start state, a
//! goal predicate, and a successor function (A* adds a heuristic). The
//! successor function must be deterministic within a run for reproducible
//! results; goal and heuristic functions are expected to be pure. Each
//! invocation owns its own frontier and visited containers, so independent
//! searches may run on separate threads when the caller's functions allow it.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::arena::{NodeArena, NodeId};
use crate::frontier::{BestFirstFrontier, FifoFrontier, LifoFrontier};
use crate::node::{FrontierKey, SearchNode};
use crate::path::node_to_path;
use crate::report::{Algorithm, SearchReport, TerminationReason};

/// Edge cost between a node and its successor. Successors are unweighted
/// moves, so every edge costs the same.
const UNIT_EDGE_COST: f64 = 1.0;

/// Result of a search execution.
///
/// Always carries the full node arena and a [`SearchReport`], whether or not
/// a goal was found. "No path exists" shows up as `goal == None` with
/// [`TerminationReason::FrontierExhausted`] — a normal outcome, not an error.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// Every node created during the search, parent links included.
    pub arena: NodeArena<S>,
    /// Arena id of the terminal node (if a goal was found).
    pub goal: Option<NodeId>,
    /// Counters and termination reason for this run.
    pub report: SearchReport,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal.is_some()
    }

    /// The terminal node, if a goal was found.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode<S>> {
        self.goal.and_then(|id| self.arena.get(id))
    }
}

impl<S: Clone> SearchResult<S> {
    /// Reconstruct the start-to-goal state sequence, or `None` if no goal
    /// was found.
    #[must_use]
    pub fn path(&self) -> Option<Vec<S>> {
        self.goal.map(|id| node_to_path(&self.arena, id))
    }
}

/// Depth-first search from `start`.
///
/// Maintains a LIFO stack of frontier nodes; the last successor pushed is
/// explored first. A state is marked visited when it is popped for
/// expansion, and successors already visited are not pushed. Visited
/// tracking also defends against malformed successor functions that return
/// the current state itself (self-loops terminate instead of spinning).
///
/// On an unbounded state space depth-first search is not guaranteed to
/// terminate; callers own that bound (a finite grid, for example).
pub fn depth_first_search<S, G, F>(start: S, is_goal: G, successors: F) -> SearchResult<S>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<S>,
{
    let mut arena = NodeArena::new();
    let mut frontier = LifoFrontier::new();
    let mut visited: HashSet<S> = HashSet::new();
    let mut expansions: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;

    let root = arena.push(start, None, 0.0, 0.0);
    frontier.push(root);

    let termination = loop {
        let Some(id) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        expansions += 1;

        let state = arena[id].state.clone();
        if is_goal(&state) {
            break TerminationReason::GoalReached { node: id };
        }
        // Visited is marked at pop time; a state reached twice before its
        // first expansion sits on the stack twice and the later pop is
        // skipped here.
        if !visited.insert(state.clone()) {
            duplicates_suppressed += 1;
            continue;
        }

        for successor in successors(&state) {
            if visited.contains(&successor) {
                duplicates_suppressed += 1;
                continue;
            }
            let child = arena.push(successor, Some(id), 0.0, 0.0);
            frontier.push(child);
        }
    };

    let goal = match termination {
        TerminationReason::GoalReached { node } => Some(node),
        TerminationReason::FrontierExhausted => None,
    };
    let report = SearchReport {
        algorithm: Algorithm::DepthFirst,
        expansions,
        nodes_created: arena.len() as u64,
        duplicates_suppressed,
        frontier_high_water: frontier.high_water(),
        termination,
    };
    SearchResult {
        arena,
        goal,
        report,
    }
}

/// Breadth-first search from `start`.
///
/// Identical structure to [`depth_first_search`] with a FIFO queue in place
/// of the stack, so all nodes at depth `k` are expanded before any node at
/// depth `k + 1`: the first goal node dequeued yields a minimum-edge path.
///
/// A state is marked visited at ENQUEUE time, not at dequeue time. Marking
/// at dequeue would let the same state be enqueued once per discovered edge
/// and balloon the queue; enqueue-time marking bounds the queue at one entry
/// per reachable state.
pub fn breadth_first_search<S, G, F>(start: S, is_goal: G, successors: F) -> SearchResult<S>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<S>,
{
    let mut arena = NodeArena::new();
    let mut frontier = FifoFrontier::new();
    let mut visited: HashSet<S> = HashSet::new();
    let mut expansions: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;

    visited.insert(start.clone());
    let root = arena.push(start, None, 0.0, 0.0);
    frontier.push(root);

    let termination = loop {
        let Some(id) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        expansions += 1;

        let state = arena[id].state.clone();
        if is_goal(&state) {
            break TerminationReason::GoalReached { node: id };
        }

        for successor in successors(&state) {
            if visited.insert(successor.clone()) {
                let child = arena.push(successor, Some(id), 0.0, 0.0);
                frontier.push(child);
            } else {
                duplicates_suppressed += 1;
            }
        }
    };

    let goal = match termination {
        TerminationReason::GoalReached { node } => Some(node),
        TerminationReason::FrontierExhausted => None,
    };
    let report = SearchReport {
        algorithm: Algorithm::BreadthFirst,
        expansions,
        nodes_created: arena.len() as u64,
        duplicates_suppressed,
        frontier_high_water: frontier.high_water(),
        termination,
    };
    SearchResult {
        arena,
        goal,
        report,
    }
}

/// A* search from `start`, guided by `heuristic`.
///
/// Pops the frontier node minimizing `cost + heuristic` (ties broken by
/// shallower depth, then older node id — see [`FrontierKey`]). A map from
/// state to best known cost replaces the plain visited set: a successor is
/// pushed when it is new or when it improves on the recorded cost, so the
/// loop generalizes beyond the unit edges used here.
///
/// The returned path is optimal when `heuristic` is admissible (never
/// overestimates the true remaining cost). Admissibility is the caller's
/// responsibility; it is not validated here.
pub fn a_star_search<S, G, F, H>(
    start: S,
    is_goal: G,
    successors: F,
    heuristic: H,
) -> SearchResult<S>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    F: Fn(&S) -> Vec<S>,
    H: Fn(&S) -> f64,
{
    let mut arena = NodeArena::new();
    let mut frontier = BestFirstFrontier::new();
    let mut best_cost: HashMap<S, f64> = HashMap::new();
    let mut expansions: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;

    let root_heuristic = heuristic(&start);
    best_cost.insert(start.clone(), 0.0);
    let root = arena.push(start, None, 0.0, root_heuristic);
    frontier.push(FrontierKey::from(&arena[root]), root);

    let termination = loop {
        let Some(id) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        let state = arena[id].state.clone();
        let cost = arena[id].cost;
        // A cheaper re-insertion for this state has already been expanded;
        // this entry is stale.
        if best_cost.get(&state).is_some_and(|&best| cost > best) {
            continue;
        }
        expansions += 1;

        if is_goal(&state) {
            break TerminationReason::GoalReached { node: id };
        }

        let new_cost = cost + UNIT_EDGE_COST;
        for successor in successors(&state) {
            let improves = match best_cost.get(&successor) {
                None => true,
                Some(&known) => new_cost < known,
            };
            if !improves {
                duplicates_suppressed += 1;
                continue;
            }
            let successor_heuristic = heuristic(&successor);
            best_cost.insert(successor.clone(), new_cost);
            let child = arena.push(successor, Some(id), new_cost, successor_heuristic);
            frontier.push(FrontierKey::from(&arena[child]), child);
        }
    };

    let goal = match termination {
        TerminationReason::GoalReached { node } => Some(node),
        TerminationReason::FrontierExhausted => None,
    };
    let report = SearchReport {
        algorithm: Algorithm::AStar,
        expansions,
        nodes_created: arena.len() as u64,
        duplicates_suppressed,
        frontier_high_water: frontier.high_water(),
        termination,
    };
    SearchResult {
        arena,
        goal,
        report,
    }
}
