//! Labyrinth Search: a generic state-space search engine.
//!
//! Depth-first, breadth-first, and A* search over an arbitrary caller-defined
//! state type. The caller supplies a start state, a goal predicate, and a
//! successor function (plus a heuristic for A*); the engine returns an
//! optional terminal node together with the node arena needed to walk the
//! path back to the start.
//!
//! # Crate dependency graph
//!
//! ```text
//! labyrinth_search  ←  labyrinth_worlds  ←  labyrinth_benchmarks
//! (nodes, frontiers)   (maze, dna, fib)     (criterion fixtures)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] — immutable node with deterministic A* ordering
//! - [`NodeArena`] — append-only node store; parent links are arena indices
//! - [`SearchResult`] — optional terminal node plus the owning arena
//! - [`SearchReport`] — per-search counters and termination reason
//!
//! [`SearchNode`]: node::SearchNode
//! [`NodeArena`]: arena::NodeArena
//! [`SearchResult`]: search::SearchResult
//! [`SearchReport`]: report::SearchReport

#![forbid(unsafe_code)]

pub mod arena;
pub mod frontier;
pub mod node;
pub mod path;
pub mod report;
pub mod search;

pub use arena::{NodeArena, NodeId};
pub use node::{FrontierKey, SearchNode};
pub use path::node_to_path;
pub use report::{Algorithm, SearchReport, TerminationReason};
pub use search::{a_star_search, breadth_first_search, depth_first_search, SearchResult};
