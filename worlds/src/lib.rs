//! Labyrinth Worlds: example callers for the search engine.
//!
//! Each module is a self-contained problem domain. The maze world supplies
//! the start state, goal predicate, successor function, and heuristics that
//! `labyrinth_search` consumes; the DNA and Fibonacci modules are standalone
//! search/computation exercises with no engine dependency.
//!
//! Worlds provide domain data only; the engine owns the expansion loops.

#![forbid(unsafe_code)]

pub mod dna;
pub mod fib;
pub mod maze;
