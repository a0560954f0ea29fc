//! Path reconstruction from a terminal node back to the root.

use crate::arena::{NodeArena, NodeId};

/// Reconstruct the start-to-goal state sequence ending at `terminal`.
///
/// Walks parent indices from `terminal` to the root (the node with no
/// parent), collecting states, then reverses so the sequence runs start →
/// goal inclusive. A root terminal yields a single-element path. Terminates
/// because parent indices always reference earlier arena slots.
///
/// Returns an empty path if `terminal` is not a valid id in `arena`.
#[must_use]
pub fn node_to_path<S: Clone>(arena: &NodeArena<S>, terminal: NodeId) -> Vec<S> {
    let mut path = Vec::new();
    let mut current = Some(terminal);

    while let Some(id) = current {
        let Some(node) = arena.get(id) else {
            break;
        };
        path.push(node.state.clone());
        current = node.parent;
    }

    path.reverse();
    path
}
