//! Append-only node arena.
//!
//! Nodes reference their parents by arena index rather than by shared
//! pointer. A node can only name an already-inserted slot as its parent, so
//! every parent chain is finite and acyclic by construction, and the chain
//! survives the frontier and visited containers being dropped because the
//! arena is owned by the search result.

use crate::node::SearchNode;

/// Index of a node within a [`NodeArena`].
pub type NodeId = usize;

/// Append-only store of every node created during one search run.
#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> NodeArena<S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a node, assigning the next id. Returns the new node's id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not reference an existing slot. The search
    /// loops only ever pass ids returned by earlier `push` calls.
    pub fn push(
        &mut self,
        state: S,
        parent: Option<NodeId>,
        cost: f64,
        heuristic: f64,
    ) -> NodeId {
        let id = self.nodes.len();
        let depth = match parent {
            Some(p) => {
                assert!(p < id, "parent must be an existing arena slot");
                self.nodes[p].depth + 1
            }
            None => 0,
        };
        self.nodes.push(SearchNode {
            id,
            parent,
            state,
            depth,
            cost,
            heuristic,
        });
        id
    }

    /// Look up a node by id. Returns `None` for an out-of-range id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S>> {
        self.nodes.get(id)
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::ops::Index<NodeId> for NodeArena<S> {
    type Output = SearchNode<S>;

    fn index(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id]
    }
}
