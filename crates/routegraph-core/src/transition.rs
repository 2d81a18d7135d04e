//! Adjacency snapshots consumed by path finders.
//!
//! A [`TransitionMap`] is a read-only projection of the edge set at one
//! moment in time: each vertex ID maps to the ordered list of edges leaving
//! it. The graph builds a fresh map for every search and hands it to the
//! finder by value, so an in-flight search never observes later mutations.

use std::collections::HashMap;

use crate::edge::{Edge, VertexId};

/// Outgoing-edge lists keyed by source vertex ID.
///
/// Absence of a key means the vertex has no outgoing edges. For undirected
/// graphs the owning [`Graph`](crate::Graph) materializes a reversed copy
/// of every non-self-loop edge before grouping, so both directions appear
/// here with the same edge attributes.
///
/// List order within a vertex follows edge-set insertion order.
#[derive(Debug, Clone)]
pub struct TransitionMap<E> {
    transitions: HashMap<VertexId, Vec<E>>,
}

impl<E> Default for TransitionMap<E> {
    fn default() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }
}

impl<E: Edge> TransitionMap<E> {
    /// Groups the given edges by their source vertex, preserving order.
    #[must_use]
    pub fn from_edges(edges: Vec<E>) -> Self {
        let mut transitions: HashMap<VertexId, Vec<E>> = HashMap::new();
        for edge in edges {
            transitions.entry(edge.source()).or_default().push(edge);
        }
        Self { transitions }
    }

    /// Returns the outgoing edges of a vertex, or `None` if it has none.
    #[must_use]
    pub fn outgoing(&self, vertex: VertexId) -> Option<&[E]> {
        self.transitions.get(&vertex).map(Vec::as_slice)
    }

    /// Returns true if the vertex has at least one outgoing edge.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.transitions.contains_key(&vertex)
    }

    /// Returns the number of vertices with at least one outgoing edge.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.transitions.len()
    }

    /// Returns the total number of directed transitions in the map.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }

    /// Returns true if the map holds no transitions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
