//! The concurrent graph container.
//!
//! [`Graph`] owns a vertex store and an edge set behind two independent
//! reader-writer locks. Mutation and path finding may run concurrently:
//! every search operates on a [`TransitionMap`] snapshot materialized under
//! a short edge read lock, so in-flight searches never observe later edge
//! insertions.
//!
//! Lock discipline:
//!
//! - `add_vertex` holds the vertex write lock for the whole
//!   append-and-ID-assignment section.
//! - `add_edge` reads the vertex counter under the vertex read lock,
//!   releases it, then takes the edge write lock. Vertex IDs are monotonic
//!   and never deleted, so a passing endpoint check cannot be invalidated
//!   by the gap between the two locks.
//! - Snapshot construction holds only the edge read lock.
//! - No operation holds both locks at once, and no cross-lock consistency
//!   is promised: an edge inserted right after a vertex may become visible
//!   to other threads before the vertex snapshot that contains it.

use std::fmt;

use indexmap::IndexSet;
use parking_lot::RwLock;

use crate::edge::{Edge, SimpleEdge, VertexId};
use crate::error::{Error, Result};
use crate::finder::{DepthFirstPathFinder, PathFinder};
use crate::transition::TransitionMap;

/// A thread-safe in-memory graph with user-valued vertices.
///
/// `V` is the opaque vertex payload; `E` the edge type (any [`Edge`]
/// implementor, [`SimpleEdge`] by default). Vertices receive dense IDs
/// starting at 1, assigned in insertion order and never reused. Edges are
/// value-compared and deduplicated; insertion order is preserved, so
/// transition-map list order and the `Display` rendering are stable
/// across runs.
///
/// All operations take `&self`; share the graph across threads with
/// `Arc`. Payload values themselves are not synchronized by the graph.
///
/// # Example
///
/// ```rust
/// use routegraph_core::{Graph, SimpleEdge};
///
/// let graph: Graph<&str> = Graph::directed();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.add_edge(SimpleEdge::new(a, b))?;
/// graph.add_edge(SimpleEdge::new(b, c))?;
///
/// let path = graph.find_path(a, c);
/// assert_eq!(path.len(), 2);
/// # Ok::<(), routegraph_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Graph<V, E = SimpleEdge> {
    /// Vertex payloads; index `i` holds the value of vertex ID `i + 1`.
    vertices: RwLock<Vec<V>>,
    /// Value-deduplicated edge set in insertion order.
    edges: RwLock<IndexSet<E>>,
    directed: bool,
}

impl<V, E: Edge> Graph<V, E> {
    fn new(directed: bool, vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: RwLock::new(Vec::with_capacity(vertex_capacity)),
            edges: RwLock::new(IndexSet::with_capacity(edge_capacity)),
            directed,
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true, 0, 0)
    }

    /// Creates an empty undirected graph.
    ///
    /// Stored edges keep their formal orientation; the reverse direction
    /// is synthesized into every transition-map snapshot rather than
    /// stored.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false, 0, 0)
    }

    /// Creates an empty directed graph with pre-allocated capacity.
    #[must_use]
    pub fn directed_with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self::new(true, vertex_capacity, edge_capacity)
    }

    /// Creates an empty undirected graph with pre-allocated capacity.
    #[must_use]
    pub fn undirected_with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self::new(false, vertex_capacity, edge_capacity)
    }

    /// Adds a vertex and returns its ID.
    ///
    /// IDs are dense and start at 1. Concurrent calls produce distinct
    /// IDs and never lose an insertion; the ordering between concurrent
    /// callers is unspecified.
    #[allow(clippy::cast_possible_truncation)] // usize fits VertexId on supported targets
    pub fn add_vertex(&self, value: V) -> VertexId {
        let mut vertices = self.vertices.write();
        vertices.push(value);
        vertices.len() as VertexId
    }

    /// Adds an edge connecting two existing vertices.
    ///
    /// Both endpoints must be in `[1, current max ID]`; the counter is
    /// read once at entry. Inserting an edge equal to one already stored
    /// is silently idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if either endpoint is out of
    /// range.
    #[allow(clippy::cast_possible_truncation)] // usize fits VertexId on supported targets
    pub fn add_edge(&self, edge: E) -> Result<()> {
        let max_id = self.vertices.read().len() as VertexId;

        let from = edge.source();
        let to = edge.target();
        if from == 0 || from > max_id || to == 0 || to > max_id {
            tracing::warn!(from, to, max_id, "edge rejected: endpoint out of range");
            return Err(Error::InvalidEndpoint { from, to });
        }

        self.edges.write().insert(edge);
        Ok(())
    }

    /// Returns a path from `from` to `to` using the default
    /// [`DepthFirstPathFinder`], or an empty list if none is found.
    ///
    /// The path is directed along ascending list indices even for
    /// undirected graphs: the first edge starts at `from`, the last ends
    /// at `to`. The result is not guaranteed to be the shortest path.
    #[must_use]
    pub fn find_path(&self, from: VertexId, to: VertexId) -> Vec<E> {
        self.find_path_with(from, to, DepthFirstPathFinder::new())
    }

    /// Returns a path from `from` to `to` using a caller-supplied finder.
    ///
    /// A fresh [`TransitionMap`] snapshot is installed on the finder
    /// before the search, so edge mutations racing with this call do not
    /// affect the result.
    #[must_use]
    pub fn find_path_with<F>(&self, from: VertexId, to: VertexId, mut finder: F) -> Vec<E>
    where
        F: PathFinder<E>,
    {
        finder.set_transition_map(self.transition_map());
        let path = finder.find(from, to);
        tracing::debug!(from, to, edges = path.len(), "path search completed");
        path
    }

    /// Materializes an adjacency snapshot of the current edge set.
    ///
    /// Edges are copied under the edge read lock; for undirected graphs a
    /// reversed copy of every non-self-loop edge is appended before
    /// grouping by source vertex. The snapshot is independent of the
    /// graph: later mutations never show through it.
    #[must_use]
    pub fn transition_map(&self) -> TransitionMap<E> {
        let mut copies: Vec<E> = {
            let edges = self.edges.read();
            edges.iter().cloned().collect()
        };

        if !self.directed {
            let reversed: Vec<E> = copies
                .iter()
                .filter(|edge| edge.source() != edge.target())
                .map(Edge::reversed)
                .collect();
            copies.extend(reversed);
        }

        TransitionMap::from_edges(copies)
    }

    /// Returns a snapshot of the vertex values in ascending ID order.
    ///
    /// Each call builds a fresh container; callers that need by-reference
    /// sharing should use `Arc<T>` as the payload type.
    #[must_use]
    pub fn vertices(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.vertices.read().iter().cloned().collect()
    }

    /// Replaces every vertex value with `f(value)`, in ascending ID order.
    ///
    /// The whole sweep runs under the vertex write lock, so concurrent
    /// `apply` calls serialize and compose in their serialization order.
    pub fn apply<F>(&self, mut f: F)
    where
        F: FnMut(&V) -> V,
    {
        let mut vertices = self.vertices.write();
        for value in vertices.iter_mut() {
            *value = f(value);
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.read().len()
    }

    /// Returns the number of stored edges (reversals synthesized for
    /// undirected snapshots are not stored and not counted).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.read().len()
    }

    /// Returns true if a vertex with the given ID has been assigned.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // usize fits VertexId on supported targets
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id >= 1 && id <= self.vertices.read().len() as VertexId
    }

    /// Returns true if this graph was created directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.read().is_empty()
    }
}

/// Comma-joined rendering of the stored edges, in insertion order.
impl<V, E: Edge> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self.edges.read();
        for (i, edge) in edges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}

// Compile-time check: Graph must be Send + Sync for thread-safe payloads.
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph<u64, SimpleEdge>>();
    assert_send_sync::<Graph<String, crate::edge::WeightedEdge>>();
};
