//! Edge types for the in-memory graph.
//!
//! Edges carry vertex IDs only; vertex payloads live in the graph's vertex
//! store. An edge is formally directed even inside an undirected graph:
//! the undirected interpretation is produced at snapshot time by pairing
//! each stored edge with its reversal.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier of a vertex: dense, assigned from 1, never reused.
///
/// 0 is never assigned and always fails edge validation.
pub type VertexId = u64;

/// Capability set shared by every edge variant.
///
/// `Clone` is the value copy, `Eq + Hash` define value comparison for the
/// edge set, and `Display` is the stable textual form. `reversed` must
/// swap the endpoints while preserving every other attribute, so that a
/// snapshot of an undirected graph carries the same variant in both
/// directions.
pub trait Edge: Clone + Eq + Hash + fmt::Display {
    /// Returns the source vertex ID.
    fn source(&self) -> VertexId;

    /// Returns the target vertex ID.
    fn target(&self) -> VertexId;

    /// Returns a new edge with the endpoints swapped.
    #[must_use]
    fn reversed(&self) -> Self;
}

/// A plain edge: an ordered pair of vertex IDs.
///
/// Renders as `(source,target)`. Source and target may be equal
/// (self-loop).
///
/// # Example
///
/// ```rust
/// use routegraph_core::SimpleEdge;
/// use routegraph_core::Edge;
///
/// let edge = SimpleEdge::new(1, 2);
/// assert_eq!(edge.source(), 1);
/// assert_eq!(edge.target(), 2);
/// assert_eq!(edge.to_string(), "(1,2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleEdge {
    source: VertexId,
    target: VertexId,
}

impl SimpleEdge {
    /// Creates an edge between the given vertex IDs.
    ///
    /// Endpoints are not validated here; the graph validates them against
    /// its vertex store on insertion.
    #[must_use]
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }
}

impl Edge for SimpleEdge {
    fn source(&self) -> VertexId {
        self.source
    }

    fn target(&self) -> VertexId {
        self.target
    }

    fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

impl fmt::Display for SimpleEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.source, self.target)
    }
}

/// An edge carrying a floating-point weight.
///
/// The weight survives copy and reversal and is appended to the textual
/// form after a `|` separator: `(source,target|weight)`.
///
/// Weights take no part in the default path finder; they exist for
/// user-defined finders and for callers that attach costs to transitions.
///
/// # Example
///
/// ```rust
/// use routegraph_core::{Edge, WeightedEdge};
///
/// let edge = WeightedEdge::new(1, 2, 1.5);
/// assert_eq!(edge.weight(), 1.5);
/// assert_eq!(edge.reversed().weight(), 1.5);
/// assert_eq!(edge.to_string(), "(1,2|1.5)");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedEdge {
    source: VertexId,
    target: VertexId,
    weight: f32,
}

impl WeightedEdge {
    /// Creates a weighted edge between the given vertex IDs.
    #[must_use]
    pub fn new(source: VertexId, target: VertexId, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the weight of the edge.
    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

impl Edge for WeightedEdge {
    fn source(&self) -> VertexId {
        self.source
    }

    fn target(&self) -> VertexId {
        self.target
    }

    fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

// Value comparison over all attributes. The weight takes part via its bit
// pattern, keeping Eq and Hash consistent for use in the edge set.
impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl Eq for WeightedEdge {}

impl Hash for WeightedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}|{})", self.source, self.target, self.weight)
    }
}
