//! Path finders over transition-map snapshots.
//!
//! A path finder is any value implementing [`PathFinder`]: it receives a
//! fresh [`TransitionMap`] and answers `find` queries against it. The
//! graph constructs finders per call, so implementations can be plain
//! single-use values with no internal synchronization.

use std::collections::HashSet;

use crate::edge::{Edge, VertexId};
use crate::transition::TransitionMap;

/// Capability set of a path finder.
///
/// [`Graph::find_path_with`](crate::Graph::find_path_with) installs a
/// snapshot via `set_transition_map` and then calls `find` once. The
/// returned edge list is ordered along the path: the first edge starts at
/// `from`, the last ends at `to`, and consecutive edges share a vertex.
/// An empty list means no path was found; it is never an error.
pub trait PathFinder<E: Edge> {
    /// Installs the adjacency snapshot to search.
    fn set_transition_map(&mut self, map: TransitionMap<E>);

    /// Returns a path from `from` to `to`, or an empty list.
    fn find(&mut self, from: VertexId, to: VertexId) -> Vec<E>;
}

/// The default path finder: a depth-bounded depth-first search.
///
/// Returns any path between the two vertices, not necessarily the
/// shortest. Branches are explored in transition-map list order and the
/// first branch that reaches the goal wins. Recursion depth is capped at
/// [`Self::MAX_DEPTH`], so a returned path never exceeds 254 edges and a
/// branch cut off by the bound is indistinguishable from a dead end.
///
/// The finder records the start vertex and every scheduled descent target
/// in a passed-vertex set, but edge selection does not consult it;
/// termination on cyclic graphs comes from the depth bound alone.
#[derive(Debug)]
pub struct DepthFirstPathFinder<E> {
    transitions: Option<TransitionMap<E>>,
}

impl<E> DepthFirstPathFinder<E> {
    /// Recursion depth cap. Bounds stack usage on cyclic graphs.
    pub const MAX_DEPTH: usize = 255;

    /// Creates a finder with no snapshot installed.
    #[must_use]
    pub fn new() -> Self {
        Self { transitions: None }
    }
}

impl<E> Default for DepthFirstPathFinder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Edge> PathFinder<E> for DepthFirstPathFinder<E> {
    fn set_transition_map(&mut self, map: TransitionMap<E>) {
        self.transitions = Some(map);
    }

    fn find(&mut self, from: VertexId, to: VertexId) -> Vec<E> {
        let Some(transitions) = self.transitions.as_ref() else {
            return Vec::new();
        };

        let mut passed = HashSet::new();
        passed.insert(from);

        // The path comes back in reverse: each unwinding frame appends the
        // edge it descended through, and one reversal at the top restores
        // traversal order.
        let mut path = reversed_subpath(transitions, from, to, 1, &mut passed);
        path.reverse();
        path
    }
}

fn reversed_subpath<E: Edge>(
    transitions: &TransitionMap<E>,
    from: VertexId,
    to: VertexId,
    depth: usize,
    passed: &mut HashSet<VertexId>,
) -> Vec<E> {
    if depth == DepthFirstPathFinder::<E>::MAX_DEPTH {
        return Vec::new();
    }

    let Some(outgoing) = transitions.outgoing(from) else {
        return Vec::new();
    };

    // Goal short-circuit: the first outgoing edge that lands on the goal
    // ends the search for this branch.
    if let Some(last) = outgoing.iter().find(|edge| edge.target() == to) {
        return vec![last.clone()];
    }

    // Every outgoing edge misses the goal. Record their targets, then
    // descend in list order and keep the first subtree that pans out.
    passed.extend(outgoing.iter().map(Edge::target));

    for edge in outgoing {
        let mut subpath = reversed_subpath(transitions, edge.target(), to, depth + 1, passed);
        if !subpath.is_empty() {
            subpath.push(edge.clone());
            return subpath;
        }
    }

    Vec::new()
}
