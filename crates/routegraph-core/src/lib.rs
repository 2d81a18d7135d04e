//! # RouteGraph Core
//!
//! Concurrent in-memory graph engine with user-valued vertices and
//! pluggable path finding.
//!
//! A [`Graph`] owns a vertex store and a value-deduplicated edge set
//! behind independent reader-writer locks. Path searches run on immutable
//! [`TransitionMap`] snapshots, so readers never block behind writers for
//! longer than a snapshot copy and never observe half-applied mutations.
//!
//! ## Features
//!
//! - **Thread-safe container**: all operations take `&self`; share with `Arc`
//! - **Directed and undirected**: reversals synthesized at snapshot time
//! - **Pluggable finders**: any [`PathFinder`] value; depth-bounded DFS by default
//! - **Typed edges**: [`SimpleEdge`], [`WeightedEdge`], or your own [`Edge`]
//!
//! ## Quick Start
//!
//! ```rust
//! use routegraph_core::{Graph, SimpleEdge};
//!
//! fn main() -> routegraph_core::Result<()> {
//!     let graph: Graph<&str> = Graph::directed();
//!
//!     let home = graph.add_vertex("home");
//!     let hub = graph.add_vertex("hub");
//!     let work = graph.add_vertex("work");
//!
//!     graph.add_edge(SimpleEdge::new(home, hub))?;
//!     graph.add_edge(SimpleEdge::new(hub, work))?;
//!
//!     let path = graph.find_path(home, work);
//!     assert_eq!(path.len(), 2);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::float_cmp))]

pub mod edge;
#[cfg(test)]
mod edge_tests;
pub mod error;
pub mod finder;
pub mod graph;
pub mod transition;

pub use edge::{Edge, SimpleEdge, VertexId, WeightedEdge};
pub use error::{Error, Result};
pub use finder::{DepthFirstPathFinder, PathFinder};
pub use graph::Graph;
pub use transition::TransitionMap;
