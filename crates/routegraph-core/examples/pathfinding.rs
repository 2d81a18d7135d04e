//! Builds a small transit network and runs path searches over it.
//!
//! Run with `RUST_LOG=debug cargo run --example pathfinding` to see the
//! search events.

use routegraph_core::{Edge, Graph, SimpleEdge, WeightedEdge};
use tracing_subscriber::EnvFilter;

fn main() -> routegraph_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A directed network of stations.
    let graph: Graph<&str> = Graph::directed();
    let home = graph.add_vertex("home");
    let market = graph.add_vertex("market");
    let bridge = graph.add_vertex("bridge");
    let harbor = graph.add_vertex("harbor");
    let depot = graph.add_vertex("depot");

    graph.add_edge(SimpleEdge::new(home, market))?;
    graph.add_edge(SimpleEdge::new(market, bridge))?;
    graph.add_edge(SimpleEdge::new(market, harbor))?;
    graph.add_edge(SimpleEdge::new(bridge, depot))?;
    graph.add_edge(SimpleEdge::new(depot, market))?;
    graph.add_edge(SimpleEdge::new(home, bridge))?;

    println!("graph: {graph}");

    let stations = graph.vertices();
    let path = graph.find_path(home, harbor);
    println!("home -> harbor:");
    for edge in &path {
        let from = stations[(edge.source() - 1) as usize];
        let to = stations[(edge.target() - 1) as usize];
        println!("  {edge}  {from} -> {to}");
    }

    // The same network with travel times attached.
    let timed: Graph<&str, WeightedEdge> = Graph::undirected();
    for station in &stations {
        timed.add_vertex(*station);
    }
    timed.add_edge(WeightedEdge::new(home, market, 4.5))?;
    timed.add_edge(WeightedEdge::new(market, harbor, 12.0))?;

    let back = timed.find_path(harbor, home);
    println!("harbor -> home (weighted, undirected): {} hops", back.len());
    for edge in &back {
        println!("  {edge}");
    }

    Ok(())
}
