//! Tests for edge types (SimpleEdge, WeightedEdge).

use std::collections::HashSet;

use super::edge::{Edge, SimpleEdge, WeightedEdge};

#[test]
fn test_simple_edge_new() {
    let edge = SimpleEdge::new(1, 2);
    assert_eq!(edge.source(), 1);
    assert_eq!(edge.target(), 2);
}

#[test]
fn test_simple_edge_self_loop() {
    let edge = SimpleEdge::new(3, 3);
    assert_eq!(edge.source(), 3);
    assert_eq!(edge.target(), 3);
}

#[test]
fn test_simple_edge_copy_preserves_value() {
    let edge = SimpleEdge::new(1, 2);
    let copy = edge.clone();
    assert_eq!(copy.source(), edge.source());
    assert_eq!(copy.target(), edge.target());
    assert_eq!(copy, edge);
}

#[test]
fn test_simple_edge_reversed() {
    let edge = SimpleEdge::new(1, 2);
    let rev = edge.reversed();
    assert_eq!(rev.source(), 2);
    assert_eq!(rev.target(), 1);
    // Reversing twice is the identity.
    assert_eq!(rev.reversed(), edge);
}

#[test]
fn test_simple_edge_display() {
    assert_eq!(SimpleEdge::new(1, 2).to_string(), "(1,2)");
    assert_eq!(SimpleEdge::new(5, 5).to_string(), "(5,5)");
}

#[test]
fn test_simple_edge_value_equality_in_set() {
    let mut set = HashSet::new();
    set.insert(SimpleEdge::new(1, 2));
    set.insert(SimpleEdge::new(1, 2));
    set.insert(SimpleEdge::new(2, 1));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_weighted_edge_new() {
    let edge = WeightedEdge::new(1, 2, 1.5);
    assert_eq!(edge.source(), 1);
    assert_eq!(edge.target(), 2);
    assert_eq!(edge.weight(), 1.5);
}

#[test]
fn test_weighted_edge_copy_preserves_weight() {
    let edge = WeightedEdge::new(1, 2, 3.25);
    let copy = edge.clone();
    assert_eq!(copy.source(), 1);
    assert_eq!(copy.target(), 2);
    assert_eq!(copy.weight(), 3.25);
    assert_eq!(copy, edge);
}

#[test]
fn test_weighted_edge_reversed_preserves_weight() {
    let edge = WeightedEdge::new(1, 2, 0.2);
    let rev = edge.reversed();
    assert_eq!(rev.source(), 2);
    assert_eq!(rev.target(), 1);
    assert_eq!(rev.weight(), 0.2);
}

#[test]
fn test_weighted_edge_display_includes_weight() {
    let edge = WeightedEdge::new(1, 2, 1.5);
    assert_eq!(edge.to_string(), "(1,2|1.5)");
    assert!(edge.to_string().contains('|'));
}

#[test]
fn test_weighted_edge_equality_considers_weight() {
    let a = WeightedEdge::new(1, 2, 1.5);
    let b = WeightedEdge::new(1, 2, 1.5);
    let c = WeightedEdge::new(1, 2, 2.5);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    set.insert(c);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_weighted_edge_serialize_deserialize() {
    let edge = WeightedEdge::new(4, 3, 0.2);
    let json = serde_json::to_string(&edge).unwrap();
    let restored: WeightedEdge = serde_json::from_str(&json).unwrap();
    assert_eq!(edge, restored);
}

#[test]
fn test_simple_edge_serialize_deserialize() {
    let edge = SimpleEdge::new(1, 2);
    let json = serde_json::to_string(&edge).unwrap();
    let restored: SimpleEdge = serde_json::from_str(&json).unwrap();
    assert_eq!(edge, restored);
}
