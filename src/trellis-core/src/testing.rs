//! Testing utilities and fixtures for trellis-core.
//!
//! This module provides common host-graph shapes and helpers to make
//! testing the filtering components easier and more consistent.

use std::collections::HashSet;

use crate::graph::{AdjacencyGraph, NodeId};

/// Triangle on nodes 1, 2, 3.
pub fn triangle() -> AdjacencyGraph {
    AdjacencyGraph::from_edges([(1, 2), (2, 3), (1, 3)])
}

/// A single edge between nodes 1 and 2.
pub fn lone_edge() -> AdjacencyGraph {
    AdjacencyGraph::from_edges([(1, 2)])
}

/// Path 1 - 2 - ... - n.
pub fn path(n: NodeId) -> AdjacencyGraph {
    AdjacencyGraph::from_edges((1..n).map(|i| (i, i + 1)))
}

/// Complete graph on nodes 1..=n.
pub fn complete(n: NodeId) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    for u in 1..=n {
        graph.add_node(u);
        for v in (u + 1)..=n {
            graph.add_edge(u, v);
        }
    }
    graph
}

/// Collect node IDs into a subset usable for view construction.
pub fn node_set(ids: impl IntoIterator<Item = NodeId>) -> HashSet<NodeId> {
    ids.into_iter().collect()
}
