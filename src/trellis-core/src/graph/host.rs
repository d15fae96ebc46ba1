//! Host graph contract and in-memory reference implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use common_error::{TrellisError, TrellisResult};

use super::NodeId;

/// Read-only contract a host graph exposes to graph views.
///
/// Adjacency is assumed to be symmetric (`v ∈ N(u)` iff `u ∈ N(v)`);
/// views built over a directed or inconsistent host have unspecified
/// behavior. Neighbor sequences are finite and unordered and may contain
/// duplicates; consumers treat them as multisets. Self-loops are allowed.
pub trait HostGraph {
    /// Check whether the graph contains a node with the given ID.
    fn contains_node(&self, id: NodeId) -> bool;

    /// The neighbors of a node. Unknown nodes yield an empty sequence.
    fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_;
}

/// In-memory adjacency-map host graph.
///
/// A node exists iff it has an adjacency entry. `add_edge` creates
/// missing endpoints and records both directions, so adjacency stays
/// symmetric by construction; a self-loop is recorded once. Parallel
/// edges are kept as supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    edges: usize,
}

impl AdjacencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an undirected edge list.
    pub fn from_edges(edges: impl IntoIterator<Item = (NodeId, NodeId)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Add a node with no neighbors. Existing nodes are left untouched.
    pub fn add_node(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    /// Add an undirected edge between `u` and `v`, creating either
    /// endpoint if absent.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        self.adjacency.entry(u).or_default().push(v);
        if u != v {
            self.adjacency.entry(v).or_default().push(u);
        }
        self.edges += 1;
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added to the graph (parallel edges counted).
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Degree of a node, counting parallel edges. Unknown nodes have
    /// degree zero; a self-loop contributes one.
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(&id).map_or(0, Vec::len)
    }

    /// Iterate over the IDs of all nodes in the graph.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Validate adjacency symmetry and neighbor existence.
    ///
    /// `add_edge` maintains both properties, but deserialized graphs may
    /// violate them.
    pub fn validate(&self) -> TrellisResult<()> {
        for (&node, neighbors) in &self.adjacency {
            for &neighbor in neighbors {
                match self.adjacency.get(&neighbor) {
                    None => return Err(TrellisError::UnknownNode(neighbor)),
                    Some(back) if !back.contains(&node) => {
                        return Err(TrellisError::graph(format!(
                            "asymmetric adjacency between nodes {node} and {neighbor}"
                        )));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

impl HostGraph for AdjacencyGraph {
    fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }
}
