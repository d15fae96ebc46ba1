//! Weak-link filtering over an induced subgraph.
//!
//! An edge `(u, v)` is a *weak link* if `u` and `v` share no common
//! neighbor within the subgraph's node set. This module provides a view
//! over a subgraph of a host graph that drops weak links from every
//! neighbor listing.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use common_error::{TrellisError, TrellisResult};

use super::{HostGraph, NodeId};

/// A read-only subgraph view that hides weak links.
///
/// The view borrows the host graph and the node subset and mutates
/// neither. Two properties hold for every neighbor listing:
/// 1. Only nodes from the caller-chosen subset appear.
/// 2. Edges whose endpoints share no common neighbor inside the subset
///    (weak links) are dropped.
///
/// Every dropped candidate advances a monotonically non-decreasing
/// accumulator, so a weak-link edge queried from both endpoints
/// contributes twice. The accumulator is atomic: queries may run
/// concurrently from multiple threads as long as the host graph and the
/// subset are not mutated.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
///
/// use trellis_core::graph::{AdjacencyGraph, SubgraphWithoutWeakLinks};
///
/// // A triangle on {1, 2, 3} with a pendant node 4 hanging off node 3.
/// let host = AdjacencyGraph::from_edges([(1, 2), (2, 3), (1, 3), (3, 4)]);
/// let subset: HashSet<u32> = [1, 2, 3, 4].into_iter().collect();
///
/// let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
///
/// // The triangle edges survive; the pendant edge (3, 4) is a weak link.
/// let mut kept: Vec<u32> = view.neighbors(3).collect();
/// kept.sort_unstable();
/// assert_eq!(kept, vec![1, 2]);
/// assert_eq!(view.weak_link_count(), 1);
/// ```
#[derive(Debug)]
pub struct SubgraphWithoutWeakLinks<'g, G> {
    host: &'g G,
    nodes: &'g HashSet<NodeId>,
    weak_links: AtomicU64,
}

impl<'g, G: HostGraph> SubgraphWithoutWeakLinks<'g, G> {
    /// Create a view over `host` restricted to the subset `nodes`.
    ///
    /// Fails with [`TrellisError::UnknownNode`] naming the first offender
    /// encountered if any member of `nodes` is absent from the host
    /// graph. A failed construction leaves no partial state.
    pub fn new(host: &'g G, nodes: &'g HashSet<NodeId>) -> TrellisResult<Self> {
        for &id in nodes {
            if !host.contains_node(id) {
                return Err(TrellisError::UnknownNode(id));
            }
        }

        Ok(Self {
            host,
            nodes,
            weak_links: AtomicU64::new(0),
        })
    }

    /// Number of nodes in the subgraph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over the IDs of the nodes in the subgraph.
    ///
    /// Each node appears exactly once; order is unspecified.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// The neighbors of `node` in the subgraph, with weak links removed.
    ///
    /// Nodes outside the subset yield an empty sequence with no side
    /// effects. For in-subset nodes the sequence contains, in unspecified
    /// order without duplicates, every in-subset host neighbor that
    /// shares at least one in-subset common neighbor with `node`; each
    /// in-subset host neighbor failing that test advances the weak-link
    /// accumulator by one.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.filter_weak_links(node).into_iter()
    }

    /// Total weak-link observations accumulated across all queries.
    pub fn weak_link_count(&self) -> u64 {
        self.weak_links.load(Ordering::Relaxed)
    }

    fn filter_weak_links(&self, node: NodeId) -> HashSet<NodeId> {
        if !self.nodes.contains(&node) {
            return HashSet::new();
        }

        // Candidates: host neighbors of `node` lying in the subset.
        // Collecting into a set collapses parallel edges.
        let candidates: HashSet<NodeId> = self
            .host
            .neighbors(node)
            .filter(|id| self.nodes.contains(id))
            .collect();

        let mut kept = HashSet::with_capacity(candidates.len());
        for &candidate in &candidates {
            // Triangle witness: some host neighbor of the candidate that
            // is itself a candidate of `node`.
            let witnessed = self
                .host
                .neighbors(candidate)
                .any(|w| candidates.contains(&w));
            if witnessed {
                kept.insert(candidate);
            } else {
                self.weak_links.fetch_add(1, Ordering::Relaxed);
            }
        }

        let pruned = candidates.len() - kept.len();
        if pruned > 0 {
            debug!("pruned {pruned} weak link(s) from the neighbors of node {node}");
        }

        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;
    use crate::testing::{lone_edge, node_set, triangle};

    fn sorted(iter: impl Iterator<Item = NodeId>) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = iter.collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_construction_rejects_unknown_node() {
        let host = lone_edge();
        let subset = node_set([1, 2, 99]);

        let err = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap_err();
        assert!(matches!(err, TrellisError::UnknownNode(99)));
    }

    #[test]
    fn test_node_ids_cover_subset_exactly() {
        let host = triangle();
        let subset = node_set([1, 3]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(view.node_count(), 2);
        assert_eq!(sorted(view.node_ids()), vec![1, 3]);
    }

    #[test]
    fn test_lone_edge_is_a_weak_link() {
        let host = lone_edge();
        let subset = node_set([1, 2]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(view.neighbors(1).count(), 0);
        assert_eq!(view.weak_link_count(), 1);
    }

    #[test]
    fn test_subset_excluding_witness_prunes_edge() {
        let host = triangle();
        let subset = node_set([1, 2]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(view.neighbors(1).count(), 0);
        assert_eq!(view.neighbors(2).count(), 0);
        assert_eq!(view.weak_link_count(), 2);
    }

    #[test]
    fn test_out_of_subset_query_has_no_side_effects() {
        let host = triangle();
        let subset = node_set([1, 2]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(view.neighbors(3).count(), 0);
        assert_eq!(view.weak_link_count(), 0);
    }

    #[test]
    fn test_parallel_host_edges_collapse() {
        let host = AdjacencyGraph::from_edges([(1, 2), (1, 2), (2, 3), (1, 3)]);
        let subset = node_set([1, 2, 3]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(sorted(view.neighbors(1)), vec![2, 3]);
        assert_eq!(view.weak_link_count(), 0);
    }

    #[test]
    fn test_self_loop_witnessed_by_common_neighbor() {
        // Triangle plus a self-loop at node 1: node 1 becomes its own
        // candidate and is kept because nodes 2 and 3 witness it.
        let host = AdjacencyGraph::from_edges([(1, 2), (2, 3), (1, 3), (1, 1)]);
        let subset = node_set([1, 2, 3]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(sorted(view.neighbors(1)), vec![1, 2, 3]);
        assert_eq!(view.weak_link_count(), 0);
    }

    #[test]
    fn test_self_loop_witnesses_itself() {
        // With S = {1} the only candidate of node 1 is node 1 itself,
        // and the loop makes it its own triangle witness.
        let host = AdjacencyGraph::from_edges([(1, 1), (1, 2)]);
        let subset = node_set([1]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(sorted(view.neighbors(1)), vec![1]);
        assert_eq!(view.weak_link_count(), 0);
    }

    #[test]
    fn test_counter_accumulates_across_queries() {
        let host = lone_edge();
        let subset = node_set([1, 2]);

        let view = SubgraphWithoutWeakLinks::new(&host, &subset).unwrap();
        assert_eq!(view.neighbors(1).count(), 0);
        assert_eq!(view.neighbors(2).count(), 0);
        assert_eq!(view.weak_link_count(), 2);
    }
}
