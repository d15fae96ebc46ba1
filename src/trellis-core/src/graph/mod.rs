//! Graph model and weak-link filtering.
//!
//! This module provides the core graph primitives:
//! - `HostGraph` for the host graph contract
//! - `AdjacencyGraph` for an in-memory host graph
//! - `SubgraphWithoutWeakLinks` for the filtered subgraph view

mod host;
mod identifiers;
mod weak_links;

pub use host::{AdjacencyGraph, HostGraph};
pub use identifiers::NodeId;
pub use weak_links::SubgraphWithoutWeakLinks;
