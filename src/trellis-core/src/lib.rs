//! Core graph model for Trellis.
//!
//! This crate provides the fundamental types for weak-link filtering:
//! - `HostGraph` for the contract a host graph exposes to views
//! - `AdjacencyGraph` as the in-memory reference host graph
//! - `SubgraphWithoutWeakLinks` for the filtered subgraph view

pub mod graph;
pub mod testing;

mod proptest_utils;

// Re-export commonly used types
pub use graph::{AdjacencyGraph, HostGraph, NodeId, SubgraphWithoutWeakLinks};
