//! Property-based testing utilities for trellis-core.
//!
//! This module provides proptest strategies for random undirected hosts
//! and node subsets, together with property tests for the weak-link
//! filtering invariants.
