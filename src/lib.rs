//! Trellis - weak-link-filtered views over undirected graphs
//!
//! Trellis provides read-only subgraph views that hide "weak links":
//! edges whose endpoints share no common neighbor within the subgraph's
//! node set. The host graph is treated as an external collaborator and
//! is never mutated.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export core crates
pub use common_error as error;
pub use trellis_core as core;

/// Trellis version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
