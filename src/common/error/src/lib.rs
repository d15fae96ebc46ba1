//! Error types and result aliases for Trellis.
//!
//! This module provides the core error handling infrastructure shared by
//! all Trellis crates.

mod error;

pub use error::{TrellisError, TrellisResult};
