//! Type identifiers for graph elements.

/// Node identifier.
///
/// Node IDs are non-negative integers suitable for hashing and equality;
/// they carry no meaning beyond identity.
pub type NodeId = u32;
