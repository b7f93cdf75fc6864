//! Deterministic derivation of addressing artifacts from ZeroTier IDs.
//!
//! - [`bits`] - bit extraction and binary subnet-tree descent
//! - [`plane`] - 6PLANE and RFC4193 subnet schemes
//! - [`ifname`] - Linux interface-name derivation

mod bits;
mod ifname;
mod plane;

// Re-export public functions
pub use bits::{bits_of, subnet_at};
pub use ifname::ifname;
pub use plane::{mk6plane, mkrfc4193, node_6plane_subnet};
