//! Domain models for ZeroTier subnet derivation.
//!
//! This module contains the core value types used throughout the crate:
//! - [`NodeId`] and [`NetworkId`] - validated fixed-width hex identifiers
//! - [`Ipv6Net`] - IPv6 network with CIDR notation support

mod id;
mod ipv6;

// Re-export public types
pub use id::{NetworkId, NodeId, NETWORK_ID_DIGITS, NODE_ID_DIGITS};
pub use ipv6::{cut_addr, prefix_mask, Ipv6Net, MAX_LENGTH};
