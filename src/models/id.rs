//! ZeroTier identifier value types.
//!
//! Node and network IDs are fixed-width hexadecimal numbers: 10 digits
//! (40 bits) for a node, 16 digits (64 bits) for a network. Both are
//! immutable value objects validated at construction.

use crate::error::Error;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hex digit count of a node ID.
pub const NODE_ID_DIGITS: usize = 10;
/// Hex digit count of a network ID.
pub const NETWORK_ID_DIGITS: usize = 16;

/// Validate fixed-width hex text and return its integer value.
fn parse_hex_id(what: &'static str, text: &str, digits: usize) -> Result<u64, Error> {
    let invalid = || Error::InvalidFormat {
        what,
        text: text.to_string(),
        digits,
    };
    if text.len() != digits || !text.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u64::from_str_radix(text, 16).map_err(|_| invalid())
}

/// A 40-bit ZeroTier node address, written as 10 hex digits.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Largest representable node ID value.
    pub const MAX: u64 = (1 << 40) - 1;

    /// Build a node ID from an already-computed integer.
    ///
    /// # Returns
    /// * `Ok(NodeId)` - If the value fits in 40 bits
    /// * `Err(Error::OutOfRange)` - Otherwise
    pub fn from_u64(value: u64) -> Result<NodeId, Error> {
        if value > Self::MAX {
            return Err(Error::OutOfRange {
                what: "node ID",
                value,
                max: Self::MAX,
            });
        }
        Ok(NodeId(value))
    }

    /// The underlying 40-bit value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<NodeId, Error> {
        parse_hex_id("node ID", s, NODE_ID_DIGITS).map(NodeId)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:010x}", self.0)
    }
}

/// A 64-bit ZeroTier network ID, written as 16 hex digits.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkId(u64);

impl NetworkId {
    /// Build a network ID from an already-computed integer.
    ///
    /// Any `u64` is a valid 64-bit network ID, but the checked constructor
    /// is kept so both identifier kinds are built the same way.
    pub fn from_u64(value: u64) -> Result<NetworkId, Error> {
        Ok(NetworkId(value))
    }

    /// The underlying 64-bit value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for NetworkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<NetworkId, Error> {
        parse_hex_id("network ID", s, NETWORK_ID_DIGITS).map(NetworkId)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<NodeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Serialize for NetworkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D>(deserializer: D) -> Result<NetworkId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_parse() {
        let nid: NodeId = "deadbeef01".parse().unwrap();
        assert_eq!(nid.value(), 0xdeadbeef01);
        assert_eq!(nid.to_string(), "deadbeef01");
    }

    #[test]
    fn test_node_id_mixed_case() {
        let nid: NodeId = "DeadBeef01".parse().unwrap();
        assert_eq!(nid.to_string(), "deadbeef01");
    }

    #[test]
    fn test_node_id_leading_zeros() {
        let nid: NodeId = "0000000001".parse().unwrap();
        assert_eq!(nid.value(), 1);
        assert_eq!(nid.to_string(), "0000000001");
    }

    #[test]
    fn test_node_id_wrong_length() {
        assert!("deadbeef0".parse::<NodeId>().is_err());
        assert!("deadbeef012".parse::<NodeId>().is_err());
        assert!("".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_node_id_bad_characters() {
        // Right length, illegal characters
        let err = "deadbeefg1".parse::<NodeId>().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
        assert!(" deadbeef1".parse::<NodeId>().is_err());
        assert!("-123456789".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_node_id_range() {
        assert_eq!(NodeId::from_u64(0).unwrap().to_string(), "0000000000");
        assert_eq!(
            NodeId::from_u64(NodeId::MAX).unwrap().to_string(),
            "ffffffffff"
        );
        let err = NodeId::from_u64(NodeId::MAX + 1).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    #[test]
    fn test_network_id_parse() {
        let nwid: NetworkId = "8056c2e21c000001".parse().unwrap();
        assert_eq!(nwid.value(), 0x8056c2e21c000001);
        assert_eq!(nwid.to_string(), "8056c2e21c000001");
    }

    #[test]
    fn test_network_id_wrong_length() {
        assert!("8056c2e21c00001".parse::<NetworkId>().is_err());
        assert!("8056c2e21c0000010".parse::<NetworkId>().is_err());
    }

    #[test]
    fn test_network_id_bad_characters() {
        let err = "8056c2e21c00000z".parse::<NetworkId>().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }

    #[test]
    fn test_network_id_boundaries() {
        assert_eq!(
            NetworkId::from_u64(0).unwrap().to_string(),
            "0000000000000000"
        );
        assert_eq!(
            NetworkId::from_u64(u64::MAX).unwrap().to_string(),
            "ffffffffffffffff"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let nwid: NetworkId = "8056c2e21c000001".parse().unwrap();
        let json = serde_json::to_string(&nwid).unwrap();
        assert_eq!(json, "\"8056c2e21c000001\"");
        let back: NetworkId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nwid);

        assert!(serde_json::from_str::<NodeId>("\"nothex\"").is_err());
    }
}
