//! Deterministic ZeroTier addressing artifacts.
//!
//! Derives IPv6 subnets (6PLANE and RFC4193 schemes) and Linux interface
//! names from ZeroTier node and network IDs, matching what the ZeroTier
//! node software itself computes. Also bridges to a locally running
//! service through `zerotier-cli`.

pub mod derive;
mod error;
pub mod models;
pub mod zerotier;

pub use derive::{bits_of, ifname, mk6plane, mkrfc4193, node_6plane_subnet, subnet_at};
pub use error::Error;
pub use models::{Ipv6Net, NetworkId, NodeId};

/// Everything derivable for one node on one network.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NodeAddressing {
    /// The network-wide 6PLANE /40.
    pub sixplane_net: Ipv6Net,
    /// The node's 6PLANE /80 subnet.
    pub sixplane_node: Ipv6Net,
    /// The network-wide RFC4193 /88.
    pub rfc4193_net: Ipv6Net,
    /// First candidate interface name (trial 0).
    pub ifname: String,
}

/// Derive all addressing artifacts for a node on a network.
pub fn node_addressing(nwid: NetworkId, nid: NodeId) -> NodeAddressing {
    let (sixplane_net, sixplane_node) = node_6plane_subnet(nwid, nid);
    NodeAddressing {
        sixplane_net,
        sixplane_node,
        rfc4193_net: mkrfc4193(nwid),
        ifname: ifname(nwid, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_addressing() {
        let nwid: NetworkId = "8056c2e21c000001".parse().unwrap();
        let nid: NodeId = "1122334455".parse().unwrap();

        let derived = node_addressing(nwid, nid);
        assert_eq!(derived.sixplane_net.prefix(), 40);
        assert_eq!(derived.sixplane_node.prefix(), 80);
        assert_eq!(derived.rfc4193_net.prefix(), 88);
        assert!(derived.ifname.starts_with("zt"));
        assert!(derived.sixplane_net.contains(derived.sixplane_node.lo()));
    }
}
