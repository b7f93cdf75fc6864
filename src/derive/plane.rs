//! 6PLANE and RFC4193 subnet derivation.
//!
//! These reproduce, bit for bit, the address layouts ZeroTier's own node
//! software assigns on a network, so the derived subnets match what members
//! of the network actually configure.

use crate::derive::bits::subnet_at;
use crate::models::{Ipv6Net, NetworkId, NodeId};

/// The /40 network of the 6PLANE scheme for a given network ID.
///
/// The 64-bit network ID is XOR-folded onto itself to a 32-bit prefix,
/// placed after a leading `0xfc` byte.
pub fn mk6plane(nwid: NetworkId) -> Ipv6Net {
    let nwid = u128::from(nwid.value());
    let prefix = (nwid ^ (nwid >> 32)) & 0xffff_ffff;
    let addr = (0xfc << 120) | (prefix << 88);
    // 40-bit prefix can never exceed the address width
    Ipv6Net::from_bits(addr, 40).unwrap_or_else(|e| panic!("Error composing 6plane net: {e}"))
}

/// The 6PLANE /40 network plus the node's /80 subnet inside it.
///
/// The node's 40-bit address is the full bit path from the /40 down to its
/// /80 leaf, so every node on the network owns a distinct subnet.
pub fn node_6plane_subnet(nwid: NetworkId, nid: NodeId) -> (Ipv6Net, Ipv6Net) {
    let net = mk6plane(nwid);
    let node_net = subnet_at(&net, 40, u128::from(nid.value()))
        .unwrap_or_else(|e| panic!("Error deriving 6plane node subnet: {e}"));
    (net, node_net)
}

/// The /88 network of the RFC4193 scheme for a given network ID.
///
/// Layout: `fd` + 8 network ID bytes + `99 93`, then zeros.
pub fn mkrfc4193(nwid: NetworkId) -> Ipv6Net {
    let addr = (0xfd << 120) | (u128::from(nwid.value()) << 56) | (0x9993 << 40);
    Ipv6Net::from_bits(addr, 88).unwrap_or_else(|e| panic!("Error composing rfc4193 net: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nwid() -> NetworkId {
        "8056c2e21c000001".parse().unwrap()
    }

    #[test]
    fn test_mk6plane_layout() {
        let net = mk6plane(nwid());
        assert_eq!(net.prefix(), 40);

        let octets = net.addr().octets();
        assert_eq!(octets[0], 0xfc);
        // XOR fold: 0x8056c2e2 ^ 0x1c000001 = 0x9c56c2e3
        assert_eq!(&octets[1..5], &[0x9c, 0x56, 0xc2, 0xe3]);
        assert!(octets[5..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_mk6plane_display() {
        assert_eq!(mk6plane(nwid()).to_string(), "fc9c:56c2:e300::/40");
    }

    #[test]
    fn test_node_6plane_subnet() {
        let nid: NodeId = "1122334455".parse().unwrap();
        let (net, node_net) = node_6plane_subnet(nwid(), nid);

        assert_eq!(net, mk6plane(nwid()));
        assert_eq!(node_net.prefix(), net.prefix() + 40);
        assert!(net.contains(node_net.lo()));
        assert!(net.contains(node_net.hi()));
        assert_eq!(node_net, subnet_at(&net, 40, 0x1122334455).unwrap());

        // The node address lands directly after the folded prefix
        let octets = node_net.addr().octets();
        assert_eq!(&octets[5..10], &[0x11, 0x22, 0x33, 0x44, 0x55]);
    }

    #[test]
    fn test_mkrfc4193_layout() {
        let net = mkrfc4193(nwid());
        assert_eq!(net.prefix(), 88);

        let octets = net.addr().octets();
        assert_eq!(octets[0], 0xfd);
        assert_eq!(
            &octets[1..9],
            &[0x80, 0x56, 0xc2, 0xe2, 0x1c, 0x00, 0x00, 0x01]
        );
        assert_eq!(&octets[9..11], &[0x99, 0x93]);
        assert!(octets[11..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_mkrfc4193_display() {
        assert_eq!(
            mkrfc4193(nwid()).to_string(),
            "fd80:56c2:e21c:0:199:9300::/88"
        );
    }
}
