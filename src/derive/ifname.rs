//! Linux interface-name derivation.
//!
//! ZeroTier names its Linux tap devices by folding the network ID down to
//! 40 bits and base32-encoding the result, so a network always maps to the
//! same device name on every host.

use crate::models::NetworkId;

/// RFC 4648 base32 alphabet, lowercase.
const BASE32_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Base32-encode a 40-bit value as exactly 8 characters.
///
/// 40 bits divide evenly into eight 5-bit groups, so no padding is needed.
fn base32_40(value: u64) -> String {
    (0..8)
        .map(|i| BASE32_ALPHABET[(value >> (35 - 5 * i) & 0x1f) as usize] as char)
        .collect()
}

/// Candidate Linux interface name for a ZeroTier network.
///
/// Folds the network ID to 40 bits as
/// `((nwid ^ (nwid >> 24)) + trial) & (2^40 - 1)` and renders it as
/// `"zt"` plus the base32 encoding of the folded value's 5 big-endian bytes.
///
/// `trial` deterministically produces alternate candidates when a name is
/// already taken; checking for collisions is the caller's job. The trial
/// number is added to the XOR result before masking - this order matches
/// ZeroTier's own tap naming and must not be rearranged.
pub fn ifname(nwid: NetworkId, trial: u64) -> String {
    let nwid = u128::from(nwid.value());
    let folded = ((nwid ^ (nwid >> 24)) + u128::from(trial)) & ((1 << 40) - 1);
    format!("zt{}", base32_40(folded as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nwid() -> NetworkId {
        "8056c2e21c000001".parse().unwrap()
    }

    #[test]
    fn test_base32_40_known_values() {
        assert_eq!(base32_40(0), "aaaaaaaa");
        assert_eq!(base32_40((1 << 40) - 1), "77777777");
        // 'b' == index 1, in the last 5-bit group
        assert_eq!(base32_40(1), "aaaaaaab");
    }

    #[test]
    fn test_ifname_shape() {
        let name = ifname(nwid(), 0);
        assert!(name.starts_with("zt"));
        assert_eq!(name.len(), 10);
        assert!(name
            .chars()
            .skip(2)
            .all(|c| BASE32_ALPHABET.contains(&(c as u8))));
    }

    #[test]
    fn test_ifname_deterministic() {
        assert_eq!(ifname(nwid(), 0), ifname(nwid(), 0));
    }

    #[test]
    fn test_ifname_trial_perturbs() {
        assert_ne!(ifname(nwid(), 0), ifname(nwid(), 1));
    }

    #[test]
    fn test_ifname_folded_value() {
        // nwid ^ (nwid >> 24) masked to 40 bits, trial 0:
        // 0x8056c2e21c000001 ^ 0x0000008056c2e21c = 0x8056c2624ac2e21d
        // low 40 bits = 0x624ac2e21d
        let expect = format!("zt{}", base32_40(0x624ac2e21d));
        assert_eq!(ifname(nwid(), 0), expect);
    }
}
