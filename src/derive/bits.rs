//! Bit extraction and binary subnet-tree descent.

use crate::error::Error;
use crate::models::Ipv6Net;

/// The lowest `width` bits of `number`, most-significant first.
///
/// Always returns exactly `width` bits; bits of `number` above `width` are
/// ignored. Pure function, safe to call repeatedly.
pub fn bits_of(number: u128, width: u8) -> Vec<u8> {
    (0..width)
        .rev()
        .map(|i| (number >> i & 1) as u8)
        .collect()
}

/// Descend `prefix_delta` levels into the binary subnet tree of `net`,
/// selecting one half per bit of `index` (MSB first, 0 = lower half,
/// 1 = upper half).
///
/// Index 0 is always the lowest subnet and `2^prefix_delta - 1` the highest.
/// Consecutive indices are address-adjacent only under binary counting of
/// the bit path, not by simple arithmetic on `index`.
///
/// # Returns
/// * `Ok(Ipv6Net)` - The selected subnet, prefix `net.prefix() + prefix_delta`
/// * `Err(Error::PrefixOverflow)` - If that prefix would exceed 128 bits
pub fn subnet_at(net: &Ipv6Net, prefix_delta: u8, index: u128) -> Result<Ipv6Net, Error> {
    let prefix = net
        .prefix()
        .checked_add(prefix_delta)
        .filter(|p| *p <= crate::models::MAX_LENGTH)
        .ok_or(Error::PrefixOverflow {
            prefix: net.prefix(),
            delta: prefix_delta,
        })?;

    let mut addr = u128::from(net.addr());
    for (level, bit) in bits_of(index, prefix_delta).into_iter().enumerate() {
        if bit == 1 {
            // Bit position of this level, counted from the left.
            addr |= 1u128 << (127 - (net.prefix() + level as u8));
        }
    }
    Ipv6Net::from_bits(addr, prefix)
}
