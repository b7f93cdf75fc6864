//! IPv6 network value type.
//!
//! Stores a base address plus prefix length, with host bits always masked
//! to zero. All arithmetic goes through `u128` so the full 128-bit address
//! space is handled without truncation.

use crate::error::Error;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

pub const MAX_LENGTH: u8 = 128;

/// Zero out the bits of `addr` below prefix length `len`.
pub fn cut_addr(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr, Error> {
    let mask = prefix_mask(len)?;
    Ok(Ipv6Addr::from(u128::from(addr) & mask))
}

/// The 128-bit mask selecting the first `len` bits.
pub fn prefix_mask(len: u8) -> Result<u128, Error> {
    if len > MAX_LENGTH {
        Err(Error::PrefixTooLong { prefix: len })
    } else if len == 0 {
        Ok(0)
    } else {
        let right_len = MAX_LENGTH - len;
        Ok((u128::MAX >> right_len) << right_len)
    }
}

/// An IPv6 network: base address and prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6Net {
    addr: Ipv6Addr,
    prefix: u8,
}

impl Ipv6Net {
    /// Build a network from an address and prefix length.
    ///
    /// Host bits below the prefix are masked off, so the stored address is
    /// always the network address.
    ///
    /// # Returns
    /// * `Ok(Ipv6Net)` - On success
    /// * `Err(Error::PrefixTooLong)` - If `prefix` exceeds 128
    pub fn new(addr: Ipv6Addr, prefix: u8) -> Result<Ipv6Net, Error> {
        let addr = cut_addr(addr, prefix)?;
        Ok(Ipv6Net { addr, prefix })
    }

    /// Same as [`Ipv6Net::new`] but from a raw 128-bit address value.
    pub fn from_bits(bits: u128, prefix: u8) -> Result<Ipv6Net, Error> {
        Ipv6Net::new(Ipv6Addr::from(bits), prefix)
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// First address in the network (the base address itself).
    pub fn lo(&self) -> Ipv6Addr {
        self.addr
    }

    /// Last address in the network.
    pub fn hi(&self) -> Ipv6Addr {
        let mask = prefix_mask(self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating mask for {self}: {e}"));
        Ipv6Addr::from(u128::from(self.addr) | !mask)
    }

    /// Check if an address is contained within this network.
    pub fn contains(&self, ip: Ipv6Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
}

impl fmt::Display for Ipv6Net {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl FromStr for Ipv6Net {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Ipv6Net, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 2 {
            return Err(format!("invalid CIDR format: {s}").into());
        }
        let addr = Ipv6Addr::from_str(parts[0])
            .map_err(|_| format!("invalid IPv6 address: {}", parts[0]))?;
        let prefix =
            u8::from_str(parts[1]).map_err(|_| format!("invalid prefix length: {}", parts[1]))?;
        Ok(Ipv6Net::new(addr, prefix)?)
    }
}

impl Serialize for Ipv6Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv6Net {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e| de::Error::custom(format!("{e}")))
    }
}
