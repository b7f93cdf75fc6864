//! Error types for identifier parsing and subnet derivation.

use thiserror::Error;

/// Errors raised while validating identifiers or deriving subnets.
///
/// Every variant carries the offending value and the constraint it violated,
/// so callers can produce a user-facing diagnostic without extra context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Identifier text had the wrong length or a non-hex character.
    #[error("invalid {what}: {text:?} is not a {digits} digit hexadecimal number")]
    InvalidFormat {
        what: &'static str,
        text: String,
        digits: usize,
    },

    /// Integer value does not fit the identifier's fixed bit width.
    #[error("{what} value {value:#x} out of range (max {max:#x})")]
    OutOfRange {
        what: &'static str,
        value: u64,
        max: u64,
    },

    /// Subnet descent would push the prefix past 128 bits.
    #[error("prefix length {prefix} + {delta} exceeds 128 bits")]
    PrefixOverflow { prefix: u8, delta: u8 },

    /// An IPv6 network was constructed with a prefix longer than 128 bits.
    #[error("prefix length {prefix} is longer than 128 bits")]
    PrefixTooLong { prefix: u8 },
}
