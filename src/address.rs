//! Ethereum address parsing and validation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a textual Ethereum address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The hex body (after any `0x` prefix) is not exactly 40 characters.
    #[error("expected 40 hex characters, got {0}")]
    InvalidLength(usize),

    /// The hex body contains a character outside `[0-9a-fA-F]`.
    #[error("address contains non-hexadecimal characters")]
    InvalidHex,
}

/// A raw 20-byte Ethereum address.
///
/// Casing is a property of the string serialization, never of the address
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address([u8; 20]);

impl Address {
    /// Parse a textual address: an optional `0x` or `0X` prefix followed by
    /// exactly 40 hex digits.
    ///
    /// # Errors
    /// Returns an `AddressError` if the body has the wrong length or
    /// contains non-hex characters.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let body = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        if body.len() != 40 {
            return Err(AddressError::InvalidLength(body.len()));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressError::InvalidHex)?;
        Ok(Address(bytes))
    }

    /// The raw 20 address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl Display for Address {
    /// Lowercase `0x`-prefixed hex rendering.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
