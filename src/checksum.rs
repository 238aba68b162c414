//! EIP-55 checksum encoding and verification.
//!
//! EIP-55 embeds a checksum in the letter casing of an address's hex
//! representation: a hex letter is uppercased iff the corresponding nibble
//! of `Keccak256(lowercase_hex_text)` is >= 8. Digits are never affected.

use sha3::{Digest, Keccak256};

use crate::address::{Address, AddressError};

/// Outcome of checking a textual address against its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The input is exactly the canonical EIP-55 string.
    Valid,
    /// The input is not a well-formed 20-byte hex address.
    InvalidFormat(AddressError),
    /// The input parses, but does not match the canonical form.
    ChecksumMismatch { expected: String },
}

/// Canonical EIP-55 mixed-case rendering of an address.
///
/// The digest is taken over the ASCII bytes of the 40-character lowercase
/// hex text, not over the raw address bytes.
pub fn to_checksum_address(addr: &Address) -> String {
    let hex_lower = hex::encode(addr.as_bytes());
    let digest = Keccak256::digest(hex_lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in hex_lower.chars().enumerate() {
        // One casing decision per hex character: even indices read the high
        // nibble of the digest byte, odd indices the low nibble.
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Check a textual address: well-formed hex first, then an exact
/// case-sensitive comparison against the canonical EIP-55 form.
///
/// The comparison is strict. An all-lowercase or all-uppercase body gets no
/// "unchecksummed" exemption; it is valid only if it happens to equal the
/// canonical casing. The input is compared as supplied, prefix included.
pub fn check(input: &str) -> Verdict {
    let addr = match Address::parse(input) {
        Ok(addr) => addr,
        Err(e) => return Verdict::InvalidFormat(e),
    };

    let expected = to_checksum_address(&addr);
    if input == expected {
        Verdict::Valid
    } else {
        Verdict::ChecksumMismatch { expected }
    }
}
