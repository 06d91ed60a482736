//! Record identifiers.
//!
//! Every persisted record carries a 24-character lowercase hex id, assigned
//! when the row is inserted. Path and body ids arriving over the wire are
//! accepted in either case.

use std::fmt::Write;

use rand::Rng;

const RECORD_ID_LEN: usize = 24;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a fresh 12-byte random record id, hex-encoded.
#[must_use]
pub fn generate() -> String {
    let bytes: [u8; 12] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// A record id is valid iff it is exactly 24 hex characters.
#[must_use]
pub fn is_valid(id: &str) -> bool {
    id.len() == RECORD_ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "record_id_test.rs"]
mod tests;
