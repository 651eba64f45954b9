//! Fixed-length string format validators.
//!
//! Pure predicates for the two identifier encodings the daemon exchanges
//! over the wire: lowercase hexadecimal and lowercase RFC 4648 base32
//! (unpadded). Both check length before scanning, and a mismatch is an
//! ordinary `false`, never an error.

/// True iff `candidate` is exactly `expected_len` bytes of lowercase hex
/// (`0-9`, `a-f`).
///
/// ```
/// use daemon_osutil::verify::is_hex;
///
/// assert!(is_hex(6, "a1b2c3"));
/// assert!(!is_hex(6, "A1B2C3"));
/// assert!(!is_hex(5, "a1b2c3"));
/// ```
#[must_use]
pub fn is_hex(expected_len: usize, candidate: &str) -> bool {
    candidate.len() == expected_len
        && candidate
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// True iff `candidate` is exactly `expected_len` bytes of lowercase
/// base32 (`a-z`, `2-7`).
///
/// ```
/// use daemon_osutil::verify::is_base32;
///
/// assert!(is_base32(8, "abcdefgh"));
/// assert!(!is_base32(8, "abcdefg1"));
/// ```
#[must_use]
pub fn is_base32(expected_len: usize, candidate: &str) -> bool {
    candidate.len() == expected_len
        && candidate
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'2'..=b'7'))
}
