//! Hexadecimal helpers used for debugging and display purposes.
//!
//! Tag memory images are usually exchanged as hex dumps, so the crate keeps
//! a tiny formatter/parser pair here instead of pulling a runtime dependency.
//! The parser tolerates ASCII whitespace anywhere, which lets it consume the
//! spaced output of [`bytes_to_hex_spaced`] as well as compact dumps.

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
            // write! never fails writing to a String
            let _ = write!(&mut s, "{:02x}", b);
            s
        })
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes, ignoring ASCII whitespace.
///
/// Returns an error message string on odd length or a non-hex digit.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    fn nibble(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    }

    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi =
                nibble(pair[0]).ok_or_else(|| format!("invalid hex digit '{}'", pair[0] as char))?;
            let lo =
                nibble(pair[1]).ok_or_else(|| format!("invalid hex digit '{}'", pair[1] as char))?;
            Ok((hi << 4) | lo)
        })
        .collect()
}
