//! Hex color literal parser.
//!
//! Parses a leading-`#` literal into 1 - 4 channel samples. Total string
//! length (including the `#`) selects the digit width:
//!
//! | Length | Digits/channel | Channels | Example        |
//! |--------|----------------|----------|----------------|
//! | 3      | 2              | 1        | `#FF`          |
//! | 4      | 1              | 3        | `#F0A`         |
//! | 5      | 1              | 4        | `#F0A8`        |
//! | 7      | 2              | 3        | `#FF00AA`      |
//! | 9      | 2              | 4        | `#FF00AA80`    |
//! | 13     | 4              | 3        | `#FFFF0000AAAA` |
//! | 17     | 4              | 4        | `#FFFF0000AAAA8000` |
//!
//! Lengths below 13 take the 8-bit path, 13 and up the 16-bit path; anything
//! not in the table fails. Decoding is case-insensitive and a non-hex digit
//! anywhere fails the whole parse.

use tinct_core::Quantum;

/// Parses a hex color literal into channel samples of precision `Q`.
///
/// Returns `None` for a missing `#`, an unsupported length, or a non-hex
/// digit. Single-digit channels are widened by duplication (`v + v*16`);
/// four-digit channels narrow through the 16-bit conversion of `Q`.
///
/// ```
/// use tinct_color::hex;
///
/// assert_eq!(hex::parse::<u8>("#F00"), Some(vec![255, 0, 0]));
/// assert_eq!(hex::parse::<u16>("#0000FFFF0000"), Some(vec![0, 65535, 0]));
/// assert_eq!(hex::parse::<u8>("#F0G"), None);
/// ```
pub fn parse<Q: Quantum>(value: &str) -> Option<Vec<Q>> {
    let bytes = value.as_bytes();
    if bytes.first() != Some(&b'#') {
        return None;
    }
    let digits = if bytes.len() < 13 {
        match bytes.len() {
            4 | 5 => 1,
            3 | 7 | 9 => 2,
            _ => return None,
        }
    } else {
        match bytes.len() {
            13 | 17 => 4,
            _ => return None,
        }
    };

    let mut channels = Vec::with_capacity((bytes.len() - 1) / digits);
    for span in bytes[1..].chunks(digits) {
        channels.push(decode_channel::<Q>(span, digits)?);
    }
    Some(channels)
}

/// Decodes one channel's digit span into a sample.
fn decode_channel<Q: Quantum>(span: &[u8], digits: usize) -> Option<Q> {
    let mut acc: u32 = 0;
    for &b in span {
        acc = (acc << 4) | hex_digit(b)? as u32;
    }
    Some(match digits {
        // Duplicate the single digit to fill a byte: 0xF -> 0xFF
        1 => Q::from_byte((acc + (acc << 4)) as u8),
        2 => Q::from_byte(acc as u8),
        _ => Q::from_short(acc as u16),
    })
}

#[inline]
fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
