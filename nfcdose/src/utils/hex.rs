//! Hex formatting for debug logs of raw frames and tag pages.

use std::fmt::Write;

/// Upper-case hex with a single space between bytes.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Multi-line dump of a tag read, one line per 4-byte page, each prefixed
/// with its page address.
///
/// ```text
/// 04: 01 02 03 04
/// 05: 05 06 07 08
/// ```
pub fn page_dump(first_page: u8, bytes: &[u8]) -> String {
    let mut s = String::new();
    for (i, page) in bytes.chunks(4).enumerate() {
        if i != 0 {
            s.push('\n');
        }
        let addr = first_page.wrapping_add(i as u8);
        let _ = write!(&mut s, "{:02X}: {}", addr, bytes_to_hex_spaced(page));
    }
    s
}
