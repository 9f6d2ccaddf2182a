/// IPv4 literal parsing for URI hosts.
/// Only the dotted-quad decimal form is recognized; shorthand, octal and hex
/// forms are left to the DNS/unknown classification.
use crate::compat::{String, format};

/// Parse a dotted-quad IPv4 address string into a u32.
/// Leading zeros are read as decimal (`010` is ten).
pub fn parse_ipv4(input: &str) -> Option<u32> {
    let mut parts = input.split('.');
    let mut ipv4: u32 = 0;

    for _ in 0..4 {
        let octet = parse_ipv4_octet(parts.next()?)?;
        ipv4 = (ipv4 << 8) | u32::from(octet);
    }

    // Exactly four parts
    if parts.next().is_some() {
        return None;
    }
    Some(ipv4)
}

/// Parse a single decimal octet (0-255), at most three digits.
fn parse_ipv4_octet(input: &str) -> Option<u8> {
    if input.is_empty() || input.len() > 3 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<u8>().ok()
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (ipv4 >> 24) & 0xFF,
        (ipv4 >> 16) & 0xFF,
        (ipv4 >> 8) & 0xFF,
        ipv4 & 0xFF
    )
}
