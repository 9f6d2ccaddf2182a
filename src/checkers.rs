use crate::character_sets::is_label_char;

/// Check if a host follows DNS label syntax.
/// Labels are 1 to 63 bytes, never start or end with `-`. A single trailing
/// dot (the root label) is tolerated.
pub fn is_dns_name(input: &str) -> bool {
    let input = input.strip_suffix('.').unwrap_or(input);
    if input.is_empty() {
        return false;
    }

    input.split('.').all(|label| {
        let bytes = label.as_bytes();
        (1..=63).contains(&bytes.len())
            && bytes.iter().all(|&b| is_label_char(b))
            && bytes.first() != Some(&b'-')
            && bytes.last() != Some(&b'-')
    })
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Check if bytes starting at position form a Windows drive letter.
/// A drive letter is: [a-zA-Z][:|] followed by [/\?#] or end of string.
pub fn is_windows_drive_letter(bytes: &[u8], pos: usize) -> bool {
    // Need at least 2 bytes for drive letter
    if pos + 1 >= bytes.len() {
        return false;
    }

    let first = bytes[pos];
    let second = bytes[pos + 1];

    // First must be ASCII letter, second must be : or |
    if !first.is_ascii_alphabetic() || !matches!(second, b':' | b'|') {
        return false;
    }

    // End of string is valid, otherwise third must be a delimiter
    pos + 2 >= bytes.len() || matches!(bytes[pos + 2], b'/' | b'\\' | b'?' | b'#')
}

/// Check if input is a UNC path (`\\server\share`)
pub fn is_unc_path(input: &str) -> bool {
    input.starts_with("\\\\")
}
