/// Byte classes used across the scanner and normalizer.
const UNRESERVED: u8 = 1;
const SCHEME: u8 = 2;
const LABEL: u8 = 4;

/// Per-byte class bits, ASCII only (non-ASCII bytes have no class)
const CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = UNRESERVED | SCHEME | LABEL;
        table[(i - 32) as usize] = UNRESERVED | SCHEME | LABEL;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = UNRESERVED | SCHEME | LABEL;
        i += 1;
    }

    table[b'-' as usize] = UNRESERVED | SCHEME | LABEL;
    table[b'.' as usize] = UNRESERVED | SCHEME;
    table[b'_' as usize] = UNRESERVED | LABEL;
    table[b'~' as usize] = UNRESERVED;
    table[b'+' as usize] = SCHEME;

    table
};

/// Check if a byte is unreserved (`ALPHA / DIGIT / "-" / "." / "_" / "~"`)
pub fn is_unreserved(b: u8) -> bool {
    CHAR_TABLE[b as usize] & UNRESERVED != 0
}

/// Check if a byte may appear after the first character of a scheme
pub fn is_scheme_char(b: u8) -> bool {
    CHAR_TABLE[b as usize] & SCHEME != 0
}

/// Check if a byte may appear in a DNS label (underscore tolerated)
pub fn is_label_char(b: u8) -> bool {
    CHAR_TABLE[b as usize] & LABEL != 0
}

/// Check if a byte separates path segments under the given policy
pub fn is_path_separator(b: u8, backslash: bool) -> bool {
    b == b'/' || (backslash && b == b'\\')
}

/// Decode one ASCII hex digit
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
