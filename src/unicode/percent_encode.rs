use crate::character_sets::{hex_value, is_unreserved};
use crate::compat::{Cow, String};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped in user info, path, query and fragment.
/// C0 control + DEL, space, ", <, >, |, \`
/// Non-ASCII is always escaped as UTF-8 octets.
pub const FORBIDDEN_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'|')
    .add(b'`');

/// DOS file path set: `FORBIDDEN_SET` + %
/// Local paths are raw text, so every % is data, never a triple.
pub const DOS_PATH_SET: &AsciiSet = &FORBIDDEN_SET.add(b'%');

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Normalize percent-triples.
///
/// - with `decode_unreserved`, a triple encoding an unreserved byte becomes that byte
/// - every other triple gets uppercase hex digits
/// - a `%` that does not start a triple becomes `%25`
///
/// Returns the input unchanged (borrowed) when it has no `%`.
pub fn normalize_triples(input: &str, decode_unreserved: bool) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let Some(first) = memchr::memchr(b'%', bytes) else {
        return Cow::Borrowed(input);
    };

    let mut result = String::with_capacity(input.len() + 4);
    result.push_str(&input[..first]);
    let mut pos = first;

    while pos < bytes.len() {
        // Copy the literal run up to the next '%'
        let next = memchr::memchr(b'%', &bytes[pos..]).map_or(bytes.len(), |off| pos + off);
        result.push_str(&input[pos..next]);
        if next == bytes.len() {
            break;
        }

        let triple = bytes
            .get(next + 1..next + 3)
            .and_then(|hex| Some((hex_value(hex[0])? << 4) | hex_value(hex[1])?));
        match triple {
            Some(byte) if decode_unreserved && is_unreserved(byte) => {
                result.push(byte as char);
                pos = next + 3;
            }
            Some(byte) => {
                push_triple(&mut result, byte);
                pos = next + 3;
            }
            None => {
                result.push_str("%25");
                pos = next + 1;
            }
        }
    }

    Cow::Owned(result)
}

/// Append `%XX` with uppercase hex
fn push_triple(buffer: &mut String, byte: u8) {
    buffer.push('%');
    buffer.push(UPPER_HEX[(byte >> 4) as usize] as char);
    buffer.push(UPPER_HEX[(byte & 0x0F) as usize] as char);
}

/// Write percent-encoded string directly to buffer
/// Manually iterates to avoid write! macro overhead
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Escape forbidden characters, leaving valid characters and triples literal
pub fn escape_forbidden(input: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    percent_encode_into(&mut buffer, input, FORBIDDEN_SET);
    buffer
}

/// Full component pass: triple normalization, then forbidden-character escaping.
pub fn canonicalize_component(input: &str, decode_unreserved: bool, escape: bool) -> String {
    let normalized = normalize_triples(input, decode_unreserved);
    if escape {
        escape_forbidden(&normalized)
    } else {
        normalized.into_owned()
    }
}

/// Decode every percent-triple, replacing invalid UTF-8 with U+FFFD
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}
