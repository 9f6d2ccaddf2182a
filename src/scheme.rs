use crate::types::Scheme;

/// Get the scheme from its name, ignoring ASCII case.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme(name: &str) -> Scheme {
    let bytes = name.as_bytes();
    let is = |known: &[u8]| bytes.eq_ignore_ascii_case(known);

    // Perfect hash: filter by length first, then first byte, then full comparison
    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'm')) if is(b"mk") => Scheme::Mk,
        (3, Some(b'f')) if is(b"ftp") => Scheme::Ftp,
        (3, Some(b'r')) if is(b"res") => Scheme::Res,
        (4, Some(b'h')) if is(b"http") => Scheme::Http,
        (4, Some(b'f')) if is(b"file") => Scheme::File,
        (4, Some(b'n')) if is(b"news") => Scheme::News,
        (4, Some(b'n')) if is(b"nntp") => Scheme::Nntp,
        (4, Some(b'w')) if is(b"wais") => Scheme::Wais,
        (5, Some(b'h')) if is(b"https") => Scheme::Https,
        (5, Some(b's')) if is(b"shell") => Scheme::Shell,
        (5, Some(b's')) if is(b"snews") => Scheme::Snews,
        (5, Some(b'l')) if is(b"local") => Scheme::Local,
        (5, Some(b'a')) if is(b"about") => Scheme::About,
        (6, Some(b'g')) if is(b"gopher") => Scheme::Gopher,
        (6, Some(b'm')) if is(b"mailto") => Scheme::Mailto,
        (6, Some(b't')) if is(b"telnet") => Scheme::Telnet,
        (8, Some(b'v')) if is(b"vbscript") => Scheme::Vbscript,
        (10, Some(b'j')) if is(b"javascript") => Scheme::Javascript,
        _ => Scheme::Unknown,
    }
}
