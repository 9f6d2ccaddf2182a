use super::State;
use crate::character_sets::{is_path_separator, is_scheme_char};
use crate::checkers::{is_unc_path, is_windows_drive_letter};
use crate::flags::CreateFlags;
use crate::helpers::{find_authority_end, split_fragment, split_query};
use crate::scheme::get_scheme;
use crate::types::{Policy, Scheme};

/// Raw component spans of a URI, borrowed from the input.
///
/// Nothing here is normalized; `query` and `fragment` keep their delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpans<'a> {
    /// Scheme as written, without the `:`
    pub scheme_name: Option<&'a str>,
    pub scheme: Scheme,
    pub policy: Policy,
    /// Text after `//`, absent when there were no two leading separators
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Split trimmed, non-empty input into raw spans.
///
/// The scheme is classified as soon as it is read, since the policy decides
/// whether `\` separates the authority and path.
pub fn scan(input: &str, flags: CreateFlags) -> RawSpans<'_> {
    let bytes = input.as_bytes();
    let fragments = !flags.contains(CreateFlags::NO_FRAG);
    let mut spans = RawSpans {
        scheme_name: None,
        scheme: Scheme::Unknown,
        policy: Policy::Opaque,
        authority: None,
        path: "",
        query: None,
        fragment: None,
    };
    let mut state = State::SchemeStart;
    let mut pointer = 0;

    loop {
        match state {
            State::SchemeStart => {
                let implicit_file = flags.contains(CreateFlags::ALLOW_IMPLICIT_FILE_SCHEME)
                    && (is_windows_drive_letter(bytes, 0) || is_unc_path(input));
                state = if implicit_file {
                    State::ImplicitFile
                } else if bytes.first().is_some_and(u8::is_ascii_alphabetic) {
                    State::Scheme
                } else {
                    State::NoScheme
                };
            }
            State::Scheme => {
                let end = bytes
                    .iter()
                    .position(|&b| !is_scheme_char(b))
                    .unwrap_or(bytes.len());

                // A single letter before ':' is a drive, not a scheme
                if end >= 2 && bytes.get(end) == Some(&b':') {
                    let name = &input[..end];
                    spans.scheme_name = Some(name);
                    spans.scheme = get_scheme(name);
                    spans.policy = spans
                        .scheme
                        .policy(flags.contains(CreateFlags::CRACK_UNKNOWN_SCHEMES));
                    pointer = end + 1;
                    state = match spans.policy {
                        Policy::Opaque => State::Path,
                        Policy::Hierarchical | Policy::File => State::AuthoritySlashes,
                    };
                } else {
                    state = State::NoScheme;
                }
            }
            State::NoScheme => {
                spans.policy = Policy::Opaque;
                state = State::Path;
            }
            State::ImplicitFile => {
                spans.scheme = Scheme::File;
                spans.policy = Policy::File;
                if is_unc_path(input) {
                    pointer = 2;
                    state = State::Authority;
                } else {
                    state = State::Path;
                }
            }
            State::AuthoritySlashes => {
                let backslash = spans.policy.backslash_is_separator();
                let rest = &bytes[pointer..];
                let has_slashes = rest.len() >= 2
                    && is_path_separator(rest[0], backslash)
                    && is_path_separator(rest[1], backslash);
                if has_slashes {
                    pointer += 2;
                    state = State::Authority;
                } else {
                    state = State::Path;
                }
            }
            State::Authority => {
                let backslash = spans.policy.backslash_is_separator();
                let end = pointer + find_authority_end(&input[pointer..], backslash, fragments);
                spans.authority = Some(&input[pointer..end]);
                pointer = end;
                state = State::Path;
            }
            State::Path => {
                let (before_fragment, fragment) = split_fragment(&input[pointer..], fragments);
                let (path, query) = split_query(before_fragment);
                spans.path = path;
                spans.query = query;
                spans.fragment = fragment;
                break;
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_hierarchical() {
        let spans = scan("hTTp://user@host:80/a/b?q=1#frag", CreateFlags::NONE);
        assert_eq!(spans.scheme_name, Some("hTTp"));
        assert_eq!(spans.scheme, Scheme::Http);
        assert_eq!(spans.policy, Policy::Hierarchical);
        assert_eq!(spans.authority, Some("user@host:80"));
        assert_eq!(spans.path, "/a/b");
        assert_eq!(spans.query, Some("?q=1"));
        assert_eq!(spans.fragment, Some("#frag"));
    }

    #[test]
    fn test_scan_backslash_authority() {
        let spans = scan("file://c:\\tests\\../tests/foo%20bar.mp3", CreateFlags::NONE);
        assert_eq!(spans.policy, Policy::File);
        assert_eq!(spans.authority, Some("c:"));
        assert_eq!(spans.path, "\\tests\\../tests/foo%20bar.mp3");

        let spans = scan("http:\\\\host\\path", CreateFlags::NONE);
        assert_eq!(spans.authority, Some("host"));
        assert_eq!(spans.path, "\\path");
    }

    #[test]
    fn test_scan_opaque() {
        let spans = scan("urn:nothing:should:happen here", CreateFlags::NONE);
        assert_eq!(spans.scheme_name, Some("urn"));
        assert_eq!(spans.scheme, Scheme::Unknown);
        assert_eq!(spans.policy, Policy::Opaque);
        assert_eq!(spans.authority, None);
        assert_eq!(spans.path, "nothing:should:happen here");

        // Backslash is data under the opaque policy
        let spans = scan("zip:\\\\a\\b", CreateFlags::NONE);
        assert_eq!(spans.path, "\\\\a\\b");
    }

    #[test]
    fn test_scan_crack_unknown() {
        let spans = scan("zip://host/a", CreateFlags::CRACK_UNKNOWN_SCHEMES);
        assert_eq!(spans.policy, Policy::Hierarchical);
        assert_eq!(spans.authority, Some("host"));
        assert_eq!(spans.path, "/a");
    }

    #[test]
    fn test_scan_no_scheme() {
        let spans = scan("c:\\dir\\file.txt", CreateFlags::NONE);
        assert_eq!(spans.scheme_name, None);
        assert_eq!(spans.policy, Policy::Opaque);
        assert_eq!(spans.path, "c:\\dir\\file.txt");

        let spans = scan("www.winehq.org/x?y", CreateFlags::NONE);
        assert_eq!(spans.scheme_name, None);
        assert_eq!(spans.path, "www.winehq.org/x");
        assert_eq!(spans.query, Some("?y"));
    }

    #[test]
    fn test_scan_implicit_file() {
        let flags = CreateFlags::ALLOW_IMPLICIT_FILE_SCHEME;
        let spans = scan("c:\\dir\\file.txt", flags);
        assert_eq!(spans.scheme, Scheme::File);
        assert_eq!(spans.policy, Policy::File);
        assert_eq!(spans.authority, None);
        assert_eq!(spans.path, "c:\\dir\\file.txt");

        let spans = scan("\\\\server\\share\\x", flags);
        assert_eq!(spans.authority, Some("server"));
        assert_eq!(spans.path, "\\share\\x");
    }

    #[test]
    fn test_scan_no_frag() {
        let spans = scan("http://host/a#b?c", CreateFlags::NO_FRAG);
        assert_eq!(spans.path, "/a#b");
        assert_eq!(spans.query, Some("?c"));
        assert_eq!(spans.fragment, None);
    }
}
