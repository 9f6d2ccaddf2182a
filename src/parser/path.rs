use crate::checkers::is_windows_drive_letter;
use crate::compat::{String, ToString, Vec, format};
use crate::flags::CreateFlags;
use crate::unicode::percent_encode::{
    DOS_PATH_SET, escape_forbidden, normalize_triples, percent_encode_into,
};

/// Remove `.` and `..` segments from a `/`-separated path.
///
/// `..` at the root is dropped. A trailing `.` or `..` leaves a trailing slash.
pub fn remove_dot_segments(path: &str) -> String {
    let (absolute, rest) = match path.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, path),
    };

    let mut output: Vec<&str> = Vec::new();
    let mut segments = rest.split('/').peekable();
    while let Some(segment) = segments.next() {
        let last = segments.peek().is_none();
        match segment {
            "." => {}
            ".." => {
                output.pop();
            }
            _ => {
                output.push(segment);
                continue;
            }
        }
        if last {
            output.push("");
        }
    }

    let mut result = String::with_capacity(path.len());
    if absolute {
        result.push('/');
    }
    result.push_str(&output.join("/"));
    result
}

/// Canonical path of a hierarchical URI.
///
/// `\` becomes `/`, unreserved triples are decoded (so `%2E%2E` counts as
/// `..`), dot segments are removed, then forbidden characters are escaped.
/// An empty path after an authority becomes `/`. Without an authority a path
/// starting with `//` is written as `/.//` so it cannot be read back as one.
pub fn canonicalize_hierarchical_path(raw: &str, has_authority: bool, flags: CreateFlags) -> String {
    if !flags.canonicalizes() {
        return raw.to_string();
    }

    let slashed = raw.replace('\\', "/");
    let decoded = normalize_triples(&slashed, true);
    let path = remove_dot_segments(&decoded);

    if has_authority && path.is_empty() {
        return "/".to_string();
    }
    let path = if !has_authority && path.starts_with("//") {
        format!("/.{path}")
    } else {
        path
    };
    if flags.escapes_forbidden() {
        escape_forbidden(&path)
    } else {
        path
    }
}

/// Canonical path of a `file:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath {
    pub text: String,
    /// Starts with a drive letter (`/c:/...`)
    pub dos: bool,
}

/// Canonicalize a `file:` path.
///
/// Separators become `/` and the path always gets exactly one leading `/`.
/// A drive letter (`c:` or `c|`) is the root that `..` cannot climb above.
/// With `local_text` the path was written as a local path rather than a URI
/// (drive in the authority, `file:c:\...`, implicit file input), so every
/// `%` is data and is escaped to `%25`. Otherwise existing triples are kept.
pub fn canonicalize_file_path(raw: &str, local_text: bool, flags: CreateFlags) -> FilePath {
    let trimmed = raw.trim_start_matches(['/', '\\']);
    let dos = is_windows_drive_letter(trimmed.as_bytes(), 0);

    if !flags.canonicalizes() {
        let text = if raw.is_empty() || raw.starts_with(['/', '\\']) {
            raw.to_string()
        } else {
            format!("/{raw}")
        };
        return FilePath { text, dos };
    }

    let (drive, rest) = if dos {
        trimmed.split_at(2)
    } else {
        ("", trimmed)
    };
    let slashed = rest.replace('\\', "/");
    let rooted = format!("/{}", slashed.trim_start_matches('/'));
    let removed = remove_dot_segments(&rooted);
    // Dot removal can expose an empty first segment (`/a/..//x`)
    let cleaned = format!("/{}", removed.trim_start_matches('/'));

    let mut text = String::with_capacity(cleaned.len() + 4);
    if let Some(letter) = drive.chars().next() {
        text.push('/');
        text.push(letter);
        text.push(':');
    }

    match (local_text && dos, flags.escapes_forbidden()) {
        (true, true) => percent_encode_into(&mut text, &cleaned, DOS_PATH_SET),
        (false, true) => text.push_str(&escape_forbidden(&normalize_triples(&cleaned, false))),
        (_, false) => text.push_str(&cleaned),
    }

    FilePath { text, dos }
}
