mod authority;
mod path;
mod scanner;
mod state;

pub use authority::{parse_authority, parse_host};
pub use path::{canonicalize_file_path, canonicalize_hierarchical_path};
pub use scanner::{RawSpans, scan};
pub use state::State;

use crate::checkers::is_windows_drive_letter;
use crate::compat::{Cow, String, ToString, format};
use crate::error::{Result, UriError};
use crate::flags::CreateFlags;
use crate::helpers::trim_c0_and_space;
use crate::types::Policy;
use crate::unicode::percent_encode::{canonicalize_component, escape_forbidden, normalize_triples};
use crate::uri_components::UriComponents;

/// Run the scan and canonicalization pipeline.
///
/// Flags must already be validated.
///
/// # Errors
///
/// Returns [`UriError::InvalidArgument`] for empty or all-whitespace input.
pub fn parse_components(input: &str, flags: CreateFlags) -> Result<UriComponents> {
    let trimmed = trim_c0_and_space(input);
    if trimmed.is_empty() {
        log::debug!("rejecting blank URI text ({} bytes)", input.len());
        return Err(UriError::InvalidArgument);
    }

    let spans = scan(trimmed, flags);
    log::trace!(
        "scanned {:?}: scheme {:?}, policy {:?}, authority {:?}",
        trimmed,
        spans.scheme,
        spans.policy,
        spans.authority
    );

    let components = match spans.policy {
        Policy::Hierarchical => build_hierarchical(&spans, flags),
        Policy::File => build_file(&spans, flags),
        Policy::Opaque => build_opaque(&spans, flags),
    };
    log::trace!("canonical path {:?}", components.path);

    Ok(components)
}

/// Known schemes use their canonical name, others are lowercased as written
fn scheme_name(spans: &RawSpans<'_>) -> Option<String> {
    match spans.scheme.as_str() {
        Some(name) => Some(name.to_string()),
        None => spans.scheme_name.map(str::to_ascii_lowercase),
    }
}

fn build_hierarchical(spans: &RawSpans<'_>, flags: CreateFlags) -> UriComponents {
    let mut components = UriComponents::new(spans.scheme, scheme_name(spans), spans.policy);
    components.keep_default_port = !flags.canonicalizes();

    if let Some(raw) = spans.authority {
        let authority = parse_authority(raw, flags);
        components.has_authority = true;
        components.user_info = authority.user_info;
        components.host = authority.host;
        components.port = authority.port;
    }

    components.path = canonicalize_hierarchical_path(spans.path, components.has_authority, flags);
    components.query = spans.query.map(|query| canonicalize_extra(query, flags));
    components.fragment = spans.fragment.map(|fragment| canonicalize_extra(fragment, flags));
    components
}

/// Build a `file:` URI.
///
/// The authority folds into the path: `localhost` and an empty authority are
/// dropped, a drive letter joins the path, anything else is a UNC host.
fn build_file(spans: &RawSpans<'_>, flags: CreateFlags) -> UriComponents {
    let mut components = UriComponents::new(spans.scheme, scheme_name(spans), Policy::File);
    components.has_authority = true;

    let mut path: Cow<'_, str> = Cow::Borrowed(spans.path);
    let mut local_text = false;
    match spans.authority {
        Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case("localhost") => {}
        Some(raw) if is_windows_drive_letter(raw.as_bytes(), 0) => {
            path = Cow::Owned(format!("{raw}{}", spans.path));
            local_text = true;
        }
        Some(raw) => components.host = Some(parse_host(raw, flags)),
        // `file:c:\dir` or implicit `c:\dir`
        None => local_text = is_windows_drive_letter(spans.path.as_bytes(), 0),
    }

    let file_path = canonicalize_file_path(&path, local_text, flags);
    log::trace!(
        "file path {:?}: drive {}, local text {}",
        file_path.text,
        file_path.dos,
        local_text
    );
    components.path = file_path.text;
    components.dos_path = file_path.dos;
    components.query = spans.query.map(|query| canonicalize_extra(query, flags));
    components.fragment = spans.fragment.map(|fragment| canonicalize_extra(fragment, flags));
    components
}

/// Opaque bodies are copied through; only the query and fragment may be
/// decoded, and only when asked.
fn build_opaque(spans: &RawSpans<'_>, flags: CreateFlags) -> UriComponents {
    let mut components = UriComponents::new(spans.scheme, scheme_name(spans), Policy::Opaque);
    components.path = spans.path.to_string();

    let decode = |part: &str| {
        if flags.decodes_extra_info() {
            normalize_triples(part, true).into_owned()
        } else {
            part.to_string()
        }
    };
    components.query = spans.query.map(decode);
    components.fragment = spans.fragment.map(decode);
    components
}

/// Query or fragment of a hierarchical or file URI
fn canonicalize_extra(raw: &str, flags: CreateFlags) -> String {
    if flags.decodes_extra_info() {
        canonicalize_component(raw, true, flags.escapes_forbidden())
    } else if flags.escapes_forbidden() {
        escape_forbidden(raw)
    } else {
        raw.to_string()
    }
}
