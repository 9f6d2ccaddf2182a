use crate::checkers::{is_dns_name, parse_port};
use crate::compat::{Cow, String, ToString};
use crate::flags::CreateFlags;
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::types::HostType;
use crate::unicode::idna::idn_host;
use crate::unicode::percent_encode::{canonicalize_component, escape_forbidden, normalize_triples};
use crate::uri_components::{Host, UserInfo};

/// Parsed `[userinfo@]host[:port]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub user_info: Option<UserInfo>,
    pub host: Option<Host>,
    pub port: Option<u16>,
}

/// Parse an authority span.
///
/// User info ends at the last `@`, so `@` inside the user name survives.
pub fn parse_authority(raw: &str, flags: CreateFlags) -> Authority {
    let (user_info, host_port) = match memchr::memrchr(b'@', raw.as_bytes()) {
        Some(at) => (Some(parse_user_info(&raw[..at], flags)), &raw[at + 1..]),
        None => (None, raw),
    };

    let (host, port) = split_host_port(host_port);
    let host = (!host.is_empty()).then(|| parse_host(host, flags));
    if let Some(host) = &host {
        log::trace!("host {:?} classified as {:?}", host.text, host.host_type);
    }

    Authority {
        user_info,
        host,
        port,
    }
}

/// Split user info on its first `:`.
fn parse_user_info(raw: &str, flags: CreateFlags) -> UserInfo {
    let (user, password) = match memchr::memchr(b':', raw.as_bytes()) {
        Some(colon) => (&raw[..colon], Some(&raw[colon + 1..])),
        None => (raw, None),
    };

    let canonical = |part: &str| {
        if flags.canonicalizes() {
            canonicalize_component(part, true, flags.escapes_forbidden())
        } else {
            part.to_string()
        }
    };

    UserInfo {
        user: canonical(user),
        password: password.map(canonical),
    }
}

/// Split a trailing `:digits` port off a host.
///
/// A port that overflows u16 is not a port; the colon stays part of the host.
/// `host:` drops the colon and yields no port.
fn split_host_port(input: &str) -> (&str, Option<u16>) {
    let bytes = input.as_bytes();

    // Colons inside an IPv6 literal never start a port
    let search_from = if input.starts_with('[') {
        memchr::memchr(b']', bytes).map_or(bytes.len(), |end| end + 1)
    } else {
        0
    };

    let Some(colon) = memchr::memrchr(b':', &bytes[search_from..]).map(|pos| pos + search_from)
    else {
        return (input, None);
    };

    let digits = &input[colon + 1..];
    if digits.is_empty() {
        return (&input[..colon], None);
    }
    match parse_port(digits) {
        Some(port) => (&input[..colon], Some(port)),
        None => (input, None),
    }
}

/// Classify and canonicalize a host.
///
/// Tried in order: bracketed IPv6, strict dotted-quad IPv4, IDN (non-ASCII
/// that passes ToASCII), DNS label syntax. Anything else is
/// [`HostType::Unknown`] and only has forbidden characters escaped.
pub fn parse_host(raw: &str, flags: CreateFlags) -> Host {
    let canonicalize = flags.canonicalizes();

    if let Some(inner) = raw.strip_prefix('[').and_then(|rest| rest.strip_suffix(']'))
        && let Some(segments) = parse_ipv6(inner)
    {
        let text = if canonicalize {
            serialize_ipv6(&segments)
        } else {
            inner.to_string()
        };
        return Host::new(text, HostType::Ipv6);
    }

    let decoded = if canonicalize {
        normalize_triples(raw, true)
    } else {
        Cow::Borrowed(raw)
    };

    if let Some(address) = parse_ipv4(&decoded) {
        let text = if canonicalize {
            serialize_ipv4(address)
        } else {
            decoded.into_owned()
        };
        return Host::new(text, HostType::Ipv4);
    }

    if let Some(unicode) = idn_host(&decoded) {
        let text = if canonicalize {
            unicode
        } else {
            decoded.into_owned()
        };
        return Host::new(text, HostType::Idn);
    }

    let text: String = if canonicalize {
        decoded.to_ascii_lowercase()
    } else {
        decoded.into_owned()
    };
    if is_dns_name(&text) {
        return Host::new(text, HostType::Dns);
    }

    let text = if flags.escapes_forbidden() {
        escape_forbidden(&text)
    } else {
        text
    };
    Host::new(text, HostType::Unknown)
}
