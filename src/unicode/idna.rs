use crate::compat::String;

/// Process a domain using IDNA `ToASCII` algorithm.
/// Returns None if the domain fails UTS-46 validation.
pub fn domain_to_ascii(domain: &str) -> Option<String> {
    idna::domain_to_ascii(domain).ok()
}

/// Map an internationalized domain to its normalized Unicode form.
///
/// The domain must survive `ToASCII` first; otherwise it is not an IDN host
/// and None is returned.
pub fn idn_host(domain: &str) -> Option<String> {
    // Fast path: pure ASCII is never an IDN host here
    if domain.is_ascii() {
        return None;
    }

    let ascii = domain_to_ascii(domain)?;
    if ascii.is_empty() {
        return None;
    }

    let (unicode, result) = idna::domain_to_unicode(&ascii);
    result.ok().map(|()| unicode)
}
