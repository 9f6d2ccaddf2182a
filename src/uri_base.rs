use crate::types::{HostType, Scheme};

/// Typed property getters shared by URI types.
///
/// String getters return `None` when the property does not apply.
#[doc(hidden)] // Internal trait, not part of public API docs
pub trait UriBase {
    // String properties (15 methods)

    /// Full canonical URI
    fn absolute_uri(&self) -> Option<&str>;

    /// `[userinfo@]host[:port]`, port only when not the scheme default
    fn authority(&self) -> Option<&str>;

    /// Canonical URI without user info
    fn display_uri(&self) -> Option<&str>;

    /// Last two labels of a DNS or IDN host (e.g. "winehq.org")
    fn domain(&self) -> Option<&str>;

    /// Suffix of the last path segment including the dot (e.g. ".txt")
    fn extension(&self) -> Option<&str>;

    /// Fragment including the leading `#`
    fn fragment(&self) -> Option<&str>;

    fn host(&self) -> Option<&str>;

    fn password(&self) -> Option<&str>;

    fn path(&self) -> Option<&str>;

    fn path_and_query(&self) -> Option<&str>;

    /// Query including the leading `?`
    fn query(&self) -> Option<&str>;

    /// The input text exactly as given
    fn raw_uri(&self) -> &str;

    /// Lowercase scheme name without the `:`
    fn scheme_name(&self) -> Option<&str>;

    fn user_info(&self) -> Option<&str>;

    fn user_name(&self) -> Option<&str>;

    // Numeric properties (3 methods)

    fn host_type(&self) -> HostType;

    /// Explicit port, or the scheme default
    fn port(&self) -> Option<u16>;

    fn scheme(&self) -> Scheme;

    // Has checks (4 methods)

    /// Check if URI has user info (possibly empty, as in `http://@host/`)
    fn has_credentials(&self) -> bool;

    /// Check if URI has a non-empty host
    fn has_host(&self) -> bool;

    fn has_query(&self) -> bool;

    fn has_fragment(&self) -> bool;
}
