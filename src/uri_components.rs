use crate::compat::{String, ToString};
use crate::types::{HostType, Policy, Scheme};
use crate::unicode::percent_encode::percent_decode;

/// A classified host.
///
/// `text` is canonical: lowercase DNS names, dotted-quad IPv4, compressed IPv6
/// without brackets, or the Unicode form of an IDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub text: String,
    pub host_type: HostType,
}

impl Host {
    pub fn new(text: String, host_type: HostType) -> Self {
        Self { text, host_type }
    }
}

/// `user[:password]`, each half already canonicalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user: String,
    pub password: Option<String>,
}

impl UserInfo {
    pub fn to_text(&self) -> String {
        match &self.password {
            Some(password) => {
                let mut text = String::with_capacity(self.user.len() + password.len() + 1);
                text.push_str(&self.user);
                text.push(':');
                text.push_str(password);
                text
            }
            None => self.user.clone(),
        }
    }
}

/// Canonical components of a parsed URI.
///
/// Every string property is assembled from these, so the concatenation
/// invariants (`PATH_AND_QUERY == PATH + QUERY` and so on) hold by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriComponents {
    pub scheme: Scheme,
    /// Lowercased scheme name, `None` for scheme-less input
    pub scheme_name: Option<String>,
    pub policy: Policy,
    /// Whether `//` is written after the scheme
    pub has_authority: bool,
    pub user_info: Option<UserInfo>,
    pub host: Option<Host>,
    /// Port as written in the input
    pub port: Option<u16>,
    /// Write the port even when it equals the scheme default
    pub keep_default_port: bool,
    pub path: String,
    /// The path starts with `/X:`, a DOS drive
    pub dos_path: bool,
    /// Query including its leading `?`
    pub query: Option<String>,
    /// Fragment including its leading `#`
    pub fragment: Option<String>,
}

impl UriComponents {
    pub fn new(scheme: Scheme, scheme_name: Option<String>, policy: Policy) -> Self {
        Self {
            scheme,
            scheme_name,
            policy,
            has_authority: false,
            user_info: None,
            host: None,
            port: None,
            keep_default_port: false,
            path: String::new(),
            dos_path: false,
            query: None,
            fragment: None,
        }
    }

    /// Check if the port can be left out of the serialization
    pub fn port_is_default(&self) -> bool {
        match self.port {
            None => true,
            Some(port) => !self.keep_default_port && self.scheme.default_port() == Some(port),
        }
    }

    /// Explicit port, or the scheme default
    pub fn effective_port(&self) -> Option<u16> {
        self.port.or_else(|| self.scheme.default_port())
    }

    pub fn host_type(&self) -> HostType {
        self.host.as_ref().map_or(HostType::Unknown, |host| host.host_type)
    }

    /// `[userinfo@]host[:port]`, `None` when all parts are empty
    pub fn authority(&self, with_user_info: bool) -> Option<String> {
        let mut authority = String::new();

        if with_user_info && let Some(user_info) = &self.user_info {
            authority.push_str(&user_info.to_text());
            authority.push('@');
        }

        if let Some(host) = &self.host {
            if host.host_type == HostType::Ipv6 {
                authority.push('[');
                authority.push_str(&host.text);
                authority.push(']');
            } else {
                authority.push_str(&host.text);
            }
        }

        if let Some(port) = self.port
            && !self.port_is_default()
        {
            authority.push(':');
            authority.push_str(&port.to_string());
        }

        (!authority.is_empty()).then_some(authority)
    }

    /// `scheme:[//authority]path[?query][#fragment]`.
    ///
    /// Returns `None` for scheme-less input.
    pub fn serialize(&self, with_user_info: bool) -> Option<String> {
        let scheme = self.scheme_name.as_deref()?;
        let mut output = String::with_capacity(scheme.len() + self.path.len() + 16);
        output.push_str(scheme);
        output.push(':');
        if self.has_authority {
            output.push_str("//");
            if let Some(authority) = self.authority(with_user_info) {
                output.push_str(&authority);
            }
        }
        self.push_path_query_fragment(&mut output);
        Some(output)
    }

    /// Path, query and fragment; the whole text of scheme-less input
    pub fn relative_text(&self) -> String {
        let mut output = String::with_capacity(self.path.len());
        self.push_path_query_fragment(&mut output);
        output
    }

    fn push_path_query_fragment(&self, output: &mut String) {
        output.push_str(&self.path);
        if let Some(query) = &self.query {
            output.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            output.push_str(fragment);
        }
    }

    pub fn path_and_query(&self) -> String {
        let mut output = self.path.clone();
        if let Some(query) = &self.query {
            output.push_str(query);
        }
        output
    }

    /// The last two labels of a DNS or IDN host.
    pub fn domain(&self) -> Option<&str> {
        let host = self.host.as_ref().filter(|host| host.host_type.has_labels())?;
        let name = host.text.strip_suffix('.').unwrap_or(&host.text);
        let last_dot = name.rfind('.')?;
        match name[..last_dot].rfind('.') {
            Some(dot) => Some(&name[dot + 1..]),
            None => Some(name),
        }
    }

    /// Last `.suffix` of the final path segment, dot included
    pub fn extension(&self) -> Option<&str> {
        if self.policy == Policy::Opaque {
            return None;
        }
        let segment = self.path.rsplit(['/', '\\']).next()?;
        segment.rfind('.').map(|dot| &segment[dot..])
    }

    /// A drive-letter path in DOS form: `c:\dir\file`
    pub fn dos_display(&self) -> String {
        let path = self.path.strip_prefix('/').unwrap_or(&self.path);
        percent_decode(path).replace('/', "\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(host: &str, host_type: HostType) -> UriComponents {
        let mut components =
            UriComponents::new(Scheme::Http, Some("http".to_string()), Policy::Hierarchical);
        components.has_authority = true;
        components.host = Some(Host::new(host.to_string(), host_type));
        components.path = "/".to_string();
        components
    }

    #[test]
    fn test_authority_and_port() {
        let mut components = http("example.com", HostType::Dns);
        components.port = Some(80);
        assert!(components.port_is_default());
        assert_eq!(components.authority(true).as_deref(), Some("example.com"));
        assert_eq!(components.effective_port(), Some(80));

        components.port = Some(8080);
        assert!(!components.port_is_default());
        assert_eq!(components.authority(true).as_deref(), Some("example.com:8080"));

        components.port = Some(80);
        components.keep_default_port = true;
        assert_eq!(components.authority(true).as_deref(), Some("example.com:80"));
    }

    #[test]
    fn test_authority_user_info() {
        let mut components = http("example.com", HostType::Dns);
        components.user_info = Some(UserInfo {
            user: "user".to_string(),
            password: Some("pass".to_string()),
        });
        assert_eq!(components.authority(true).as_deref(), Some("user:pass@example.com"));
        assert_eq!(components.authority(false).as_deref(), Some("example.com"));
        assert_eq!(components.serialize(false).as_deref(), Some("http://example.com/"));
    }

    #[test]
    fn test_ipv6_brackets() {
        let components = http("::1", HostType::Ipv6);
        assert_eq!(components.authority(true).as_deref(), Some("[::1]"));
    }

    #[test]
    fn test_domain() {
        assert_eq!(http("www.winehq.org", HostType::Dns).domain(), Some("winehq.org"));
        assert_eq!(http("winehq.org", HostType::Dns).domain(), Some("winehq.org"));
        assert_eq!(http("a.b.example.com.", HostType::Dns).domain(), Some("example.com"));
        assert_eq!(http("localhost", HostType::Dns).domain(), None);
        assert_eq!(http("192.168.0.1", HostType::Ipv4).domain(), None);
    }

    #[test]
    fn test_extension() {
        let mut components = http("example.com", HostType::Dns);
        components.path = "/dir/foo%20bar.txt".to_string();
        assert_eq!(components.extension(), Some(".txt"));
        components.path = "/dir.d/file".to_string();
        assert_eq!(components.extension(), None);
        components.path = "/".to_string();
        assert_eq!(components.extension(), None);
    }

    #[test]
    fn test_dos_display() {
        let mut components = UriComponents::new(Scheme::File, Some("file".to_string()), Policy::File);
        components.path = "/c:/tests/foo%2520bar.mp3".to_string();
        components.dos_path = true;
        assert_eq!(components.dos_display(), "c:\\tests\\foo%20bar.mp3");
    }
}
