use crate::error::{Result, UriError};

/// Well-known URI schemes.
///
/// Discriminants follow the common `URL_SCHEME` numbering, which is what the
/// numeric `SCHEME` property reports. Anything not listed (including `urn`)
/// is [`Scheme::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Scheme {
    #[default]
    Unknown = 0,
    Ftp = 1,
    Http = 2,
    Gopher = 3,
    Mailto = 4,
    News = 5,
    Nntp = 6,
    Telnet = 7,
    Wais = 8,
    File = 9,
    Mk = 10,
    Https = 11,
    Shell = 12,
    Snews = 13,
    Local = 14,
    Javascript = 15,
    Vbscript = 16,
    About = 17,
    Res = 18,
}

impl Scheme {
    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http => Some(80),
            Self::Https => Some(443),
            Self::Ftp => Some(21),
            Self::Gopher => Some(70),
            Self::Telnet => Some(23),
            Self::Nntp => Some(119),
            Self::Wais => Some(210),
            _ => None,
        }
    }

    /// Canonical lowercase name, `None` for [`Scheme::Unknown`]
    pub fn as_str(self) -> Option<&'static str> {
        let name = match self {
            Self::Unknown => return None,
            Self::Ftp => "ftp",
            Self::Http => "http",
            Self::Gopher => "gopher",
            Self::Mailto => "mailto",
            Self::News => "news",
            Self::Nntp => "nntp",
            Self::Telnet => "telnet",
            Self::Wais => "wais",
            Self::File => "file",
            Self::Mk => "mk",
            Self::Https => "https",
            Self::Shell => "shell",
            Self::Snews => "snews",
            Self::Local => "local",
            Self::Javascript => "javascript",
            Self::Vbscript => "vbscript",
            Self::About => "about",
            Self::Res => "res",
        };
        Some(name)
    }

    /// Select the canonicalization policy.
    ///
    /// `crack_unknown` promotes unrecognized schemes to [`Policy::Hierarchical`].
    pub fn policy(self, crack_unknown: bool) -> Policy {
        match self {
            Self::File => Policy::File,
            Self::Http
            | Self::Https
            | Self::Ftp
            | Self::Gopher
            | Self::Telnet
            | Self::Nntp
            | Self::Wais => Policy::Hierarchical,
            Self::Unknown if crack_unknown => Policy::Hierarchical,
            _ => Policy::Opaque,
        }
    }
}

/// How a URI body is decomposed and canonicalized.
///
/// Chosen once from the scheme and never re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// `scheme://authority/path?query#fragment` with full normalization
    Hierarchical,
    /// `file:` URIs: local paths, drive letters, no percent decoding
    File,
    /// Body copied through as written
    Opaque,
}

impl Policy {
    /// Check if `\` separates path segments under this policy
    pub fn backslash_is_separator(self) -> bool {
        self != Self::Opaque
    }
}

/// Host classification, numbered as reported by the `HOST_TYPE` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum HostType {
    #[default]
    Unknown = 0,
    Dns = 1,
    Ipv4 = 2,
    Ipv6 = 3,
    Idn = 4,
}

impl HostType {
    /// Check if a registrable domain can be derived from hosts of this type
    pub fn has_labels(self) -> bool {
        matches!(self, Self::Dns | Self::Idn)
    }
}

/// Property identifiers.
///
/// Ids `0..=14` are string properties and `15..=18` numeric ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Property {
    AbsoluteUri = 0,
    Authority = 1,
    DisplayUri = 2,
    Domain = 3,
    Extension = 4,
    Fragment = 5,
    Host = 6,
    Password = 7,
    Path = 8,
    PathAndQuery = 9,
    Query = 10,
    RawUri = 11,
    SchemeName = 12,
    UserInfo = 13,
    UserName = 14,
    HostType = 15,
    Port = 16,
    Scheme = 17,
    Zone = 18,
}

impl Property {
    pub const STRING_START: u32 = 0;
    pub const STRING_LAST: u32 = 14;
    pub const NUMERIC_START: u32 = 15;
    pub const NUMERIC_LAST: u32 = 18;

    /// All string properties in id order
    pub const STRINGS: [Self; 15] = [
        Self::AbsoluteUri,
        Self::Authority,
        Self::DisplayUri,
        Self::Domain,
        Self::Extension,
        Self::Fragment,
        Self::Host,
        Self::Password,
        Self::Path,
        Self::PathAndQuery,
        Self::Query,
        Self::RawUri,
        Self::SchemeName,
        Self::UserInfo,
        Self::UserName,
    ];

    /// All numeric properties in id order
    pub const NUMERICS: [Self; 4] = [Self::HostType, Self::Port, Self::Scheme, Self::Zone];

    pub const fn id(self) -> u32 {
        self as u32
    }

    pub fn is_string(self) -> bool {
        self.id() <= Self::STRING_LAST
    }

    pub fn is_numeric(self) -> bool {
        !self.is_string()
    }
}

impl TryFrom<u32> for Property {
    type Error = UriError;

    fn try_from(id: u32) -> Result<Self> {
        let index = id as usize;
        if id <= Self::STRING_LAST {
            Ok(Self::STRINGS[index])
        } else if id <= Self::NUMERIC_LAST {
            Ok(Self::NUMERICS[index - Self::NUMERIC_START as usize])
        } else {
            Err(UriError::InvalidArgument)
        }
    }
}

/// Outcome of a successful property read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The property applies and its value was written
    Ok,
    /// The property does not apply to this URI; an empty value was written
    NotApplicable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(Scheme::Http.default_port(), Some(80));
        assert_eq!(Scheme::Https.default_port(), Some(443));
        assert_eq!(Scheme::Ftp.default_port(), Some(21));
        assert_eq!(Scheme::File.default_port(), None);
        assert_eq!(Scheme::Unknown.default_port(), None);
    }

    #[test]
    fn test_policy_selection() {
        assert_eq!(Scheme::Http.policy(false), Policy::Hierarchical);
        assert_eq!(Scheme::File.policy(true), Policy::File);
        assert_eq!(Scheme::Mailto.policy(true), Policy::Opaque);
        assert_eq!(Scheme::Unknown.policy(false), Policy::Opaque);
        assert_eq!(Scheme::Unknown.policy(true), Policy::Hierarchical);
    }

    #[test]
    fn test_property_ids() {
        for (i, prop) in Property::STRINGS.iter().enumerate() {
            assert_eq!(prop.id() as usize, i);
            assert!(prop.is_string());
        }
        for prop in Property::NUMERICS {
            assert!(prop.is_numeric());
            assert_eq!(Property::try_from(prop.id()), Ok(prop));
        }
        assert_eq!(Property::try_from(19), Err(UriError::InvalidArgument));
        assert_eq!(Property::try_from(u32::MAX), Err(UriError::InvalidArgument));
    }
}
