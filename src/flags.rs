use crate::error::{Result, UriError};

/// Creation options for [`Uri::create`](crate::Uri::create).
///
/// Bit values match the well-known `Uri_CREATE_*` constants, so numeric flag
/// words coming from other tooling can be passed through [`CreateFlags::from_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CreateFlags(u32);

impl CreateFlags {
    /// No options; canonicalization is on by default.
    pub const NONE: Self = Self(0);
    /// Accepted. Scheme-less input is always parsed best-effort.
    pub const ALLOW_RELATIVE: Self = Self(0x0001);
    /// Accepted. No parsing effect.
    pub const ALLOW_IMPLICIT_WILDCARD_SCHEME: Self = Self(0x0002);
    /// Treat `c:\dir` and `\\server\share` input as `file:` URIs.
    pub const ALLOW_IMPLICIT_FILE_SCHEME: Self = Self(0x0004);
    /// `#` is ordinary data, never a fragment delimiter.
    pub const NO_FRAG: Self = Self(0x0008);
    /// Skip percent normalization, dot-segment removal and host lowercasing.
    pub const NO_CANONICALIZE: Self = Self(0x0010);
    /// Display drive-letter `file:` URIs as DOS paths.
    pub const FILE_USE_DOS_PATH: Self = Self(0x0020);
    /// Decode unreserved percent-triples in the query and fragment.
    pub const DECODE_EXTRA_INFO: Self = Self(0x0040);
    /// Leave the query and fragment triples as written.
    pub const NO_DECODE_EXTRA_INFO: Self = Self(0x0080);
    /// Full canonicalization (the default).
    pub const CANONICALIZE: Self = Self(0x0100);
    /// Parse unrecognized schemes as `scheme://authority/path`.
    pub const CRACK_UNKNOWN_SCHEMES: Self = Self(0x0200);
    /// Keep unrecognized schemes opaque (the default).
    pub const NO_CRACK_UNKNOWN_SCHEMES: Self = Self(0x0400);
    /// Trim leading and trailing whitespace (always done).
    pub const PRE_PROCESS_HTML_URI: Self = Self(0x0800);
    pub const NO_PRE_PROCESS_HTML_URI: Self = Self(0x1000);
    pub const IE_SETTINGS: Self = Self(0x2000);
    pub const NO_IE_SETTINGS: Self = Self(0x4000);
    /// Leave forbidden characters (space, `<`, `>` ...) unescaped.
    pub const NO_ENCODE_FORBIDDEN_CHARACTERS: Self = Self(0x8000);

    /// Pairs that may not be set together.
    const EXCLUSIVE_PAIRS: [(Self, Self); 5] = [
        (Self::DECODE_EXTRA_INFO, Self::NO_DECODE_EXTRA_INFO),
        (Self::CANONICALIZE, Self::NO_CANONICALIZE),
        (Self::CRACK_UNKNOWN_SCHEMES, Self::NO_CRACK_UNKNOWN_SCHEMES),
        (Self::PRE_PROCESS_HTML_URI, Self::NO_PRE_PROCESS_HTML_URI),
        (Self::IE_SETTINGS, Self::NO_IE_SETTINGS),
    ];

    /// Wrap a raw flag word. Unknown bits are kept and ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if every bit of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Reject contradictory option pairs.
    ///
    /// # Errors
    ///
    /// Returns [`UriError::InvalidFlags`] if both members of any exclusive pair are set.
    pub fn validate(self) -> Result<Self> {
        for (on, off) in Self::EXCLUSIVE_PAIRS {
            if self.contains(on) && self.contains(off) {
                log::debug!("rejecting flags {:#06x}: {:#06x} conflicts with {:#06x}", self.0, on.0, off.0);
                return Err(UriError::InvalidFlags);
            }
        }
        Ok(self)
    }

    /// Check if the canonicalization pipeline runs
    pub(crate) fn canonicalizes(self) -> bool {
        !self.contains(Self::NO_CANONICALIZE)
    }

    pub(crate) fn escapes_forbidden(self) -> bool {
        self.canonicalizes() && !self.contains(Self::NO_ENCODE_FORBIDDEN_CHARACTERS)
    }

    pub(crate) fn decodes_extra_info(self) -> bool {
        self.canonicalizes() && self.contains(Self::DECODE_EXTRA_INFO)
    }
}

impl core::ops::BitOr for CreateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl core::ops::BitOrAssign for CreateFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl From<u32> for CreateFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}
