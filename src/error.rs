/// Errors returned by URI creation and property reads.
///
/// A property that is well defined but empty for a given URI is not an error;
/// see [`Status::NotApplicable`](crate::Status::NotApplicable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriError {
    /// Mutually exclusive creation flags were combined
    InvalidFlags,
    /// A required input was absent, blank, or a property id was out of range
    InvalidArgument,
    /// The output slot of a string property read was absent
    PointerRequired,
    /// The property depends on a service this crate does not provide
    NotImplemented,
}

impl core::fmt::Display for UriError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidFlags => "Conflicting creation flags",
            Self::InvalidArgument => "Invalid argument",
            Self::PointerRequired => "Output slot required",
            Self::NotImplemented => "Not implemented",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UriError {}

/// Result type for URI operations
pub type Result<T> = core::result::Result<T, UriError>;
