use crate::compat::{Arc, String};
use crate::error::{Result, UriError};
use crate::flags::CreateFlags;
use crate::parser::parse_components;
use crate::properties::PropertyCache;
use crate::types::{HostType, Policy, Property, Scheme, Status};
use crate::uri_base::UriBase;
use crate::uri_components::UriComponents;

/// Value written to a `ZONE` output slot. Zone mapping is not provided.
pub const ZONE_INVALID: u32 = u32::MAX;

/// A parsed, canonicalized URI.
///
/// Immutable after creation; every property is computed up front. Cloning
/// shares the same data, and a `Uri` can be read from many threads at once.
///
/// # Examples
///
/// ```
/// use urimon::{CreateFlags, Uri};
///
/// let uri = Uri::parse("HtTp://www.winehq.org/tests/..?query=x", CreateFlags::NONE).unwrap();
/// assert_eq!(uri.absolute_uri(), Some("http://www.winehq.org/?query=x"));
/// assert_eq!(uri.domain(), Some("winehq.org"));
/// assert_eq!(uri.port(), Some(80));
/// ```
#[derive(Debug, Clone)]
pub struct Uri {
    inner: Arc<UriData>,
}

#[derive(Debug)]
struct UriData {
    flags: CreateFlags,
    components: UriComponents,
    properties: PropertyCache,
}

impl Uri {
    /// Create a URI from optional text.
    ///
    /// Flags are checked before the text is looked at, so conflicting flags
    /// fail the same way for every input.
    ///
    /// # Errors
    ///
    /// - [`UriError::InvalidFlags`] if mutually exclusive flags are combined
    /// - [`UriError::InvalidArgument`] if `text` is absent, empty, or blank
    pub fn create(text: Option<&str>, flags: CreateFlags) -> Result<Self> {
        let flags = flags.validate()?;
        let Some(text) = text else {
            log::debug!("rejecting absent URI text");
            return Err(UriError::InvalidArgument);
        };

        let components = parse_components(text, flags)?;
        let properties = PropertyCache::build(text, &components, flags);

        Ok(Self {
            inner: Arc::new(UriData {
                flags,
                components,
                properties,
            }),
        })
    }

    /// Parse URI text.
    ///
    /// # Errors
    ///
    /// Same as [`Uri::create`].
    pub fn parse(input: &str, flags: CreateFlags) -> Result<Self> {
        Self::create(Some(input), flags)
    }

    /// Check if text would be accepted with the given flags
    ///
    /// # Examples
    ///
    /// ```
    /// use urimon::{CreateFlags, Uri};
    ///
    /// assert!(Uri::can_parse("urn:anything at all", CreateFlags::NONE));
    /// assert!(!Uri::can_parse("   ", CreateFlags::NONE));
    /// assert!(!Uri::can_parse("http://h/", CreateFlags::CANONICALIZE | CreateFlags::NO_CANONICALIZE));
    /// ```
    pub fn can_parse(input: &str, flags: CreateFlags) -> bool {
        flags.validate().is_ok() && parse_components(input, flags).is_ok()
    }

    /// Flags the URI was created with
    pub fn flags(&self) -> CreateFlags {
        self.inner.flags
    }

    /// Canonicalization policy chosen for the scheme
    pub fn policy(&self) -> Policy {
        self.inner.components.policy
    }

    /// Segments of the canonical path.
    ///
    /// `None` for opaque URIs, whose body has no segment structure.
    pub fn path_segments(&self) -> Option<core::str::Split<'_, char>> {
        let components = &self.inner.components;
        if components.policy == Policy::Opaque {
            return None;
        }
        let path = components.path.as_str();
        Some(path.strip_prefix('/').unwrap_or(path).split('/'))
    }

    /// Read a string property.
    ///
    /// # Errors
    ///
    /// Returns [`UriError::InvalidArgument`] for numeric properties.
    pub fn property_str(&self, property: Property) -> Result<Option<&str>> {
        if !property.is_string() {
            return Err(UriError::InvalidArgument);
        }
        Ok(self.inner.properties.string(property))
    }

    /// Read a numeric property.
    ///
    /// # Errors
    ///
    /// - [`UriError::InvalidArgument`] for string properties
    /// - [`UriError::NotImplemented`] for [`Property::Zone`]
    pub fn property_u32(&self, property: Property) -> Result<Option<u32>> {
        let properties = &self.inner.properties;
        match property {
            Property::HostType => Ok(Some(properties.host_type() as u32)),
            Property::Port => Ok(properties.port().map(u32::from)),
            Property::Scheme => Ok(Some(properties.scheme() as u32)),
            Property::Zone => Err(UriError::NotImplemented),
            _ => Err(UriError::InvalidArgument),
        }
    }

    /// Read a string property by numeric id into an output slot.
    ///
    /// The slot is cleared first, and stays empty when the property does not
    /// apply.
    ///
    /// # Errors
    ///
    /// - [`UriError::PointerRequired`] if `out` is absent
    /// - [`UriError::InvalidArgument`] if `id` is not a string property
    pub fn get_property_str(&self, id: u32, out: Option<&mut String>) -> Result<Status> {
        let out = out.ok_or(UriError::PointerRequired)?;
        out.clear();

        let property = Property::try_from(id)?;
        match self.property_str(property)? {
            Some(value) => {
                out.push_str(value);
                Ok(Status::Ok)
            }
            None => Ok(Status::NotApplicable),
        }
    }

    /// Read a numeric property by id into an output slot.
    ///
    /// Writes 0 when the property does not apply, and [`ZONE_INVALID`] for
    /// `ZONE` before reporting it unsupported.
    ///
    /// # Errors
    ///
    /// - [`UriError::InvalidArgument`] if `out` is absent or `id` is not a numeric property
    /// - [`UriError::NotImplemented`] for `ZONE`
    pub fn get_property_u32(&self, id: u32, out: Option<&mut u32>) -> Result<Status> {
        let out = out.ok_or(UriError::InvalidArgument)?;
        let property = Property::try_from(id)?;

        match self.property_u32(property) {
            Ok(Some(value)) => {
                *out = value;
                Ok(Status::Ok)
            }
            Ok(None) => {
                *out = 0;
                Ok(Status::NotApplicable)
            }
            Err(UriError::NotImplemented) => {
                *out = ZONE_INVALID;
                Err(UriError::NotImplemented)
            }
            Err(err) => Err(err),
        }
    }

    /// Check if a property applies to this URI
    pub fn has_property(&self, property: Property) -> bool {
        match property {
            Property::HostType | Property::Scheme => true,
            Property::Port => self.inner.properties.port().is_some(),
            Property::Zone => false,
            _ => self.inner.properties.string(property).is_some(),
        }
    }
}

impl UriBase for Uri {
    fn absolute_uri(&self) -> Option<&str> {
        self.inner.properties.string(Property::AbsoluteUri)
    }

    fn authority(&self) -> Option<&str> {
        self.inner.properties.string(Property::Authority)
    }

    fn display_uri(&self) -> Option<&str> {
        self.inner.properties.string(Property::DisplayUri)
    }

    fn domain(&self) -> Option<&str> {
        self.inner.properties.string(Property::Domain)
    }

    fn extension(&self) -> Option<&str> {
        self.inner.properties.string(Property::Extension)
    }

    fn fragment(&self) -> Option<&str> {
        self.inner.properties.string(Property::Fragment)
    }

    fn host(&self) -> Option<&str> {
        self.inner.properties.string(Property::Host)
    }

    fn password(&self) -> Option<&str> {
        self.inner.properties.string(Property::Password)
    }

    fn path(&self) -> Option<&str> {
        self.inner.properties.string(Property::Path)
    }

    fn path_and_query(&self) -> Option<&str> {
        self.inner.properties.string(Property::PathAndQuery)
    }

    fn query(&self) -> Option<&str> {
        self.inner.properties.string(Property::Query)
    }

    fn raw_uri(&self) -> &str {
        self.inner
            .properties
            .string(Property::RawUri)
            .unwrap_or_default()
    }

    fn scheme_name(&self) -> Option<&str> {
        self.inner.properties.string(Property::SchemeName)
    }

    fn user_info(&self) -> Option<&str> {
        self.inner.properties.string(Property::UserInfo)
    }

    fn user_name(&self) -> Option<&str> {
        self.inner.properties.string(Property::UserName)
    }

    fn host_type(&self) -> HostType {
        self.inner.properties.host_type()
    }

    fn port(&self) -> Option<u16> {
        self.inner.properties.port()
    }

    fn scheme(&self) -> Scheme {
        self.inner.properties.scheme()
    }

    fn has_credentials(&self) -> bool {
        self.inner.components.user_info.is_some()
    }

    fn has_host(&self) -> bool {
        self.host().is_some()
    }

    fn has_query(&self) -> bool {
        self.inner.components.query.is_some()
    }

    fn has_fragment(&self) -> bool {
        self.inner.components.fragment.is_some()
    }
}

impl Uri {
    // Public API methods that delegate to UriBase trait implementation
    // This allows callers to use these methods without importing UriBase

    /// Full canonical URI, `None` for scheme-less input
    pub fn absolute_uri(&self) -> Option<&str> {
        <Self as UriBase>::absolute_uri(self)
    }

    /// `[userinfo@]host[:port]`
    pub fn authority(&self) -> Option<&str> {
        <Self as UriBase>::authority(self)
    }

    /// Canonical URI without user info
    pub fn display_uri(&self) -> Option<&str> {
        <Self as UriBase>::display_uri(self)
    }

    /// Last two labels of a DNS or IDN host
    pub fn domain(&self) -> Option<&str> {
        <Self as UriBase>::domain(self)
    }

    /// Suffix of the last path segment, dot included
    pub fn extension(&self) -> Option<&str> {
        <Self as UriBase>::extension(self)
    }

    /// Fragment with its `#`
    pub fn fragment(&self) -> Option<&str> {
        <Self as UriBase>::fragment(self)
    }

    pub fn host(&self) -> Option<&str> {
        <Self as UriBase>::host(self)
    }

    pub fn password(&self) -> Option<&str> {
        <Self as UriBase>::password(self)
    }

    pub fn path(&self) -> Option<&str> {
        <Self as UriBase>::path(self)
    }

    pub fn path_and_query(&self) -> Option<&str> {
        <Self as UriBase>::path_and_query(self)
    }

    /// Query with its `?`
    pub fn query(&self) -> Option<&str> {
        <Self as UriBase>::query(self)
    }

    /// Input text exactly as given
    pub fn raw_uri(&self) -> &str {
        <Self as UriBase>::raw_uri(self)
    }

    pub fn scheme_name(&self) -> Option<&str> {
        <Self as UriBase>::scheme_name(self)
    }

    pub fn user_info(&self) -> Option<&str> {
        <Self as UriBase>::user_info(self)
    }

    pub fn user_name(&self) -> Option<&str> {
        <Self as UriBase>::user_name(self)
    }

    pub fn host_type(&self) -> HostType {
        <Self as UriBase>::host_type(self)
    }

    /// Explicit port, or the scheme default
    pub fn port(&self) -> Option<u16> {
        <Self as UriBase>::port(self)
    }

    pub fn scheme(&self) -> Scheme {
        <Self as UriBase>::scheme(self)
    }

    /// Security zone of the URI.
    ///
    /// # Errors
    ///
    /// Always [`UriError::NotImplemented`].
    pub fn zone(&self) -> Result<u32> {
        self.property_u32(Property::Zone)
            .map(|zone| zone.unwrap_or(ZONE_INVALID))
    }

    pub fn has_credentials(&self) -> bool {
        <Self as UriBase>::has_credentials(self)
    }

    pub fn has_host(&self) -> bool {
        <Self as UriBase>::has_host(self)
    }

    pub fn has_query(&self) -> bool {
        <Self as UriBase>::has_query(self)
    }

    pub fn has_fragment(&self) -> bool {
        <Self as UriBase>::has_fragment(self)
    }
}

impl core::str::FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, CreateFlags::NONE)
    }
}

impl core::fmt::Display for Uri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_uri().unwrap_or_else(|| self.raw_uri()))
    }
}

/// Create a URI into an output slot.
///
/// The slot is reset to `None` first and only filled on success.
///
/// # Errors
///
/// - [`UriError::InvalidArgument`] if `out` is absent
/// - any error of [`Uri::create`]
pub fn create_uri(text: Option<&str>, flags: CreateFlags, out: Option<&mut Option<Uri>>) -> Result<()> {
    let out = out.ok_or(UriError::InvalidArgument)?;
    *out = None;
    *out = Some(Uri::create(text, flags)?);
    Ok(())
}
