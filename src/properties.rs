use crate::compat::{String, ToString};
use crate::flags::CreateFlags;
use crate::types::{HostType, Policy, Property, Scheme};
use crate::uri_components::{UriComponents, UserInfo};

/// Every property of a URI, computed once at creation.
///
/// String slots are indexed by property id; `None` means not applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCache {
    strings: [Option<String>; 15],
    host_type: HostType,
    port: Option<u16>,
    scheme: Scheme,
}

impl PropertyCache {
    pub fn build(raw: &str, components: &UriComponents, flags: CreateFlags) -> Self {
        let display = if flags.contains(CreateFlags::FILE_USE_DOS_PATH) && components.dos_path {
            components.dos_display()
        } else {
            components
                .serialize(false)
                .unwrap_or_else(|| components.relative_text())
        };
        let user_info = components.user_info.as_ref();
        let non_empty = |text: String| (!text.is_empty()).then_some(text);

        let strings = [
            components.serialize(true),
            components.authority(true),
            Some(display),
            components.domain().map(ToString::to_string),
            components.extension().map(ToString::to_string),
            components.fragment.clone(),
            components
                .host
                .as_ref()
                .map(|host| host.text.clone())
                .and_then(non_empty),
            user_info.and_then(|info| info.password.clone()),
            non_empty(components.path.clone()),
            non_empty(components.path_and_query()),
            components.query.clone(),
            Some(raw.to_string()),
            components.scheme_name.clone(),
            user_info.map(UserInfo::to_text),
            user_info.map(|info| info.user.clone()),
        ];

        let port = match components.policy {
            Policy::Opaque => components.scheme.default_port(),
            Policy::Hierarchical | Policy::File => components.effective_port(),
        };

        Self {
            strings,
            host_type: components.host_type(),
            port,
            scheme: components.scheme,
        }
    }

    /// Cached text of a string property; `None` for numeric ids too
    pub fn string(&self, property: Property) -> Option<&str> {
        self.strings.get(property.id() as usize)?.as_deref()
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }
}
