#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod flags;
mod helpers;
mod ipv4;
mod ipv6;
mod parser;
mod properties;
mod scheme;
mod types;
mod unicode;
mod uri;
mod uri_base;
#[doc(hidden)]
pub use uri_base::UriBase;
mod uri_components;

// Public API
pub use error::{Result, UriError};
pub use flags::CreateFlags;
pub use types::{HostType, Policy, Property, Scheme, Status};
pub use uri::{Uri, ZONE_INVALID, create_uri};
