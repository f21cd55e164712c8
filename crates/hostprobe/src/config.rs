//! Identifier configuration.
//!
//! A [`HostIdentifier`](crate::HostIdentifier) is configured with the
//! resolver it asks, which of the resolver's addresses becomes the canonical
//! one, and how many lookups it remembers. All of it can be set in code or
//! loaded from TOML:
//!
//! ```toml
//! selection = "first"     # or { nth = 3 }
//! cache = "per_name"      # or "last_only"
//! resolver = "system"     # or a [resolver.dns] table
//! ```

use std::net::IpAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};
use crate::resolver::ResolverChoice;

/// Which address of a lookup result is kept as the resolved address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressSelection {
    /// The first address the resolver returned. This is also what the
    /// historical `gethostbyname(...)[3]` idiom yielded, since index 3 of
    /// its `[name, aliases, family, address, ...]` result is the first address.
    #[default]
    First,
    /// The zero-based `n`th address. Lookups returning fewer addresses
    /// fail with a resolution error.
    Nth(usize),
}

impl AddressSelection {
    /// The fourth address of the list, taking the "index 3" rule literally
    /// against an address-only list. Lookups with fewer than four addresses
    /// fail.
    pub const LEGACY: Self = Self::Nth(3);

    /// Pick the configured address out of `addrs`.
    pub fn pick(self, host: &str, addrs: &[IpAddr]) -> Result<IpAddr> {
        let index = match self {
            Self::First => 0,
            Self::Nth(n) => n,
        };
        addrs.get(index).copied().ok_or_else(|| {
            HostError::resolution(
                host,
                format!("no address at index {index} ({} returned)", addrs.len()),
            )
        })
    }
}

/// How resolved addresses are remembered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// One entry per distinct host string, kept for the identifier's lifetime.
    #[default]
    PerName,
    /// Only the most recent successful lookup is kept.
    LastOnly,
}

/// Configuration for a [`HostIdentifier`](crate::HostIdentifier).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Address selection policy.
    pub selection: AddressSelection,
    /// Cache policy.
    pub cache: CacheMode,
    /// Resolver used by [`HostIdentifier::from_config`](crate::HostIdentifier::from_config).
    pub resolver: ResolverChoice,
}

impl IdentifierConfig {
    /// Literal fixed-index selection ([`AddressSelection::LEGACY`]) with the
    /// single-slot memo of the old string helpers.
    pub fn legacy() -> Self {
        Self {
            selection: AddressSelection::LEGACY,
            cache: CacheMode::LastOnly,
            resolver: ResolverChoice::System,
        }
    }

    /// Set the address selection policy.
    pub fn selection(mut self, selection: AddressSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Set the cache policy.
    pub fn cache(mut self, cache: CacheMode) -> Self {
        self.cache = cache;
        self
    }

    /// Set the resolver.
    pub fn resolver(mut self, resolver: ResolverChoice) -> Self {
        self.resolver = resolver;
        self
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| HostError::io(path, &e))?;
        Self::from_toml_str(&text)
    }

    /// Serialize this configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
