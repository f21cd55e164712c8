//! Hostname classification with a memoized forward lookup.

use std::collections::HashMap;
use std::net::IpAddr;

use parking_lot::RwLock;

use crate::config::{CacheMode, IdentifierConfig};
use crate::error::Result;
use crate::ip;
use crate::resolver::{Resolver, SystemResolver};

/// Outcome of [`HostIdentifier::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// The string is itself an IPv4 or IPv6 address.
    IpLiteral(IpAddr),
    /// The string is a name that resolved to the given address.
    Fqdn(IpAddr),
    /// Neither a literal nor a resolvable name.
    Unresolvable,
}

/// Resolved addresses, keyed by the exact candidate string.
#[derive(Debug)]
enum AddressCache {
    PerName(HashMap<String, IpAddr>),
    LastOnly(Option<(String, IpAddr)>),
}

impl AddressCache {
    fn new(mode: CacheMode) -> Self {
        match mode {
            CacheMode::PerName => Self::PerName(HashMap::new()),
            CacheMode::LastOnly => Self::LastOnly(None),
        }
    }

    fn get(&self, host: &str) -> Option<IpAddr> {
        match self {
            Self::PerName(map) => map.get(host).copied(),
            Self::LastOnly(slot) => slot
                .as_ref()
                .filter(|(name, _)| name == host)
                .map(|(_, addr)| *addr),
        }
    }

    /// Store `addr` unless `host` already has an entry. Returns the entry
    /// that ends up cached.
    fn insert_if_absent(&mut self, host: &str, addr: IpAddr) -> IpAddr {
        if let Some(existing) = self.get(host) {
            return existing;
        }
        match self {
            Self::PerName(map) => {
                map.insert(host.to_string(), addr);
            }
            Self::LastOnly(slot) => *slot = Some((host.to_string(), addr)),
        }
        addr
    }

    fn len(&self) -> usize {
        match self {
            Self::PerName(map) => map.len(),
            Self::LastOnly(slot) => usize::from(slot.is_some()),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::PerName(map) => map.clear(),
            Self::LastOnly(slot) => *slot = None,
        }
    }
}

/// Classifies strings as IP literals or resolvable host names.
///
/// Successful lookups are cached per identifier: once a string has resolved,
/// later calls with the same string return the cached address without
/// contacting the resolver. Failed lookups are never cached. Candidate
/// strings are used exactly as given, so `"Example.com"` and `"example.com."`
/// are distinct keys.
///
/// # Example
///
/// ```
/// use std::net::IpAddr;
/// use hostprobe::HostIdentifier;
/// use hostprobe::resolver::StaticResolver;
///
/// let addr: IpAddr = "93.184.215.14".parse().unwrap();
/// let ids = HostIdentifier::new(StaticResolver::new().with_host("example.com", [addr]));
///
/// assert!(ids.is_fqdn("example.com"));
/// assert!(!ids.is_fqdn("127.0.0.1"));
/// assert!(!ids.is_fqdn("nonexistent.invalid.test"));
/// assert_eq!(ids.resolve("example.com").unwrap(), addr);
/// ```
#[derive(Debug)]
pub struct HostIdentifier<R = SystemResolver> {
    resolver: R,
    config: IdentifierConfig,
    cache: RwLock<AddressCache>,
}

impl HostIdentifier<SystemResolver> {
    /// Identifier backed by the operating system's resolver.
    pub fn system() -> Self {
        Self::new(SystemResolver::new())
    }
}

impl HostIdentifier<Box<dyn Resolver>> {
    /// Build the configured resolver and wrap it in an identifier.
    ///
    /// ```
    /// use hostprobe::{HostIdentifier, IdentifierConfig};
    ///
    /// let config = IdentifierConfig::from_toml_str(r#"resolver = "system""#)?;
    /// let ids = HostIdentifier::from_config(config)?;
    /// assert!(!ids.is_fqdn("10.0.0.1"));
    /// # Ok::<(), hostprobe::HostError>(())
    /// ```
    pub fn from_config(config: IdentifierConfig) -> Result<Self> {
        let resolver = config.resolver.build()?;
        Ok(Self::with_config(resolver, config))
    }

    /// Read a TOML configuration file and build an identifier from it.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::from_config(IdentifierConfig::load(path)?)
    }
}

impl Default for HostIdentifier<SystemResolver> {
    fn default() -> Self {
        Self::system()
    }
}

impl<R: Resolver> HostIdentifier<R> {
    /// Create an identifier with the default configuration.
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, IdentifierConfig::default())
    }

    /// Create an identifier with the given configuration.
    pub fn with_config(resolver: R, config: IdentifierConfig) -> Self {
        let cache = RwLock::new(AddressCache::new(config.cache));
        Self {
            resolver,
            config,
            cache,
        }
    }

    /// The resolver lookups are delegated to.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The identifier's configuration.
    pub fn config(&self) -> &IdentifierConfig {
        &self.config
    }

    /// Returns `true` if `host` is a valid IPv4 or IPv6 literal.
    pub fn is_ip_literal(&self, host: &str) -> bool {
        ip::is_ip_literal(host)
    }

    /// Resolve `host`, consulting the cache first.
    ///
    /// On a miss the resolver is queried, the configured address is picked
    /// from its answer and cached under `host`. Failures are returned as
    /// [`HostError::Resolution`](crate::HostError::Resolution) and are not
    /// cached.
    pub fn resolve(&self, host: &str) -> Result<IpAddr> {
        if let Some(addr) = self.cache.read().get(host) {
            tracing::trace!(target: "hostprobe::identifier", host, %addr, "cache hit");
            return Ok(addr);
        }

        let addrs = self.resolver.lookup(host).inspect_err(|e| {
            tracing::debug!(target: "hostprobe::identifier", host, error = %e, "lookup failed");
        })?;
        let addr = self.config.selection.pick(host, &addrs)?;

        let addr = self.cache.write().insert_if_absent(host, addr);
        tracing::debug!(
            target: "hostprobe::identifier",
            host,
            %addr,
            candidates = addrs.len(),
            "resolved"
        );
        Ok(addr)
    }

    /// Returns `true` if `host` resolves and is not itself an IP literal.
    ///
    /// Resolution failures yield `false`. A successful lookup is cached as
    /// a side effect, exactly as if [`resolve`](Self::resolve) had been called.
    pub fn is_fqdn(&self, host: &str) -> bool {
        if self.resolve(host).is_err() {
            return false;
        }
        !self.is_ip_literal(host)
    }

    /// Classify `host` in one call.
    ///
    /// IP literals are recognised without contacting the resolver.
    pub fn classify(&self, host: &str) -> HostKind {
        if let Some(addr) = ip::parse_ip_literal(host) {
            return HostKind::IpLiteral(addr);
        }
        match self.resolve(host) {
            Ok(addr) => HostKind::Fqdn(addr),
            Err(_) => HostKind::Unresolvable,
        }
    }

    /// The cached address for `host`, without resolving.
    pub fn cached(&self, host: &str) -> Option<IpAddr> {
        self.cache.read().get(host)
    }

    /// Number of cached entries.
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Forget every cached address.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }
}
