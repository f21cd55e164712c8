//! DNS resolver settings.
//!
//! These map onto hickory's `ResolverConfig`/`ResolverOpts` and are usually
//! read from the `[resolver.dns]` table of an identifier configuration:
//!
//! ```toml
//! [resolver.dns]
//! nameservers = ["9.9.9.9:53", "149.112.112.112:53"]
//! ip_strategy = "prefer_v6"
//! timeout = 2
//!
//! [resolver.dns.cache]
//! entries = 64
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for a [`DnsResolver`](super::DnsResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsConfig {
    /// Nameservers queried over UDP and TCP. Empty means the platform
    /// configuration (`/etc/resolv.conf` on Unix).
    pub nameservers: Vec<SocketAddr>,
    /// Answer from the hosts file before asking nameservers.
    pub hosts_file: bool,
    /// Address families to look up.
    pub ip_strategy: IpStrategy,
    /// Attempts per lookup, at least one.
    pub attempts: usize,
    /// Timeout for each attempt, in seconds in configuration files.
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Limits on hickory's own answer cache.
    pub cache: CacheLimits,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            hosts_file: true,
            ip_strategy: IpStrategy::default(),
            attempts: 2,
            timeout: Duration::from_secs(5),
            cache: CacheLimits::default(),
        }
    }
}

impl DnsConfig {
    /// Use the platform's nameservers.
    pub fn system() -> Self {
        Self::default()
    }

    /// Query the given nameservers instead of the platform's.
    pub fn with_nameservers(nameservers: impl IntoIterator<Item = SocketAddr>) -> Self {
        Self {
            nameservers: nameservers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Query a well-known public resolver.
    pub fn public(provider: PublicDns) -> Self {
        Self::with_nameservers(provider.nameservers())
    }

    /// Whether the platform configuration supplies the nameservers.
    pub fn uses_system_nameservers(&self) -> bool {
        self.nameservers.is_empty()
    }

    /// Add one nameserver.
    pub fn nameserver(mut self, addr: SocketAddr) -> Self {
        self.nameservers.push(addr);
        self
    }

    pub fn hosts_file(mut self, enabled: bool) -> Self {
        self.hosts_file = enabled;
        self
    }

    pub fn ip_strategy(mut self, strategy: IpStrategy) -> Self {
        self.ip_strategy = strategy;
        self
    }

    pub fn attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cache(mut self, cache: CacheLimits) -> Self {
        self.cache = cache;
        self
    }
}

/// Bounds on hickory's internal answer cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheLimits {
    /// Maximum number of cached answers.
    pub entries: usize,
    /// TTL cap for positive answers.
    #[serde(with = "duration_secs")]
    pub max_positive_ttl: Duration,
    /// TTL cap for NXDOMAIN and other negative answers.
    #[serde(with = "duration_secs")]
    pub max_negative_ttl: Duration,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            entries: 256,
            max_positive_ttl: Duration::from_secs(24 * 60 * 60),
            max_negative_ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// Public resolvers with fixed anycast addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicDns {
    Google,
    Cloudflare,
    Quad9,
}

impl PublicDns {
    /// The provider's IPv4 nameservers on port 53.
    pub fn nameservers(self) -> [SocketAddr; 2] {
        let [a, b] = match self {
            Self::Google => [Ipv4Addr::new(8, 8, 8, 8), Ipv4Addr::new(8, 8, 4, 4)],
            Self::Cloudflare => [Ipv4Addr::new(1, 1, 1, 1), Ipv4Addr::new(1, 0, 0, 1)],
            Self::Quad9 => [Ipv4Addr::new(9, 9, 9, 9), Ipv4Addr::new(149, 112, 112, 112)],
        };
        [SocketAddr::from((a, 53)), SocketAddr::from((b, 53))]
    }
}

/// Which address families a lookup asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpStrategy {
    /// A records only.
    V4Only,
    /// AAAA records only.
    V6Only,
    /// A first, AAAA if there are none.
    #[default]
    PreferV4,
    /// AAAA first, A if there are none.
    PreferV6,
    /// A and AAAA queried together.
    Both,
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
