//! Name resolution backends.
//!
//! [`HostIdentifier`](crate::HostIdentifier) does not talk to DNS itself; it
//! delegates to a [`Resolver`]. Three implementations ship with the crate:
//!
//! - [`SystemResolver`]: the operating system's resolver (`getaddrinfo`),
//!   honouring `/etc/hosts`, `nsswitch.conf` and friends.
//! - [`DnsResolver`]: a hickory-resolver client with its own nameserver,
//!   cache and timeout settings (feature `hickory`, on by default).
//! - [`StaticResolver`]: a fixed in-memory table, handy in tests.
//!
//! # Example
//!
//! ```no_run
//! use hostprobe::resolver::{Resolver, SystemResolver};
//!
//! let addrs = SystemResolver::new().lookup("localhost")?;
//! println!("localhost -> {:?}", addrs);
//! # Ok::<(), hostprobe::HostError>(())
//! ```

#[cfg(feature = "hickory")]
mod config;
#[cfg(feature = "hickory")]
mod dns;
mod fixed;

use std::net::{IpAddr, ToSocketAddrs};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};

#[cfg(feature = "hickory")]
pub use config::{CacheLimits, DnsConfig, IpStrategy, PublicDns};
#[cfg(feature = "hickory")]
pub use dns::DnsResolver;
pub use fixed::StaticResolver;

/// A forward name-resolution capability.
///
/// Implementations return every address they found for `host`, in the
/// order the underlying facility produced them. A lookup that finds nothing
/// is an error, never an empty list.
pub trait Resolver: Send + Sync {
    /// Resolve `host` to an ordered list of addresses.
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        (**self).lookup(host)
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        (**self).lookup(host)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        (**self).lookup(host)
    }
}

/// Which resolver an identifier built from configuration uses.
///
/// In TOML this is either `resolver = "system"` or a `[resolver.dns]` table
/// holding a [`DnsConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverChoice {
    /// [`SystemResolver`].
    #[default]
    System,
    /// [`DnsResolver`] with the given settings.
    #[cfg(feature = "hickory")]
    Dns(DnsConfig),
}

impl ResolverChoice {
    /// Construct the chosen resolver.
    pub fn build(&self) -> Result<Box<dyn Resolver>> {
        match self {
            Self::System => Ok(Box::new(SystemResolver::new())),
            #[cfg(feature = "hickory")]
            Self::Dns(config) => Ok(Box::new(DnsResolver::new(config.clone())?)),
        }
    }
}

/// Resolver backed by the operating system's name service.
///
/// Blocks the calling thread for as long as the system lookup takes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Create a system resolver.
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for SystemResolver {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        // to_socket_addrs wants a port; it plays no part in the lookup
        let addrs: Vec<IpAddr> = (host, 0)
            .to_socket_addrs()
            .map_err(|e| HostError::resolution(host, e.to_string()))?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(HostError::resolution(host, "no addresses found"));
        }

        tracing::trace!(target: "hostprobe::resolver", host, count = addrs.len(), "system lookup");
        Ok(addrs)
    }
}
