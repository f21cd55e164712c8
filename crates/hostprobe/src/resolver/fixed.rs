//! In-memory resolver with a fixed host table.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::{HostError, Result};
use crate::resolver::Resolver;

/// Resolver that answers from a fixed name → addresses table.
///
/// Every call to [`Resolver::lookup`] is counted, including failed ones,
/// which makes it easy to check how often a caller actually hit the
/// resolver.
///
/// ```
/// use std::net::IpAddr;
/// use hostprobe::resolver::{Resolver, StaticResolver};
///
/// let addr: IpAddr = "192.0.2.10".parse().unwrap();
/// let resolver = StaticResolver::new().with_host("app.example", [addr]);
///
/// assert_eq!(resolver.lookup("app.example").unwrap(), vec![addr]);
/// assert!(resolver.lookup("other.example").is_err());
/// assert_eq!(resolver.lookups(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
    total: AtomicUsize,
    per_host: Mutex<HashMap<String, usize>>,
}

impl StaticResolver {
    /// Create an empty table. Every lookup fails until hosts are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the addresses for `host`.
    ///
    /// An empty address list is kept and makes lookups of `host` fail the
    /// same way an unknown name does.
    pub fn with_host(
        mut self,
        host: impl Into<String>,
        addrs: impl IntoIterator<Item = IpAddr>,
    ) -> Self {
        self.hosts.insert(host.into(), addrs.into_iter().collect());
        self
    }

    /// Total number of lookups performed.
    pub fn lookups(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    /// Number of lookups performed for `host`.
    pub fn lookups_for(&self, host: &str) -> usize {
        self.per_host.lock().get(host).copied().unwrap_or(0)
    }
}

impl Resolver for StaticResolver {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        self.total.fetch_add(1, Ordering::SeqCst);
        *self.per_host.lock().entry(host.to_string()).or_insert(0) += 1;

        match self.hosts.get(host) {
            Some(addrs) if !addrs.is_empty() => Ok(addrs.clone()),
            _ => Err(HostError::resolution(host, "host not found")),
        }
    }
}
