//! hickory-resolver backed lookups.

use std::net::IpAddr;

use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfig, ResolveHosts, ResolverConfig, ResolverOpts,
};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::{Resolver as HickoryResolver, TokioResolver};
use tokio::runtime::Runtime;

use crate::error::{HostError, Result};
use crate::resolver::Resolver;
use crate::resolver::config::{DnsConfig, IpStrategy, PublicDns};

/// DNS resolver with its own nameservers, cache and timeouts.
///
/// Wraps hickory-resolver and drives it on a private single-threaded tokio
/// runtime, so lookups block the caller like [`SystemResolver`] does.
/// Because of that, [`Resolver::lookup`] must not be called from inside an
/// async task running on another tokio runtime.
///
/// [`SystemResolver`]: super::SystemResolver
///
/// # Example
///
/// ```no_run
/// use hostprobe::resolver::{DnsResolver, PublicDns, Resolver};
///
/// let resolver = DnsResolver::public(PublicDns::Cloudflare)?;
/// let addresses = resolver.lookup("example.com")?;
/// # Ok::<(), hostprobe::HostError>(())
/// ```
pub struct DnsResolver {
    resolver: TokioResolver,
    runtime: Runtime,
}

impl std::fmt::Debug for DnsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsResolver").finish_non_exhaustive()
    }
}

impl DnsResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: DnsConfig) -> Result<Self> {
        let (resolver_config, resolver_opts) = build_resolver_config(&config)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| HostError::config(format!("failed to start DNS runtime: {e}")))?;

        let resolver = {
            let _guard = runtime.enter();
            HickoryResolver::builder_with_config(resolver_config, TokioConnectionProvider::default())
                .with_options(resolver_opts)
                .build()
        };

        tracing::debug!(
            target: "hostprobe::resolver",
            system = config.uses_system_nameservers(),
            nameservers = config.nameservers.len(),
            "created DNS resolver"
        );

        Ok(Self { resolver, runtime })
    }

    /// Create a resolver using the platform's nameservers.
    pub fn system() -> Result<Self> {
        Self::new(DnsConfig::system())
    }

    /// Create a resolver querying a public provider.
    pub fn public(provider: PublicDns) -> Result<Self> {
        Self::new(DnsConfig::public(provider))
    }

    /// Drop every entry from hickory's internal cache.
    pub fn clear_cache(&self) {
        self.resolver.clear_cache();
    }
}

impl Resolver for DnsResolver {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        let response = self
            .runtime
            .block_on(self.resolver.lookup_ip(host))
            .map_err(|e| HostError::resolution(host, e.to_string()))?;

        let addresses: Vec<IpAddr> = response.iter().collect();
        if addresses.is_empty() {
            return Err(HostError::resolution(host, "no addresses found"));
        }

        tracing::trace!(target: "hostprobe::resolver", host, count = addresses.len(), "DNS lookup");
        Ok(addresses)
    }
}

/// Translate a [`DnsConfig`] into hickory's configuration and options.
fn build_resolver_config(config: &DnsConfig) -> Result<(ResolverConfig, ResolverOpts)> {
    if config.attempts == 0 {
        return Err(HostError::config("DNS attempts must be at least 1"));
    }
    if config.timeout.is_zero() {
        return Err(HostError::config("DNS timeout must be non-zero"));
    }

    let (resolver_config, mut opts) = if config.uses_system_nameservers() {
        hickory_resolver::system_conf::read_system_conf()
            .map_err(|e| HostError::config(format!("failed to read system DNS config: {e}")))?
    } else {
        let mut resolver_config = ResolverConfig::new();
        for addr in &config.nameservers {
            resolver_config.add_name_server(NameServerConfig::new(*addr, Protocol::Udp));
            resolver_config.add_name_server(NameServerConfig::new(*addr, Protocol::Tcp));
        }
        (resolver_config, ResolverOpts::default())
    };

    opts.cache_size = config.cache.entries;
    opts.positive_max_ttl = Some(config.cache.max_positive_ttl);
    opts.negative_max_ttl = Some(config.cache.max_negative_ttl);
    opts.use_hosts_file = if config.hosts_file {
        ResolveHosts::Auto
    } else {
        ResolveHosts::Never
    };
    opts.attempts = config.attempts;
    opts.timeout = config.timeout;
    opts.ip_strategy = match config.ip_strategy {
        IpStrategy::V4Only => LookupIpStrategy::Ipv4Only,
        IpStrategy::V6Only => LookupIpStrategy::Ipv6Only,
        IpStrategy::PreferV4 => LookupIpStrategy::Ipv4thenIpv6,
        IpStrategy::PreferV6 => LookupIpStrategy::Ipv6thenIpv4,
        IpStrategy::Both => LookupIpStrategy::Ipv4AndIpv6,
    };

    Ok((resolver_config, opts))
}
