//! Hostname classification helpers.
//!
//! This crate answers a few small questions about strings that are supposed
//! to name a host:
//!
//! - **IP literals**: is the string itself an IPv4/IPv6 address?
//! - **FQDNs**: does the string resolve through DNS, without being a bare
//!   address?
//! - **Hex**: lowercase hex encoding and strict decoding.
//!
//! # Classifying hosts
//!
//! [`HostIdentifier`] delegates lookups to a [`Resolver`](resolver::Resolver)
//! and memoizes successful answers:
//!
//! ```no_run
//! use hostprobe::{HostIdentifier, HostKind};
//!
//! let ids = HostIdentifier::system();
//!
//! assert!(ids.is_ip_literal("2001:db8::1"));
//! assert!(!ids.is_fqdn("127.0.0.1"));
//!
//! match ids.classify("example.com") {
//!     HostKind::Fqdn(addr) => println!("example.com -> {addr}"),
//!     HostKind::IpLiteral(addr) => println!("literal {addr}"),
//!     HostKind::Unresolvable => println!("no such host"),
//! }
//! ```
//!
//! # Resolvers
//!
//! - [`SystemResolver`](resolver::SystemResolver) uses the operating system.
//! - [`DnsResolver`](resolver::DnsResolver) uses hickory-resolver with
//!   explicit nameservers and timeouts (feature `hickory`).
//! - [`StaticResolver`](resolver::StaticResolver) answers from a fixed table.
//!
//! # Configuration
//!
//! ```
//! use hostprobe::{AddressSelection, CacheMode, IdentifierConfig};
//!
//! let config = IdentifierConfig::from_toml_str(r#"
//! selection = { nth = 3 }
//! cache = "last_only"
//! "#)?;
//! assert_eq!(config.selection, AddressSelection::LEGACY);
//! assert_eq!(config.cache, CacheMode::LastOnly);
//! # Ok::<(), hostprobe::HostError>(())
//! ```
//!
//! # Logging
//!
//! Lookups are instrumented with `tracing` under the `hostprobe::identifier`
//! and `hostprobe::resolver` targets. Install a subscriber in your
//! application to see them.

mod config;
mod error;
mod ext;
pub mod hex;
mod identifier;
pub mod ip;
pub mod resolver;

pub use config::{AddressSelection, CacheMode, IdentifierConfig};
pub use error::{HostError, Result};
pub use ext::{HostStrExt, shared_identifier};
pub use identifier::{HostIdentifier, HostKind};
pub use ip::is_ip_literal;
