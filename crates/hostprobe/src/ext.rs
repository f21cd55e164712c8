//! Extension methods on `str`.
//!
//! Import [`HostStrExt`] to call the helpers as methods:
//!
//! ```no_run
//! use hostprobe::HostStrExt;
//!
//! assert_eq!("hi".hexify(), "6869");
//! assert!("10.1.1.1".is_ip_addr());
//! let is_name = "localhost".is_fqdn();
//! ```

use std::net::IpAddr;
use std::sync::OnceLock;

use crate::error::Result;
use crate::identifier::HostIdentifier;
use crate::{hex, ip};

/// Process-wide identifier used by [`HostStrExt::is_fqdn`] and
/// [`HostStrExt::resolve_fqdn`].
static SHARED_IDENTIFIER: OnceLock<HostIdentifier> = OnceLock::new();

/// The identifier shared by the `str` extension methods, created on first use.
pub fn shared_identifier() -> &'static HostIdentifier {
    SHARED_IDENTIFIER.get_or_init(HostIdentifier::system)
}

/// Host and hex helpers as methods on string slices.
pub trait HostStrExt {
    /// Hex-encode the UTF-8 bytes of the string.
    fn hexify(&self) -> String;

    /// Decode the string as hex digits.
    fn unhexify(&self) -> Result<Vec<u8>>;

    /// Whether the string is an IPv4 or IPv6 literal.
    fn is_ip_addr(&self) -> bool;

    /// Resolve through the shared system-backed identifier.
    fn resolve_fqdn(&self) -> Result<IpAddr>;

    /// Whether the string resolves through the shared identifier and is not
    /// an IP literal.
    fn is_fqdn(&self) -> bool;
}

impl HostStrExt for str {
    fn hexify(&self) -> String {
        hex::encode(self)
    }

    fn unhexify(&self) -> Result<Vec<u8>> {
        hex::decode(self)
    }

    fn is_ip_addr(&self) -> bool {
        ip::is_ip_literal(self)
    }

    fn resolve_fqdn(&self) -> Result<IpAddr> {
        shared_identifier().resolve(self)
    }

    fn is_fqdn(&self) -> bool {
        shared_identifier().is_fqdn(self)
    }
}
