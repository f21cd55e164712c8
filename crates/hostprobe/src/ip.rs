//! IP address literal detection.

use std::net::{IpAddr, Ipv6Addr};

/// Returns `true` if `s` is itself a valid IPv4 or IPv6 address.
///
/// Scoped IPv6 addresses (`fe80::1%eth0`) count as literals. Parse failures
/// are reported as `false`; this never errors.
pub fn is_ip_literal(s: &str) -> bool {
    parse_ip_literal(s).is_some()
}

/// Parse `s` as an IPv4 or IPv6 address literal.
///
/// A `%zone` suffix is accepted on IPv6 addresses and dropped from the
/// returned address. The zone must not be empty.
pub fn parse_ip_literal(s: &str) -> Option<IpAddr> {
    match s.split_once('%') {
        Some((addr, zone)) if !zone.is_empty() => addr.parse::<Ipv6Addr>().ok().map(IpAddr::V6),
        Some(_) => None,
        None => s.parse::<IpAddr>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_literals() {
        assert!(is_ip_literal("127.0.0.1"));
        assert!(is_ip_literal("255.255.255.255"));
        assert!(is_ip_literal("0.0.0.0"));
    }

    #[test]
    fn test_ipv6_literals() {
        assert!(is_ip_literal("::1"));
        assert!(is_ip_literal("2001:db8::1"));
        assert!(is_ip_literal("::ffff:10.0.0.1"));
    }

    #[test]
    fn test_scoped_ipv6_literals() {
        assert!(is_ip_literal("fe80::1%lo"));
        assert!(is_ip_literal("fe80::1%2"));
        assert_eq!(
            parse_ip_literal("fe80::1%eth0"),
            Some("fe80::1".parse::<IpAddr>().unwrap())
        );

        // zone ids only exist on IPv6, and must be named
        assert!(!is_ip_literal("fe80::1%"));
        assert!(!is_ip_literal("10.0.0.1%eth0"));
        assert!(!is_ip_literal("%eth0"));
    }

    #[test]
    fn test_rejects_non_literals() {
        for input in ["", "not.an.ip", "10.0.0", "999.999.999.999", "example.com", " 10.0.0.1", "[::1]", "10.0.0.0/8"] {
            assert!(!is_ip_literal(input), "{input:?} should not be an IP literal");
        }
    }

    #[test]
    fn test_parse_returns_address() {
        assert_eq!(
            parse_ip_literal("10.1.2.3"),
            Some(IpAddr::from([10, 1, 2, 3]))
        );
        assert_eq!(parse_ip_literal("localhost"), None);
    }
}
