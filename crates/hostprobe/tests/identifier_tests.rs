//! Host classification tests.

use std::net::IpAddr;
use std::sync::Arc;
use std::thread;

use hostprobe::resolver::{Resolver, StaticResolver, SystemResolver};
use hostprobe::{AddressSelection, HostIdentifier, HostKind, IdentifierConfig, is_ip_literal};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn addr(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn example_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_host("example.com", [addr("93.184.215.14")])
        .with_host(
            "four.example",
            [
                addr("192.0.2.1"),
                addr("192.0.2.2"),
                addr("192.0.2.3"),
                addr("192.0.2.4"),
            ],
        )
}

#[test]
fn test_ip_literal_examples() {
    for input in ["127.0.0.1", "255.255.255.255", "::1", "2001:db8::1"] {
        assert!(is_ip_literal(input), "{input} should be a literal");
    }
    for input in ["", "not.an.ip", "10.0.0", "999.999.999.999"] {
        assert!(!is_ip_literal(input), "{input:?} should not be a literal");
    }
}

#[test]
fn test_is_fqdn_examples() {
    init_tracing();
    let ids = HostIdentifier::new(example_resolver());

    assert!(!ids.is_fqdn("127.0.0.1"));
    assert!(!ids.is_fqdn("nonexistent.invalid.test"));
    assert!(ids.is_fqdn("example.com"));
}

#[test]
fn test_successful_resolve_hits_resolver_once() {
    init_tracing();
    let ids = HostIdentifier::new(example_resolver());

    let first = ids.resolve("example.com").unwrap();
    let second = ids.resolve("example.com").unwrap();

    assert_eq!(first, second);
    assert_eq!(ids.resolver().lookups_for("example.com"), 1);
}

#[test]
fn test_failed_resolve_hits_resolver_every_time() {
    let ids = HostIdentifier::new(example_resolver());

    assert!(ids.resolve("nonexistent.invalid.test").is_err());
    assert!(ids.resolve("nonexistent.invalid.test").is_err());
    assert_eq!(ids.resolver().lookups_for("nonexistent.invalid.test"), 2);
}

#[test]
fn test_is_fqdn_populates_cache() {
    let ids = HostIdentifier::new(example_resolver());

    assert!(ids.is_fqdn("example.com"));
    assert_eq!(ids.cached("example.com"), Some(addr("93.184.215.14")));

    ids.resolve("example.com").unwrap();
    assert_eq!(ids.resolver().lookups(), 1);
}

#[test]
fn test_legacy_selection_takes_fourth_address() {
    let ids = HostIdentifier::with_config(
        example_resolver(),
        IdentifierConfig::default().selection(AddressSelection::LEGACY),
    );

    assert_eq!(ids.resolve("four.example").unwrap(), addr("192.0.2.4"));
    assert!(ids.resolve("example.com").is_err());
}

#[test]
fn test_legacy_config_forgets_previous_name() {
    let ids = HostIdentifier::with_config(
        StaticResolver::new()
            .with_host("a.example", [addr("10.0.0.1"), addr("10.0.0.2"), addr("10.0.0.3"), addr("10.0.0.4")])
            .with_host("b.example", [addr("10.0.1.1"), addr("10.0.1.2"), addr("10.0.1.3"), addr("10.0.1.4")]),
        IdentifierConfig::legacy(),
    );

    assert_eq!(ids.resolve("a.example").unwrap(), addr("10.0.0.4"));
    assert_eq!(ids.resolve("b.example").unwrap(), addr("10.0.1.4"));
    assert_eq!(ids.resolve("a.example").unwrap(), addr("10.0.0.4"));
    assert_eq!(ids.resolver().lookups_for("a.example"), 2);
}

#[test]
fn test_concurrent_resolve_agrees() {
    let ids = Arc::new(HostIdentifier::new(example_resolver()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ids = Arc::clone(&ids);
            thread::spawn(move || ids.resolve("example.com").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), addr("93.184.215.14"));
    }
    assert_eq!(ids.cache_len(), 1);
    assert!(ids.resolver().lookups_for("example.com") >= 1);
}

#[test]
fn test_shared_resolver_between_identifiers() {
    let resolver = Arc::new(example_resolver());
    let a = HostIdentifier::new(Arc::clone(&resolver));
    let b = HostIdentifier::new(Arc::clone(&resolver));

    a.resolve("example.com").unwrap();
    b.resolve("example.com").unwrap();

    // caches are per identifier
    assert_eq!(resolver.lookups_for("example.com"), 2);
}

#[test]
fn test_dyn_resolver() {
    let resolver: Box<dyn Resolver> = Box::new(example_resolver());
    let ids = HostIdentifier::new(resolver);
    assert_eq!(ids.classify("example.com"), HostKind::Fqdn(addr("93.184.215.14")));
}

#[test]
fn test_system_identifier_localhost() {
    init_tracing();
    let ids = HostIdentifier::new(SystemResolver::new());

    let resolved = ids.resolve("localhost").expect("localhost should resolve");
    assert!(resolved.is_loopback());
    assert!(ids.is_fqdn("localhost"));
    assert!(!ids.is_fqdn("127.0.0.1"));
}

#[test]
fn test_system_identifier_scoped_ipv6() {
    let ids = HostIdentifier::new(SystemResolver::new());

    assert!(is_ip_literal("fe80::1%lo"));
    assert!(!ids.is_fqdn("fe80::1%lo"));
    assert_eq!(ids.classify("fe80::1%lo"), HostKind::IpLiteral(addr("fe80::1")));
}
