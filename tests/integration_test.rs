//! Integration tests for netcidr
//!
//! These tests exercise the public API end to end: parse, format, sort,
//! containment, and the documented rejection behavior.

use netcidr::{Address, Error, Family};

#[test]
fn test_round_trip_canonical_text() {
    // format(parse(t)) == t, including the `/` suffix presence rules.
    let host_texts = [
        "0.0.0.0",
        "192.0.2.1",
        "255.255.255.255",
        "192.0.2.1/24",
        "::",
        "::1",
        "2001:db8::1",
        "fe80::1",
        "2001:db8::1/64",
    ];
    for text in host_texts {
        let addr = Address::host(text).unwrap();
        assert_eq!(addr.format(false).unwrap(), text, "host round trip");
        assert_eq!(addr.to_string(), text);
    }

    let network_texts = [
        "0.0.0.0/0",
        "10.0.0.0/8",
        "192.0.2.0/24",
        "192.0.2.1/32",
        "::/0",
        "2001:db8::/32",
        "2001:db8::1/128",
    ];
    for text in network_texts {
        let addr = Address::network(text).unwrap();
        assert_eq!(addr.format(true).unwrap(), text, "network round trip");
        assert_eq!(addr.to_string(), text);
    }
}

#[test]
fn test_network_text_always_carries_mask() {
    // A full-width network block keeps its suffix; the same text as a host
    // value drops it.
    let net = Address::network("10.0.0.1/32").unwrap();
    assert_eq!(net.to_string(), "10.0.0.1/32");
    let host = Address::host("10.0.0.1/32").unwrap();
    assert_eq!(host.to_string(), "10.0.0.1");
}

#[test]
fn test_sorted_order() {
    let mut subnets = vec![
        Address::network("2001:db8::/32").unwrap(),
        Address::host("10.0.0.1").unwrap(),
        Address::network("10.1.0.0/16").unwrap(),
        Address::host("192.0.2.1").unwrap(),
        Address::network("10.0.0.0/8").unwrap(),
        Address::network("192.0.2.0/24").unwrap(),
        Address::host("2001:db8::1").unwrap(),
        Address::network("0.0.0.0/0").unwrap(),
    ];
    subnets.sort();

    let sorted: Vec<String> = subnets.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        sorted,
        [
            "0.0.0.0/0",
            "10.0.0.0/8",
            "10.0.0.1",
            "10.1.0.0/16",
            "192.0.2.0/24",
            "192.0.2.1",
            "2001:db8::/32",
            "2001:db8::1",
        ]
    );

    // All IPv4 values sort before all IPv6 values.
    let first_v6 = subnets.iter().position(|s| s.family() == Family::Ipv6).unwrap();
    assert!(subnets[..first_v6].iter().all(|s| s.family() == Family::Ipv4));
    assert!(subnets[first_v6..].iter().all(|s| s.family() == Family::Ipv6));
}

#[test]
fn test_abbreviated_network_input_canonicalizes() {
    // Network input may leave off trailing zero octets; the canonical text
    // always spells out the full quad.
    let pairs = [
        ("10/8", "10.0.0.0/8"),
        ("10.1/16", "10.1.0.0/16"),
        ("192.0.2/24", "192.0.2.0/24"),
    ];
    for (short, canonical) in pairs {
        let net = Address::network(short).unwrap();
        assert_eq!(net.to_string(), canonical);
        assert_eq!(net.format(true).unwrap(), canonical);
    }

    // Host input gets no abbreviation.
    assert!(matches!(
        Address::host("10/8").unwrap_err(),
        Error::AddressFormat { .. }
    ));
}

#[test]
fn test_cidr_rejection() {
    let err = Address::network("192.0.2.1/24").unwrap_err();
    assert!(matches!(err, Error::CidrFormat { bits: 24, .. }));
    assert!(Address::network("192.0.2.0/24").is_ok());
}

#[test]
fn test_bad_address_rejection() {
    let err = Address::host("bad.address").unwrap_err();
    assert!(matches!(err, Error::AddressFormat { .. }));
}

#[test]
fn test_family_detection_is_colon_heuristic() {
    // Any colon selects the IPv6 parser, even in otherwise malformed input;
    // such input is rejected as IPv6, never retried as IPv4. Downstream
    // consumers depend on this exact rejection behavior.
    let err = Address::host("bad:address").unwrap_err();
    assert!(matches!(err, Error::AddressFormat { .. }));
    let err = Address::host("192.0.2.1:8080").unwrap_err();
    assert!(matches!(err, Error::AddressFormat { .. }));
}

#[test]
fn test_compare_scenarios() {
    // Network parts differ at bit 9.
    let a = Address::network("10.0.0.0/8").unwrap();
    let b = Address::network("10.1.0.0/16").unwrap();
    assert!(a < b);

    // Equal network bits over 24, then prefix length decides.
    let net = Address::network("192.0.2.0/24").unwrap();
    let host = Address::host("192.0.2.1/32").unwrap();
    assert!(net < host);
}

#[test]
fn test_containment_scenarios() {
    let inner = Address::network("10.1.2.0/24").unwrap();
    let outer = Address::network("10.1.0.0/16").unwrap();
    assert!(inner.is_proper_subnet_of(&outer));
    assert!(outer.is_proper_supernet_of(&inner));
    assert!(!outer.is_proper_subnet_of(&inner));
}

#[test]
fn test_inclusion_consistency() {
    let pairs = [
        ("10.1.2.0/24", "10.1.0.0/16"),
        ("10.1.0.0/16", "10.1.0.0/16"),
        ("10.1.0.0/16", "10.2.0.0/16"),
        ("2001:db8:1::/48", "2001:db8::/32"),
    ];
    for (a, b) in pairs {
        let a = Address::network(a).unwrap();
        let b = Address::network(b).unwrap();
        assert_eq!(
            a.is_subnet_of_or_equal(&b),
            a.is_proper_subnet_of(&b) || a == b,
            "subnet-or-equal must split into proper-subnet or equal for {} vs {}",
            a,
            b
        );
        assert_eq!(
            b.is_supernet_of_or_equal(&a),
            b.is_proper_supernet_of(&a) || a == b,
        );
        // Mirror images.
        assert_eq!(a.is_proper_subnet_of(&b), b.is_proper_supernet_of(&a));
    }
}

#[test]
fn test_parsed_fields() {
    let net = Address::network("10.0.0.0/8").unwrap();
    assert_eq!(net.family(), Family::Ipv4);
    assert_eq!(net.prefix_len(), 8);
    assert_eq!(net.octets(), &[10, 0, 0, 0]);
}

#[test]
fn test_serde_json_round_trip() {
    let nets = vec![
        Address::network("10.0.0.0/8").unwrap(),
        Address::host("2001:db8::1").unwrap(),
        Address::host("192.0.2.1/24").unwrap(),
    ];
    let json = serde_json::to_string(&nets).unwrap();
    assert_eq!(json, r#"["10.0.0.0/8","2001:db8::1","192.0.2.1/24"]"#);
    let back: Vec<Address> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, nets);
    let rejson = serde_json::to_string(&back).unwrap();
    assert_eq!(rejson, json);
}
