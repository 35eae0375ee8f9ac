//! IPv6 address-category predicates.
//!
//! Implements the `IN6_IS_ADDR_*` macro family from `<netinet/in.h>`. An
//! address is the 16 bytes of `struct in6_addr` in network byte order; each
//! predicate is a fixed-position byte/bit comparison against a literal
//! pattern.

/// A 128-bit IPv6 address in network byte order, as in C `struct in6_addr`.
pub type In6Addr = [u8; 16];

/// The unspecified address `::` (`IN6ADDR_ANY_INIT`).
pub const IN6ADDR_ANY: In6Addr = [0; 16];

/// The loopback address `::1` (`IN6ADDR_LOOPBACK_INIT`).
pub const IN6ADDR_LOOPBACK: In6Addr = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];

/// Returns `true` for the unspecified address `::`.
#[inline]
pub fn is_unspecified(a: &In6Addr) -> bool {
    *a == IN6ADDR_ANY
}

/// Returns `true` for the loopback address `::1`.
#[inline]
pub fn is_loopback(a: &In6Addr) -> bool {
    *a == IN6ADDR_LOOPBACK
}

/// Returns `true` for link-local unicast addresses (`fe80::/10`).
#[inline]
pub fn is_link_local(a: &In6Addr) -> bool {
    a[0] == 0xFE && a[1] & 0xC0 == 0x80
}

/// Returns `true` for site-local unicast addresses (`fec0::/10`, deprecated).
#[inline]
pub fn is_site_local(a: &In6Addr) -> bool {
    a[0] == 0xFE && a[1] & 0xC0 == 0xC0
}

/// Returns `true` for IPv4-mapped addresses (`::ffff:0:0/96`).
#[inline]
pub fn is_v4_mapped(a: &In6Addr) -> bool {
    a[..10] == [0; 10] && a[10] == 0xFF && a[11] == 0xFF
}

/// Returns `true` for IPv4-compatible addresses (`::/96` excluding `::` and `::1`).
#[inline]
pub fn is_v4_compat(a: &In6Addr) -> bool {
    a[..12] == [0; 12] && u32::from_be_bytes([a[12], a[13], a[14], a[15]]) > 1
}

/// Returns `true` for multicast addresses (`ff00::/8`).
#[inline]
pub fn is_multicast(a: &In6Addr) -> bool {
    a[0] == 0xFF
}

/// Multicast scope nibble of `a` (low four bits of the second byte).
#[inline]
fn multicast_scope(a: &In6Addr) -> u8 {
    a[1] & 0x0F
}

/// Returns `true` for interface-local multicast addresses (`ffx1::/16`).
#[inline]
pub fn is_mc_node_local(a: &In6Addr) -> bool {
    is_multicast(a) && multicast_scope(a) == 0x1
}

/// Returns `true` for link-local multicast addresses (`ffx2::/16`).
#[inline]
pub fn is_mc_link_local(a: &In6Addr) -> bool {
    is_multicast(a) && multicast_scope(a) == 0x2
}

/// Returns `true` for site-local multicast addresses (`ffx5::/16`).
#[inline]
pub fn is_mc_site_local(a: &In6Addr) -> bool {
    is_multicast(a) && multicast_scope(a) == 0x5
}

/// Returns `true` for organization-local multicast addresses (`ffx8::/16`).
#[inline]
pub fn is_mc_org_local(a: &In6Addr) -> bool {
    is_multicast(a) && multicast_scope(a) == 0x8
}

/// Returns `true` for global multicast addresses (`ffxe::/16`).
#[inline]
pub fn is_mc_global(a: &In6Addr) -> bool {
    is_multicast(a) && multicast_scope(a) == 0xE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    fn addr(s: &str) -> In6Addr {
        s.parse::<Ipv6Addr>().unwrap().octets()
    }

    /// All categories that hold for `a`, as a bit-per-predicate word.
    fn category_profile(a: &In6Addr) -> u16 {
        [
            is_unspecified(a),
            is_loopback(a),
            is_link_local(a),
            is_site_local(a),
            is_v4_mapped(a),
            is_v4_compat(a),
            is_multicast(a),
        ]
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &hit)| acc | (u16::from(hit) << i))
    }

    #[test]
    fn unspecified_only() {
        assert_eq!(category_profile(&IN6ADDR_ANY), 0b000_0001);
        assert!(is_unspecified(&addr("::")));
    }

    #[test]
    fn loopback_only() {
        assert_eq!(category_profile(&IN6ADDR_LOOPBACK), 0b000_0010);
        assert!(is_loopback(&addr("::1")));
        // glibc excludes ::1 from the v4-compatible range.
        assert!(!is_v4_compat(&IN6ADDR_LOOPBACK));
    }

    #[test]
    fn link_local_prefix() {
        assert!(is_link_local(&addr("fe80::1")));
        assert!(is_link_local(&addr("febf::1")));
        assert!(!is_link_local(&addr("fec0::1")));
        assert!(!is_link_local(&addr("fe00::1")));
        assert_eq!(category_profile(&addr("fe80::1")), 0b000_0100);
    }

    #[test]
    fn site_local_prefix() {
        assert!(is_site_local(&addr("fec0::1")));
        assert!(is_site_local(&addr("feff::1")));
        assert!(!is_site_local(&addr("fe80::1")));
        assert_eq!(category_profile(&addr("fec0::1")), 0b000_1000);
    }

    #[test]
    fn v4_mapped() {
        assert!(is_v4_mapped(&addr("::ffff:192.0.2.1")));
        assert!(is_v4_mapped(&addr("::ffff:0.0.0.0")));
        assert!(!is_v4_mapped(&addr("::fffe:192.0.2.1")));
        assert_eq!(category_profile(&addr("::ffff:10.0.0.1")), 0b001_0000);
    }

    #[test]
    fn v4_compat() {
        assert!(is_v4_compat(&addr("::192.0.2.1")));
        assert!(is_v4_compat(&addr("::0.0.0.2")));
        // :: and ::1 are excluded.
        assert!(!is_v4_compat(&addr("::")));
        assert!(!is_v4_compat(&addr("::1")));
        assert!(!is_v4_compat(&addr("::1:0:0:0")));
        assert_eq!(category_profile(&addr("::192.0.2.1")), 0b010_0000);
    }

    #[test]
    fn multicast_prefix() {
        assert!(is_multicast(&addr("ff02::1")));
        assert!(is_multicast(&addr("ff0e::1")));
        assert!(!is_multicast(&addr("fe80::1")));
        assert_eq!(category_profile(&addr("ff02::1")), 0b100_0000);
    }

    #[test]
    fn multicast_scopes_are_exclusive() {
        let cases: [(&str, fn(&In6Addr) -> bool); 5] = [
            ("ff01::1", is_mc_node_local),
            ("ff02::1", is_mc_link_local),
            ("ff05::1", is_mc_site_local),
            ("ff08::1", is_mc_org_local),
            ("ff0e::1", is_mc_global),
        ];
        for (s, expected) in cases {
            let a = addr(s);
            assert!(is_multicast(&a), "{s} must be multicast");
            let hits = [
                is_mc_node_local(&a),
                is_mc_link_local(&a),
                is_mc_site_local(&a),
                is_mc_org_local(&a),
                is_mc_global(&a),
            ];
            assert_eq!(hits.iter().filter(|&&h| h).count(), 1, "{s}");
            assert!(expected(&a), "{s}");
        }
    }

    #[test]
    fn multicast_scope_requires_multicast_prefix() {
        // Right scope nibble, wrong leading byte.
        assert!(!is_mc_link_local(&addr("fe02::1")));
        assert!(!is_mc_global(&addr("fe0e::1")));
    }

    #[test]
    fn agrees_with_std_classification() {
        for s in ["::", "::1", "fe80::1", "ff02::1", "2001:db8::1", "::ffff:192.0.2.1"] {
            let parsed: Ipv6Addr = s.parse().unwrap();
            let a = parsed.octets();
            assert_eq!(is_unspecified(&a), parsed.is_unspecified(), "{s}");
            assert_eq!(is_loopback(&a), parsed.is_loopback(), "{s}");
            assert_eq!(is_multicast(&a), parsed.is_multicast(), "{s}");
        }
    }
}
