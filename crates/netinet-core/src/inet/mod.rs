//! IPv4 constants and address-class predicates.
//!
//! Implements the IPv4 half of `<netinet/in.h>`: host/network byte-order
//! conversions, the legacy class A-D tests, well-known addresses, protocol
//! numbers, and port bounds. Class tests and `INADDR_*` values operate on
//! addresses in host byte order, matching the C macros.

/// A 32-bit IPv4 address, as in C `in_addr_t`.
pub type InAddrT = u32;

// ---------------------------------------------------------------------------
// Host <-> network byte order
// ---------------------------------------------------------------------------

/// Converts a 16-bit value from host byte order to network byte order (big-endian).
///
/// Equivalent to C `htons`.
#[inline]
pub fn htons(v: u16) -> u16 {
    v.to_be()
}

/// Converts a 32-bit value from host byte order to network byte order (big-endian).
///
/// Equivalent to C `htonl`.
#[inline]
pub fn htonl(v: u32) -> u32 {
    v.to_be()
}

/// Converts a 16-bit value from network byte order to host byte order.
///
/// Equivalent to C `ntohs`.
#[inline]
pub fn ntohs(v: u16) -> u16 {
    u16::from_be(v)
}

/// Converts a 32-bit value from network byte order to host byte order.
///
/// Equivalent to C `ntohl`.
#[inline]
pub fn ntohl(v: u32) -> u32 {
    u32::from_be(v)
}

// ---------------------------------------------------------------------------
// Well-known addresses (host byte order)
// ---------------------------------------------------------------------------

/// The wildcard address `0.0.0.0`.
pub const INADDR_ANY: InAddrT = 0x0000_0000;
/// The limited broadcast address `255.255.255.255`.
pub const INADDR_BROADCAST: InAddrT = 0xFFFF_FFFF;
/// Returned by `inet_addr` on parse failure; same bit pattern as broadcast.
pub const INADDR_NONE: InAddrT = 0xFFFF_FFFF;
/// The loopback address `127.0.0.1`.
pub const INADDR_LOOPBACK: InAddrT = 0x7F00_0001;
/// The reserved multicast group `224.0.0.0`.
pub const INADDR_UNSPEC_GROUP: InAddrT = 0xE000_0000;
/// The all-hosts multicast group `224.0.0.1`.
pub const INADDR_ALLHOSTS_GROUP: InAddrT = 0xE000_0001;
/// The all-routers multicast group `224.0.0.2`.
pub const INADDR_ALLRTRS_GROUP: InAddrT = 0xE000_0002;
/// The last link-local multicast group `224.0.0.255`.
pub const INADDR_MAX_LOCAL_GROUP: InAddrT = 0xE000_00FF;

/// Network number of the loopback network (`127`).
pub const IN_LOOPBACKNET: u32 = 127;

/// Buffer length that fits any dotted-quad IPv4 text address plus NUL.
pub const INET_ADDRSTRLEN: usize = 16;
/// Buffer length that fits any IPv6 text address plus NUL.
pub const INET6_ADDRSTRLEN: usize = 46;

// ---------------------------------------------------------------------------
// Address classes
// ---------------------------------------------------------------------------

/// Returns `true` if `a` is a class A address (leading bit `0`).
#[inline]
pub fn in_classa(a: InAddrT) -> bool {
    a & 0x8000_0000 == 0
}

/// Network mask for class A addresses.
pub const IN_CLASSA_NET: u32 = 0xFF00_0000;
/// Bit position of the class A network number.
pub const IN_CLASSA_NSHIFT: u32 = 24;
/// Host mask for class A addresses.
pub const IN_CLASSA_HOST: u32 = 0xFFFF_FFFF & !IN_CLASSA_NET;
/// Number of class A networks.
pub const IN_CLASSA_MAX: u32 = 128;

/// Returns `true` if `a` is a class B address (leading bits `10`).
#[inline]
pub fn in_classb(a: InAddrT) -> bool {
    a & 0xC000_0000 == 0x8000_0000
}

/// Network mask for class B addresses.
pub const IN_CLASSB_NET: u32 = 0xFFFF_0000;
/// Bit position of the class B network number.
pub const IN_CLASSB_NSHIFT: u32 = 16;
/// Host mask for class B addresses.
pub const IN_CLASSB_HOST: u32 = 0xFFFF_FFFF & !IN_CLASSB_NET;
/// Number of class B networks.
pub const IN_CLASSB_MAX: u32 = 65536;

/// Returns `true` if `a` is a class C address (leading bits `110`).
#[inline]
pub fn in_classc(a: InAddrT) -> bool {
    a & 0xE000_0000 == 0xC000_0000
}

/// Network mask for class C addresses.
pub const IN_CLASSC_NET: u32 = 0xFFFF_FF00;
/// Bit position of the class C network number.
pub const IN_CLASSC_NSHIFT: u32 = 8;
/// Host mask for class C addresses.
pub const IN_CLASSC_HOST: u32 = 0xFFFF_FFFF & !IN_CLASSC_NET;

/// Returns `true` if `a` is a class D address (leading bits `1110`).
#[inline]
pub fn in_classd(a: InAddrT) -> bool {
    a & 0xF000_0000 == 0xE000_0000
}

/// Returns `true` if `a` is a multicast address (class D).
#[inline]
pub fn in_multicast(a: InAddrT) -> bool {
    in_classd(a)
}

/// Returns `true` if `a` falls in the experimental range (leading bits `111`).
#[inline]
pub fn in_experimental(a: InAddrT) -> bool {
    a & 0xE000_0000 == 0xE000_0000
}

/// Returns `true` if `a` is in the reserved "bad class" range (leading bits `1111`).
#[inline]
pub fn in_badclass(a: InAddrT) -> bool {
    a & 0xF000_0000 == 0xF000_0000
}

// ---------------------------------------------------------------------------
// Protocol numbers (IPPROTO_*)
// ---------------------------------------------------------------------------

/// Dummy protocol for TCP.
pub const IPPROTO_IP: i32 = 0;
/// Internet Control Message Protocol.
pub const IPPROTO_ICMP: i32 = 1;
/// Internet Group Management Protocol.
pub const IPPROTO_IGMP: i32 = 2;
/// IPIP tunnels.
pub const IPPROTO_IPIP: i32 = 4;
/// Transmission Control Protocol.
pub const IPPROTO_TCP: i32 = 6;
/// Exterior Gateway Protocol.
pub const IPPROTO_EGP: i32 = 8;
/// PUP protocol.
pub const IPPROTO_PUP: i32 = 12;
/// User Datagram Protocol.
pub const IPPROTO_UDP: i32 = 17;
/// XNS IDP protocol.
pub const IPPROTO_IDP: i32 = 22;
/// SO Transport Protocol Class 4.
pub const IPPROTO_TP: i32 = 29;
/// Datagram Congestion Control Protocol.
pub const IPPROTO_DCCP: i32 = 33;
/// IPv6 header.
pub const IPPROTO_IPV6: i32 = 41;
/// Reservation Protocol.
pub const IPPROTO_RSVP: i32 = 46;
/// General Routing Encapsulation.
pub const IPPROTO_GRE: i32 = 47;
/// Encapsulating Security Payload.
pub const IPPROTO_ESP: i32 = 50;
/// Authentication Header.
pub const IPPROTO_AH: i32 = 51;
/// ICMPv6.
pub const IPPROTO_ICMPV6: i32 = 58;
/// Multicast Transport Protocol.
pub const IPPROTO_MTP: i32 = 92;
/// IP option pseudo header for BEET.
pub const IPPROTO_BEETPH: i32 = 94;
/// Encapsulation header.
pub const IPPROTO_ENCAP: i32 = 98;
/// Protocol Independent Multicast.
pub const IPPROTO_PIM: i32 = 103;
/// Compression Header Protocol.
pub const IPPROTO_COMP: i32 = 108;
/// Stream Control Transmission Protocol.
pub const IPPROTO_SCTP: i32 = 132;
/// UDP-Lite protocol.
pub const IPPROTO_UDPLITE: i32 = 136;
/// MPLS in IP.
pub const IPPROTO_MPLS: i32 = 137;
/// Raw IP packets.
pub const IPPROTO_RAW: i32 = 255;

// ---------------------------------------------------------------------------
// Port bounds
// ---------------------------------------------------------------------------

/// Ports below this value are reserved for privileged processes.
pub const IPPORT_RESERVED: u16 = 1024;
/// Ports above this value are reserved for non-privileged servers.
pub const IPPORT_USERRESERVED: u16 = 5000;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
