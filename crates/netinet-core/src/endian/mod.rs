//! Byte-order tags and conversions.
//!
//! Implements the `<endian.h>` byte-order identifiers and the
//! `<bits/byteswap.h>` swap primitives. All conversions are pure functions;
//! the endianness branch each one takes is fixed at compile time by the
//! target, never re-evaluated per call.

// ---------------------------------------------------------------------------
// Byte-order identifiers
// ---------------------------------------------------------------------------

/// Least-significant byte first (`__LITTLE_ENDIAN`).
pub const LITTLE_ENDIAN: u32 = 1234;
/// Most-significant byte first (`__BIG_ENDIAN`); network byte order.
pub const BIG_ENDIAN: u32 = 4321;
/// PDP-11 middle-endian word order (`__PDP_ENDIAN`).
pub const PDP_ENDIAN: u32 = 3412;

/// The host's byte order, resolved once for the compilation target.
#[cfg(target_endian = "little")]
pub const BYTE_ORDER: u32 = LITTLE_ENDIAN;
/// The host's byte order, resolved once for the compilation target.
#[cfg(target_endian = "big")]
pub const BYTE_ORDER: u32 = BIG_ENDIAN;

// ---------------------------------------------------------------------------
// Byte-swap primitives
// ---------------------------------------------------------------------------

/// Reverses the byte positions of a 16-bit value.
///
/// Equivalent to C `__bswap_16`.
#[inline]
pub fn bswap_16(x: u16) -> u16 {
    x.swap_bytes()
}

/// Reverses the byte positions of a 32-bit value.
///
/// Equivalent to C `__bswap_32`.
#[inline]
pub fn bswap_32(x: u32) -> u32 {
    x.swap_bytes()
}

/// Reverses the byte positions of a 64-bit value.
///
/// Equivalent to C `__bswap_64`.
#[inline]
pub fn bswap_64(x: u64) -> u64 {
    x.swap_bytes()
}

// ---------------------------------------------------------------------------
// Host <-> big-endian
// ---------------------------------------------------------------------------

/// Converts a 16-bit value from host to big-endian byte order.
#[inline]
pub fn htobe16(x: u16) -> u16 {
    x.to_be()
}

/// Converts a 16-bit value from big-endian to host byte order.
#[inline]
pub fn be16toh(x: u16) -> u16 {
    u16::from_be(x)
}

/// Converts a 32-bit value from host to big-endian byte order.
#[inline]
pub fn htobe32(x: u32) -> u32 {
    x.to_be()
}

/// Converts a 32-bit value from big-endian to host byte order.
#[inline]
pub fn be32toh(x: u32) -> u32 {
    u32::from_be(x)
}

/// Converts a 64-bit value from host to big-endian byte order.
#[inline]
pub fn htobe64(x: u64) -> u64 {
    x.to_be()
}

/// Converts a 64-bit value from big-endian to host byte order.
#[inline]
pub fn be64toh(x: u64) -> u64 {
    u64::from_be(x)
}

// ---------------------------------------------------------------------------
// Host <-> little-endian
// ---------------------------------------------------------------------------

/// Converts a 16-bit value from host to little-endian byte order.
#[inline]
pub fn htole16(x: u16) -> u16 {
    x.to_le()
}

/// Converts a 16-bit value from little-endian to host byte order.
#[inline]
pub fn le16toh(x: u16) -> u16 {
    u16::from_le(x)
}

/// Converts a 32-bit value from host to little-endian byte order.
#[inline]
pub fn htole32(x: u32) -> u32 {
    x.to_le()
}

/// Converts a 32-bit value from little-endian to host byte order.
#[inline]
pub fn le32toh(x: u32) -> u32 {
    u32::from_le(x)
}

/// Converts a 64-bit value from host to little-endian byte order.
#[inline]
pub fn htole64(x: u64) -> u64 {
    x.to_le()
}

/// Converts a 64-bit value from little-endian to host byte order.
#[inline]
pub fn le64toh(x: u64) -> u64 {
    u64::from_le(x)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
