//! Fixed-width integer bounds.
//!
//! Implements the `<stdint.h>` limit constants. Exact- and least-width
//! bounds are typed to the matching Rust primitive; the fast and pointer
//! variants depend on the target word size and are resolved once through
//! `cfg` type aliases rather than redefinition.

// ---------------------------------------------------------------------------
// Exact-width bounds
// ---------------------------------------------------------------------------

pub const INT8_MIN: i8 = i8::MIN;
pub const INT8_MAX: i8 = i8::MAX;
pub const INT16_MIN: i16 = i16::MIN;
pub const INT16_MAX: i16 = i16::MAX;
pub const INT32_MIN: i32 = i32::MIN;
pub const INT32_MAX: i32 = i32::MAX;
pub const INT64_MIN: i64 = i64::MIN;
pub const INT64_MAX: i64 = i64::MAX;

pub const UINT8_MAX: u8 = u8::MAX;
pub const UINT16_MAX: u16 = u16::MAX;
pub const UINT32_MAX: u32 = u32::MAX;
pub const UINT64_MAX: u64 = u64::MAX;

// ---------------------------------------------------------------------------
// Least-width bounds
// ---------------------------------------------------------------------------

// int_leastN_t is the exact-width type on every glibc target.

pub const INT_LEAST8_MIN: i8 = INT8_MIN;
pub const INT_LEAST8_MAX: i8 = INT8_MAX;
pub const INT_LEAST16_MIN: i16 = INT16_MIN;
pub const INT_LEAST16_MAX: i16 = INT16_MAX;
pub const INT_LEAST32_MIN: i32 = INT32_MIN;
pub const INT_LEAST32_MAX: i32 = INT32_MAX;
pub const INT_LEAST64_MIN: i64 = INT64_MIN;
pub const INT_LEAST64_MAX: i64 = INT64_MAX;

pub const UINT_LEAST8_MAX: u8 = UINT8_MAX;
pub const UINT_LEAST16_MAX: u16 = UINT16_MAX;
pub const UINT_LEAST32_MAX: u32 = UINT32_MAX;
pub const UINT_LEAST64_MAX: u64 = UINT64_MAX;

// ---------------------------------------------------------------------------
// Fast-width types and bounds
// ---------------------------------------------------------------------------

/// `int_fast8_t`.
pub type IntFast8 = i8;
/// `uint_fast8_t`.
pub type UIntFast8 = u8;
/// `int_fast64_t`.
pub type IntFast64 = i64;
/// `uint_fast64_t`.
pub type UIntFast64 = u64;

/// `int_fast16_t`: the native word on this target.
#[cfg(target_pointer_width = "64")]
pub type IntFast16 = i64;
/// `int_fast16_t`: the native word on this target.
#[cfg(target_pointer_width = "32")]
pub type IntFast16 = i32;

/// `int_fast32_t`: the native word on this target.
#[cfg(target_pointer_width = "64")]
pub type IntFast32 = i64;
/// `int_fast32_t`: the native word on this target.
#[cfg(target_pointer_width = "32")]
pub type IntFast32 = i32;

/// `uint_fast16_t`: the native word on this target.
#[cfg(target_pointer_width = "64")]
pub type UIntFast16 = u64;
/// `uint_fast16_t`: the native word on this target.
#[cfg(target_pointer_width = "32")]
pub type UIntFast16 = u32;

/// `uint_fast32_t`: the native word on this target.
#[cfg(target_pointer_width = "64")]
pub type UIntFast32 = u64;
/// `uint_fast32_t`: the native word on this target.
#[cfg(target_pointer_width = "32")]
pub type UIntFast32 = u32;

pub const INT_FAST8_MIN: IntFast8 = IntFast8::MIN;
pub const INT_FAST8_MAX: IntFast8 = IntFast8::MAX;
pub const INT_FAST16_MIN: IntFast16 = IntFast16::MIN;
pub const INT_FAST16_MAX: IntFast16 = IntFast16::MAX;
pub const INT_FAST32_MIN: IntFast32 = IntFast32::MIN;
pub const INT_FAST32_MAX: IntFast32 = IntFast32::MAX;
pub const INT_FAST64_MIN: IntFast64 = IntFast64::MIN;
pub const INT_FAST64_MAX: IntFast64 = IntFast64::MAX;

pub const UINT_FAST8_MAX: UIntFast8 = UIntFast8::MAX;
pub const UINT_FAST16_MAX: UIntFast16 = UIntFast16::MAX;
pub const UINT_FAST32_MAX: UIntFast32 = UIntFast32::MAX;
pub const UINT_FAST64_MAX: UIntFast64 = UIntFast64::MAX;

// ---------------------------------------------------------------------------
// Pointer-width and greatest-width bounds
// ---------------------------------------------------------------------------

pub const INTPTR_MIN: isize = isize::MIN;
pub const INTPTR_MAX: isize = isize::MAX;
pub const UINTPTR_MAX: usize = usize::MAX;

pub const INTMAX_MIN: i64 = i64::MIN;
pub const INTMAX_MAX: i64 = i64::MAX;
pub const UINTMAX_MAX: u64 = u64::MAX;

pub const PTRDIFF_MIN: isize = isize::MIN;
pub const PTRDIFF_MAX: isize = isize::MAX;
pub const SIZE_MAX: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Other stdint bounds
// ---------------------------------------------------------------------------

pub const SIG_ATOMIC_MIN: i32 = i32::MIN;
pub const SIG_ATOMIC_MAX: i32 = i32::MAX;

pub const WCHAR_MIN: i32 = i32::MIN;
pub const WCHAR_MAX: i32 = i32::MAX;
pub const WINT_MIN: u32 = u32::MIN;
pub const WINT_MAX: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_width_values() {
        assert_eq!(INT8_MIN, -128);
        assert_eq!(INT8_MAX, 127);
        assert_eq!(INT16_MIN, -32768);
        assert_eq!(INT16_MAX, 32767);
        assert_eq!(INT32_MIN, -2147483648);
        assert_eq!(INT32_MAX, 2147483647);
        assert_eq!(INT64_MIN, -9223372036854775808);
        assert_eq!(INT64_MAX, 9223372036854775807);
        assert_eq!(UINT8_MAX, 255);
        assert_eq!(UINT16_MAX, 65535);
        assert_eq!(UINT32_MAX, 4294967295);
        assert_eq!(UINT64_MAX, 18446744073709551615);
    }

    #[test]
    fn least_equals_exact() {
        assert_eq!(INT_LEAST8_MIN, INT8_MIN);
        assert_eq!(INT_LEAST8_MAX, INT8_MAX);
        assert_eq!(INT_LEAST16_MIN, INT16_MIN);
        assert_eq!(INT_LEAST16_MAX, INT16_MAX);
        assert_eq!(INT_LEAST32_MIN, INT32_MIN);
        assert_eq!(INT_LEAST32_MAX, INT32_MAX);
        assert_eq!(INT_LEAST64_MIN, INT64_MIN);
        assert_eq!(INT_LEAST64_MAX, INT64_MAX);
        assert_eq!(UINT_LEAST8_MAX, UINT8_MAX);
        assert_eq!(UINT_LEAST16_MAX, UINT16_MAX);
        assert_eq!(UINT_LEAST32_MAX, UINT32_MAX);
        assert_eq!(UINT_LEAST64_MAX, UINT64_MAX);
    }

    #[test]
    fn fast8_and_fast64_are_fixed() {
        assert_eq!(INT_FAST8_MIN, -128);
        assert_eq!(INT_FAST8_MAX, 127);
        assert_eq!(INT_FAST64_MIN, i64::MIN);
        assert_eq!(INT_FAST64_MAX, i64::MAX);
        assert_eq!(UINT_FAST8_MAX, 255);
        assert_eq!(UINT_FAST64_MAX, u64::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn fast16_32_are_word_sized_on_64bit() {
        assert_eq!(INT_FAST16_MIN, i64::MIN);
        assert_eq!(INT_FAST16_MAX, i64::MAX);
        assert_eq!(INT_FAST32_MIN, i64::MIN);
        assert_eq!(INT_FAST32_MAX, i64::MAX);
        assert_eq!(UINT_FAST16_MAX, u64::MAX);
        assert_eq!(UINT_FAST32_MAX, u64::MAX);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn fast16_32_are_word_sized_on_32bit() {
        assert_eq!(INT_FAST16_MIN, i32::MIN);
        assert_eq!(INT_FAST16_MAX, i32::MAX);
        assert_eq!(INT_FAST32_MIN, i32::MIN);
        assert_eq!(INT_FAST32_MAX, i32::MAX);
        assert_eq!(UINT_FAST16_MAX, u32::MAX);
        assert_eq!(UINT_FAST32_MAX, u32::MAX);
    }

    #[test]
    fn pointer_width_bounds() {
        assert_eq!(INTPTR_MIN, isize::MIN);
        assert_eq!(INTPTR_MAX, isize::MAX);
        assert_eq!(UINTPTR_MAX, usize::MAX);
        assert_eq!(PTRDIFF_MIN, isize::MIN);
        assert_eq!(PTRDIFF_MAX, isize::MAX);
        assert_eq!(SIZE_MAX, usize::MAX);
    }

    #[test]
    fn greatest_width_is_64bit() {
        assert_eq!(INTMAX_MIN, i64::MIN);
        assert_eq!(INTMAX_MAX, i64::MAX);
        assert_eq!(UINTMAX_MAX, u64::MAX);
    }

    #[test]
    fn misc_bounds() {
        assert_eq!(SIG_ATOMIC_MIN, -2147483648);
        assert_eq!(SIG_ATOMIC_MAX, 2147483647);
        assert_eq!(WCHAR_MIN, i32::MIN);
        assert_eq!(WCHAR_MAX, i32::MAX);
        assert_eq!(WINT_MIN, 0);
        assert_eq!(WINT_MAX, 4294967295);
    }
}
