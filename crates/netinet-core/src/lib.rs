//! # netinet-core
//!
//! Typed, safe Rust renditions of the constants and one-line helper macros
//! exported by `<netinet/in.h>` and its transitive includes (`<endian.h>`,
//! `<bits/byteswap.h>`, `<stdint.h>`).
//!
//! Every entry is either an immutable constant or a pure function of one
//! fixed-width integer. Where glibc resolves a symbol through preprocessor
//! conditionals (endianness, pointer width), the corresponding item here is
//! selected once at compile time via `cfg`; no symbol carries more than one
//! definition for a given target.

#![deny(unsafe_code)]

pub mod endian;
pub mod inet;
pub mod inet6;
pub mod limits;
