//! Codec layer for bit-level and character-level primitives.
//!
//! # Submodules
//!
//! - [`bits`][]: MSB-first bit reader over a bounded slice
//! - [`utf8`][]: Code point to UTF-8 conversion

pub mod bits;
pub mod utf8;
