//! Validation utilities for the curve and DER primitives

use super::{Error, Result};

pub use p256coz_api::error::validate::{available, exhausted, parameter, point_encoding};

/// Validate a SEQUENCE nesting depth against `limit`
#[inline(always)]
pub fn nesting(context: &'static str, depth: usize, limit: usize) -> Result<()> {
    if depth > limit {
        return Err(Error::NestingTooDeep { context, limit });
    }
    Ok(())
}

/// Validate a DER length-field condition
#[inline(always)]
pub fn length_form(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::MalformedLength { context });
    }
    Ok(())
}

/// Validate that INTEGER content octets are the shortest two's-complement form
///
/// Single-byte content is always minimal. Longer content may not start with
/// 0x00 followed by a byte with the top bit clear, or 0xFF followed by a byte
/// with the top bit set. Empty content is not an integer at all.
#[inline(always)]
pub fn minimal_integer(content: &[u8], context: &'static str) -> Result<()> {
    let redundant = match content {
        [] => true,
        [0x00, next, ..] => next & 0x80 == 0,
        [0xFF, next, ..] => next & 0x80 != 0,
        _ => false,
    };
    if redundant {
        return Err(Error::NonCanonicalInteger { context });
    }
    Ok(())
}
