//! Validation utilities producing typed errors

use super::types::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate that at least `needed` bytes remain
#[inline(always)]
pub fn available(context: &'static str, needed: usize, available: usize) -> Result<()> {
    if available < needed {
        return Err(Error::TruncatedInput {
            context,
            needed,
            available,
        });
    }
    Ok(())
}

/// Validate that nothing is left over after a complete value
#[inline(always)]
pub fn exhausted(context: &'static str, remaining: usize) -> Result<()> {
    if remaining != 0 {
        return Err(Error::TrailingData { context, remaining });
    }
    Ok(())
}

/// Validate a point encoding condition
#[inline(always)]
pub fn point_encoding(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPointEncoding { context });
    }
    Ok(())
}
