//! Public API traits and types for the p256coz library
//!
//! This crate provides the public API surface shared by every p256coz crate:
//! the typed error returned by all decoding and arithmetic operations, and the
//! codec traits implemented by curve points and DER values.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{DerEncode, DerDecode, PointCodec};

// Re-export trait modules for direct access
pub use traits::serialize;
