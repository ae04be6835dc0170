//! Error handling for the curve and DER primitives
//!
//! The primitives share the typed error of `p256coz-api`; this module
//! re-exports it and adds the guard helpers used by the codecs.

pub use p256coz_api::error::{DerResult, Error, ErrorKind, PointResult, Result, ResultExt};

// Include the validation submodule
pub mod validate;
