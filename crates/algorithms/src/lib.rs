//! NIST P-256 point arithmetic and a canonical DER codec
//!
//! This crate provides the arithmetic core of p256coz:
//!
//! - prime-field arithmetic modulo p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1
//! - the affine group law and a co-Z Montgomery ladder for scalar
//!   multiplication, using conditional swaps so every ladder step runs
//!   the same field operations
//! - SEC1 point encoding with a one-byte point at infinity
//! - DER encoding and strict decoding for INTEGER, OCTET STRING and SEQUENCE
//!
//! All operations are pure functions over value types and return typed
//! errors from [`p256coz_api::Error`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, ErrorKind, Result, ResultExt};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{p256, P256Point, P256Scalar};

// DER encoding
pub mod encoding;
pub use encoding::der::{self, Asn1Value, SignaturePair};
