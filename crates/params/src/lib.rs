//! Constant values for the p256coz library
//!
//! Curve domain parameters and wire-format tags. Everything here is an
//! immutable `const`; nothing is computed at runtime.

#![no_std]

pub mod curve;
pub mod encoding;

pub use curve::{CurveParams, NIST_P256};
