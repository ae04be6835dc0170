//! Internal utilities for the p256coz library
//!
//! Not part of the public API; shared by the algorithm crate for
//! constant-time selection and limb/byte conversions.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
