//! Shared fixtures for the p256coz integration tests

pub mod vectors;

use p256coz_algorithms::ec::p256::{Point, Scalar};

/// Decode a 64-digit hex string into 32 bytes
pub fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).expect("vector is 32 bytes of hex");
    out
}

/// Build a validated affine point from hex coordinates
pub fn point_from_hex(x: &str, y: &str) -> Point {
    Point::new_uncompressed(&hex32(x), &hex32(y)).expect("vector point is on the curve")
}

/// Scalar from a 64-digit hex string
pub fn scalar_from_hex(k: &str) -> Scalar {
    Scalar::new(hex32(k))
}
