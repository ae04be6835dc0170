//! NIST P-256 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ − 3x + b over the prime field 𝔽ₚ where:
//! - p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1 (NIST P-256 prime, p ≡ 3 mod 4)
//! - the group order n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! The implementation uses:
//! - 32-bit limb field arithmetic with NIST fast reduction
//! - an affine group law as the reference path
//! - a co-Z Montgomery ladder for scalar multiplication, with a single
//!   inversion at the end and a bit-independent operation sequence
//! - SEC1 point encoding (infinity, compressed, uncompressed)

mod constants;
mod field;
mod ladder;
mod point;
mod scalar;
mod sec1;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_INFINITY_SIZE,
    P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;
pub use sec1::PointFormat;

use crate::error::{Error, Result};

/// Get the standard base point G of the P-256 curve
pub fn base_point_g() -> Point {
    Point::Affine {
        x: FieldElement(FieldElement::G_X),
        y: FieldElement(FieldElement::G_Y),
    }
}

/// Scalar multiplication with the base point: scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    point.mul(scalar)
}

/// Known-answer triples (k, x, y) with k·G = (x, y)
pub const SELF_TEST_VECTORS: [(&str, &str, &str); 3] = [
    (
        "cc496a11d4cfc0958657918858041182ac6a9570df89fd21f486fda95fd0dc4d",
        "2b953776b6c5bf472bc8dc016004aad9eb264b80b1e7b030ffd21df1632ab5ea",
        "c9fd1ce99f3abee0cd212ffdd399a58bbc60466db2e8f4badfda8d53be4f8073",
    ),
    (
        "f0bbbbf1048810db67440edbbb4040009bdc01e0cd00b10973f2387c17907cf5",
        "a8cc7306c34dbfbc4164c1ec3a1734e3dbece5b611a09496196098746c3178f7",
        "db53860d50d88205f928b8450bc8ad2f3296690c9ed6f2025d6333f2fb302862",
    ),
    (
        "a5b6109e1622bfaff803a3dd53397f61d64ba9fb6499d5b5aa38201f71a2244b",
        "5392a2b409193094bb8ce8b6c53f10496b3a093f82728a93fd81f6231b70458a",
        "c28201bd1d37458776b20807a5106f3432e7289b2294b04b22817284edfae7d3",
    ),
];

/// Run the co-Z ladder against the known-answer vectors
///
/// Returns the first mismatch as an error; callers decide how to report it.
pub fn self_test() -> Result<()> {
    let g = base_point_g();
    for (k_hex, x_hex, y_hex) in SELF_TEST_VECTORS.iter() {
        let k = Scalar::new(decode_hex_32(k_hex)?);
        let expected = Point::new_uncompressed(&decode_hex_32(x_hex)?, &decode_hex_32(y_hex)?)?;
        if g.mul(&k)? != expected {
            return Err(Error::param("P-256 self test", "co-Z ladder mismatch"));
        }
    }
    Ok(())
}

fn decode_hex_32(s: &str) -> Result<[u8; 32]> {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out)
        .map_err(|_| Error::param("P-256 self test", "malformed vector"))?;
    Ok(out)
}
