//! Elliptic Curve Primitives
//!
//! Only NIST P-256 is implemented. Points are kept in affine form between
//! operations; scalar multiplication works in co-Z (X1 : X2 : Z) form and
//! converts back with a single inversion.

pub mod p256;

pub use p256::{Point as P256Point, Scalar as P256Scalar};
