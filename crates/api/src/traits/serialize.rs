//! Traits for byte serialization of curve points and DER values.

use crate::Result;

/// A trait for curve points that have a SEC1 octet-string form.
pub trait PointCodec: Sized {
    /// Encodes the point; `compressed` selects the 33-byte x-only form.
    fn to_sec1(&self, compressed: bool) -> Vec<u8>;
    /// Decodes any of the legal SEC1 forms, validating the point.
    fn from_sec1(bytes: &[u8]) -> Result<Self>;
}

/// A trait for values with a canonical DER encoding.
pub trait DerEncode {
    /// Converts the value to its DER bytes.
    fn to_der(&self) -> Vec<u8>;
}

/// A trait for values decoded from exactly one complete DER value.
pub trait DerDecode: Sized {
    /// Creates the value from DER bytes, rejecting trailing data.
    fn from_der(bytes: &[u8]) -> Result<Self>;
}
