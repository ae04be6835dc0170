//! SEC1 octet-string encoding of P-256 points

use crate::ec::p256::{
    constants::{
        P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_INFINITY_SIZE,
        P256_POINT_UNCOMPRESSED_SIZE,
    },
    field::FieldElement,
    point::Point,
};
use crate::error::{validate, Error, Result};
use p256coz_api::PointCodec;
use p256coz_params::encoding::sec1::{
    TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_INFINITY, TAG_UNCOMPRESSED,
};

/// Format of a serialized elliptic‐curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Point at infinity: the single byte 0x00
    Identity,
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x
    Compressed,
}

impl Point {
    /// Detect serialized point format from the tag byte and total length
    ///
    /// Any tag/length pair other than the three legal forms is rejected.
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        match (bytes.first(), bytes.len()) {
            (Some(&TAG_INFINITY), P256_POINT_INFINITY_SIZE) => Ok(PointFormat::Identity),
            (Some(&TAG_UNCOMPRESSED), P256_POINT_UNCOMPRESSED_SIZE) => {
                Ok(PointFormat::Uncompressed)
            }
            (Some(&(TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD)), P256_POINT_COMPRESSED_SIZE) => {
                Ok(PointFormat::Compressed)
            }
            _ => Err(Error::InvalidPointEncoding { context: "P-256 Point" }),
        }
    }

    /// Serialize this point; `compressed` selects 0x02/0x03 ∥ x over 0x04 ∥ x ∥ y
    pub fn serialize(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            self.serialize_compressed()
        } else {
            self.serialize_uncompressed()
        }
    }

    /// Serialize as uncompressed: 0x04 ∥ x ∥ y, or 0x00 for infinity
    pub fn serialize_uncompressed(&self) -> Vec<u8> {
        let (x, y) = match self.coordinates() {
            None => return vec![TAG_INFINITY],
            Some(coords) => coords,
        };
        let mut out = Vec::with_capacity(P256_POINT_UNCOMPRESSED_SIZE);
        out.push(TAG_UNCOMPRESSED);
        out.extend_from_slice(&x.to_bytes());
        out.extend_from_slice(&y.to_bytes());
        out
    }

    /// Serialize in compressed form: 0x02/0x03 ∥ x, or 0x00 for infinity
    pub fn serialize_compressed(&self) -> Vec<u8> {
        let (x, y) = match self.coordinates() {
            None => return vec![TAG_INFINITY],
            Some(coords) => coords,
        };
        let mut out = Vec::with_capacity(P256_POINT_COMPRESSED_SIZE);
        out.push(if y.is_odd() {
            TAG_COMPRESSED_ODD
        } else {
            TAG_COMPRESSED_EVEN
        });
        out.extend_from_slice(&x.to_bytes());
        out
    }

    /// Deserialize any of the three SEC1 forms
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        match Self::detect_format(bytes)? {
            PointFormat::Identity => Ok(Point::Infinity),
            PointFormat::Uncompressed => Self::deserialize_uncompressed(bytes),
            PointFormat::Compressed => Self::deserialize_compressed(bytes),
        }
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y) and check the curve equation
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::point_encoding(
            bytes.len() == P256_POINT_UNCOMPRESSED_SIZE && bytes[0] == TAG_UNCOMPRESSED,
            "P-256 Uncompressed Point",
        )?;
        let x = Self::read_coordinate(&bytes[1..1 + P256_FIELD_ELEMENT_SIZE])?;
        let y = Self::read_coordinate(&bytes[1 + P256_FIELD_ELEMENT_SIZE..])?;
        Self::from_affine(x, y)
    }

    /// Deserialize from compressed bytes (0x02/0x03 ∥ x), recovering y
    ///
    /// y² = x³ + a·x + b; the candidate root is (y²)^((p+1)/4) and must
    /// square back to y², otherwise x is not on the curve.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::point_encoding(
            bytes.len() == P256_POINT_COMPRESSED_SIZE
                && (bytes[0] == TAG_COMPRESSED_EVEN || bytes[0] == TAG_COMPRESSED_ODD),
            "P-256 Compressed Point",
        )?;
        let want_odd = bytes[0] == TAG_COMPRESSED_ODD;
        let x = Self::read_coordinate(&bytes[1..])?;

        let y_sq = Self::curve_rhs(&x);
        let y_candidate = y_sq.sqrt().ok_or(Error::NoSquareRoot {
            context: "P-256 Compressed Point",
        })?;
        let y = if y_candidate.is_odd() == want_odd {
            y_candidate
        } else {
            y_candidate.negate()
        };
        Ok(Point::Affine { x, y })
    }

    fn read_coordinate(bytes: &[u8]) -> Result<FieldElement> {
        let mut buf = [0u8; P256_FIELD_ELEMENT_SIZE];
        buf.copy_from_slice(bytes);
        FieldElement::from_bytes(&buf).map_err(|_| Error::InvalidPointEncoding {
            context: "P-256 Point coordinate",
        })
    }
}

impl PointCodec for Point {
    fn to_sec1(&self, compressed: bool) -> Vec<u8> {
        self.serialize(compressed)
    }

    fn from_sec1(bytes: &[u8]) -> Result<Self> {
        Self::deserialize(bytes)
    }
}
