//! P-256 elliptic curve point operations

use crate::ec::p256::{
    constants::P256_FIELD_ELEMENT_SIZE, field::FieldElement, ladder, scalar::Scalar,
};
use crate::error::{Error, Result};
use p256coz_internal::constant_time::ct_eq;

/// A point on P-256: the point at infinity or affine coordinates (x, y)
///
/// Every `Affine` value produced by this crate satisfies
/// y² = x³ − 3x + b (mod p); constructors that take external coordinates
/// check the equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The group identity
    Infinity,
    /// Affine coordinates, each in [0, p)
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// Create a new affine point from big-endian coordinates
    pub fn new_uncompressed(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_bytes(x_bytes)
            .map_err(|_| Error::InvalidPointEncoding { context: "P-256 Point x" })?;
        let y = FieldElement::from_bytes(y_bytes)
            .map_err(|_| Error::InvalidPointEncoding { context: "P-256 Point y" })?;
        Self::from_affine(x, y)
    }

    /// Create an affine point from field elements, checking the curve equation
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::PointNotOnCurve { context: "P-256 Point" });
        }
        Ok(Point::Affine { x, y })
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Infinity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Affine coordinates, or `None` for the point at infinity
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Extract x‐coordinate as big‐endian bytes
    pub fn x_coordinate_bytes(&self) -> Option<[u8; P256_FIELD_ELEMENT_SIZE]> {
        self.coordinates().map(|(x, _)| x.to_bytes())
    }

    /// Extract y‐coordinate as big‐endian bytes
    pub fn y_coordinate_bytes(&self) -> Option<[u8; P256_FIELD_ELEMENT_SIZE]> {
        self.coordinates().map(|(_, y)| y.to_bytes())
    }

    /// Check that (x, y) satisfies y² = x³ − 3x + b
    pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        ct_eq(y.square().to_bytes(), Self::curve_rhs(x).to_bytes())
    }

    /// x³ + a·x + b
    pub(crate) fn curve_rhs(x: &FieldElement) -> FieldElement {
        let x3 = x.square().mul(x);
        x3.add(&FieldElement::a().mul(x)).add(&FieldElement::b())
    }

    /// Negation: (x, −y mod p); infinity is its own negative
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: y.negate(),
            },
        }
    }

    /// Add two points (affine group law)
    ///
    /// Reference path: one field inversion per call. Scalar multiplication
    /// goes through the co-Z ladder instead.
    pub fn add(&self, other: &Self) -> Self {
        let ((x1, y1), (x2, y2)) = match (self, other) {
            (Point::Infinity, _) => return other.clone(),
            (_, Point::Infinity) => return self.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 != x2 {
            // chord: v = (y2 − y1) / (x2 − x1); x2 − x1 ≠ 0 here
            let v = y2.sub(y1).mul(&x2.sub(x1).invert_or_zero());
            let x3 = v.square().sub(x1).sub(x2);
            let y3 = v.mul(&x1.sub(&x3)).sub(y1);
            return Point::Affine { x: x3, y: y3 };
        }

        if y1 == y2 {
            self.double()
        } else {
            // P2 = −P1
            Point::Infinity
        }
    }

    /// Double this point: 2P (tangent law)
    ///
    /// A point with y = 0 has order two; P-256 has odd order so this only
    /// triggers for unvalidated input, and yields infinity.
    pub fn double(&self) -> Self {
        let (x1, y1) = match self {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        if y1.is_zero() {
            return Point::Infinity;
        }

        // w = (3·x² + a) / (2·y)
        let x_sq = x1.square();
        let numerator = x_sq.double().add(&x_sq).add(&FieldElement::a());
        let w = numerator.mul(&y1.double().invert_or_zero());

        let x4 = w.square().sub(&x1.double());
        let y4 = w.mul(&x1.sub(&x4)).sub(y1);
        Point::Affine { x: x4, y: y4 }
    }

    /// Scalar multiplication: scalar · P
    ///
    /// 0, 1 and n − 1 are answered directly; every other scalar runs the
    /// co-Z Montgomery ladder.
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        let (x, y) = match self {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { x, y } => (x, y),
        };
        if scalar.is_zero() {
            return Ok(Point::Infinity);
        }
        if scalar.is_one() {
            return Ok(self.clone());
        }
        if scalar.is_n_minus_one() {
            return Ok(self.negate());
        }
        ladder::co_z_scalar_mul(scalar, x, y)
    }

    /// Scalar multiplication through the affine group law
    ///
    /// Montgomery ladder over `add`/`double`, starting from (∞, P). Slow;
    /// kept as an oracle for the co-Z path.
    pub fn mul_reference(&self, scalar: &Scalar) -> Self {
        let mut r1 = Point::Infinity;
        let mut r2 = self.clone();
        for bit in scalar.bits() {
            if bit == 1 {
                r1 = r1.add(&r2);
                r2 = r2.double();
            } else {
                r2 = r2.add(&r1);
                r1 = r1.double();
            }
        }
        r1
    }
}
