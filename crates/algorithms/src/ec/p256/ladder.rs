//! Co-Z Montgomery ladder for P-256 scalar multiplication
//!
//! The ladder keeps the pair (R1, R2) with R2 − R1 = P in an (X1 : X2 : Z)
//! representation where both points share an implicit Z, together with the
//! three auxiliary values TD = xP·Z, Ta = a·Z², Tb = 4b·Z³. Each step turns
//! (R1, R2) into (R1 + R2, 2·R2) with 10M + 5S + 13 additions; the final
//! recovery rebuilds (X : Y : Z) for R1 with 10M + 3S + 8 additions and a
//! single inversion maps it back to affine.
//!
//! Reference: Hutter, Joye, Sierra, "Memory-Constrained Implementations of
//! Elliptic Curve Cryptography in Co-Z Coordinate Representation" (2011).
//! The operation order below follows the published register allocation
//! exactly and must not be rearranged.

use crate::ec::p256::{field::FieldElement, point::Point, scalar::Scalar};
use crate::error::Result;
use subtle::Choice;

/// Ephemeral ladder registers; never leaves this module
struct CoZState {
    x1: FieldElement,
    x2: FieldElement,
    td: FieldElement,
    ta: FieldElement,
    tb: FieldElement,
}

/// Doubling of an affine point into combined (X, Z) form
///
/// Returns (X, W) with W = 4y² acting as Z and X = (3x² + a)² − W·2x.
fn double_into_xz(x: &FieldElement, y: &FieldElement) -> (FieldElement, FieldElement) {
    let w = y.square().double().double();
    let x_sq = x.square();
    let t = x_sq.double().add(&x_sq).add(&FieldElement::a());
    let x_out = t.square().sub(&w.mul(&x.double()));
    (x_out, w)
}

impl CoZState {
    /// { P, 2P } ≅ (X1 : X2 : Z)
    fn setup(x_p: &FieldElement, y_p: &FieldElement) -> Self {
        let (x2, z) = double_into_xz(x_p, y_p);
        let x1 = x_p.mul(&z);

        // TD = xP·Z, Ta = a·Z², Tb = 4b·Z³
        let td = x1.clone();
        let mut ta = z.square();
        let mut tb = ta.mul(&z);
        ta = ta.mul(&FieldElement::a());
        tb = tb.mul(&FieldElement(FieldElement::QUAD_B));

        CoZState { x1, x2, td, ta, tb }
    }

    /// (R1, R2) → (R1 + R2, 2·R2) in place; 10M + 5S + 13 add
    fn diff_add_dbl(&mut self) {
        let CoZState { x1, x2, td, ta, tb } = self;

        let mut r2 = x1.sub(x2);
        let mut r1 = r2.square();
        r2 = x2.square();
        let mut r3 = r2.sub(ta);
        let mut r4 = r3.square();
        let mut r5 = x2.add(x2);
        r3 = r5.mul(tb);
        r4 = r4.sub(&r3);
        r5 = r5.add(&r5);
        r2 = r2.add(ta);
        r3 = r5.mul(&r2);
        r3 = r3.add(tb);
        r5 = x1.add(x2);
        r2 = r2.add(ta);
        r2 = r2.sub(&r1);
        *x2 = x1.square();
        r2 = r2.add(x2);
        *x2 = r5.mul(&r2);
        *x2 = x2.add(tb);
        *x1 = r3.mul(x2);
        *x2 = r1.mul(&r4);
        r2 = r1.mul(&r3);
        r3 = r2.mul(tb);
        r4 = r2.square();
        r1 = td.mul(&r2);
        r2 = ta.mul(&r4);
        *tb = r3.mul(&r4);
        *x1 = x1.sub(&r1);
        *td = r1;
        *ta = r2;
    }

    /// (X1 : X2 : Z) for (R1, R2) with R2 − R1 = D → (X : Y : Z) for R1;
    /// 10M + 3S + 8 add
    fn recover(
        self,
        x_d: &FieldElement,
        y_d: &FieldElement,
    ) -> (FieldElement, FieldElement, FieldElement) {
        let CoZState { x1, x2, td, ta, tb } = self;

        let mut r1 = td.mul(&x1);
        let mut r2 = r1.add(&ta);
        let mut r3 = x1.add(&td);
        let mut r4 = r2.mul(&r3);
        r3 = x1.sub(&td);
        r2 = r3.square();
        r3 = r2.mul(&x2);
        r4 = r4.sub(&r3);
        r4 = r4.add(&r4);
        r4 = r4.add(&tb);
        r2 = td.square();
        r3 = x1.mul(&r2);
        r1 = x_d.mul(&r3);
        r3 = y_d.add(y_d);
        r3 = r3.add(&r3);
        let x_out = r3.mul(&r1);
        r1 = r2.mul(&td);
        let z_out = r3.mul(&r1);
        r2 = x_d.square();
        r3 = r2.mul(x_d);
        let y_out = r3.mul(&r4);

        (x_out, y_out, z_out)
    }
}

/// k·P for 1 < k < n − 1 and P ≠ ∞
///
/// Bits after the leading one drive the ladder. For a 0 bit the roles of
/// R1 and R2 are exchanged around the step with constant-time swaps, so the
/// same field operations run for either bit value.
pub(crate) fn co_z_scalar_mul(k: &Scalar, x_p: &FieldElement, y_p: &FieldElement) -> Result<Point> {
    let mut state = CoZState::setup(x_p, y_p);

    for bit in k.bits().skip(1) {
        let swap = Choice::from(bit ^ 1);
        FieldElement::conditional_swap(&mut state.x1, &mut state.x2, swap);
        state.diff_add_dbl();
        FieldElement::conditional_swap(&mut state.x1, &mut state.x2, swap);
    }

    let (x, y, z) = state.recover(x_p, y_p);
    let z_inv = z.invert()?;
    Point::from_affine(x.mul(&z_inv), y.mul(&z_inv))
}
