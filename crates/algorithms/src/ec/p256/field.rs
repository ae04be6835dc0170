//! P-256 field arithmetic implementation

use crate::ec::p256::constants::P256_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use p256coz_internal::constant_time::{ct_select_limbs, ct_swap_limbs};
use p256coz_internal::endian::{be_bytes_to_le_limbs, le_limbs_to_be_bytes};
use subtle::Choice;

/// Number of 32‐bit limbs for a P-256 field element (8 × 32 = 256 bits)
const NLIMBS: usize = 8;

/// P-256 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1.
/// Internally stored as 8 little‐endian 32‐bit limbs, always fully reduced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /* ---------------------------------------------------------------- */
    /*  NIST P-256 Field Constants (little‐endian 32‐bit limbs)         */
    /* ---------------------------------------------------------------- */

    /// p = 0xFFFFFFFF 00000001 00000000 00000000 00000000 FFFFFFFF FFFFFFFF FFFFFFFF
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FFFF, // least significant
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0001,
        0xFFFF_FFFF, // most significant
    ];

    /// a = −3 mod p = p − 3
    pub(crate) const A_M3: [u32; NLIMBS] = [
        0xFFFF_FFFC,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0001,
        0xFFFF_FFFF,
    ];

    /// b = 0x5AC635D8 AA3A93E7 B3EBBD55 769886BC 651D06B0 CC53B0F6 3BCE3C3E 27D2604B
    pub(crate) const B: [u32; NLIMBS] = [
        0x27D2_604B,
        0x3BCE_3C3E,
        0xCC53_B0F6,
        0x651D_06B0,
        0x7698_86BC,
        0xB3EB_BD55,
        0xAA3A_93E7,
        0x5AC6_35D8,
    ];

    /// 4·b mod p, the ladder's Tb seed coefficient
    pub(crate) const QUAD_B: [u32; NLIMBS] = [
        0x9F49_812D,
        0xEF38_F0F8,
        0x314E_C3D8,
        0x9474_1AC2,
        0xDA62_1AF1,
        0xCFAE_F555,
        0xA8EA_4F9D,
        0x6B18_D763,
    ];

    /// Base point x-coordinate G_x
    pub(crate) const G_X: [u32; NLIMBS] = [
        0xD898_C296,
        0xF4A1_3945,
        0x2DEB_33A0,
        0x7703_7D81,
        0x63A4_40F2,
        0xF8BC_E6E5,
        0xE12C_4247,
        0x6B17_D1F2,
    ];

    /// Base point y-coordinate G_y
    pub(crate) const G_Y: [u32; NLIMBS] = [
        0x37BF_51F5,
        0xCBB6_4068,
        0x6B31_5ECE,
        0x2BCE_3357,
        0x7C0F_9E16,
        0x8EE7_EB4A,
        0xFE1A_7F9B,
        0x4FE3_42E2,
    ];

    /// p − 2, big-endian; the Fermat inversion exponent
    const P_MINUS_2: [u8; P256_FIELD_ELEMENT_SIZE] = [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFD,
    ];

    /// (p + 1) / 4, big-endian; square-root exponent valid because p ≡ 3 (mod 4)
    const SQRT_EXP: [u8; P256_FIELD_ELEMENT_SIZE] = [
        0x3F, 0xFF, 0xFF, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ];

    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Curve coefficient a = −3
    #[inline]
    pub fn a() -> Self {
        FieldElement(Self::A_M3)
    }

    /// Curve coefficient b
    #[inline]
    pub fn b() -> Self {
        FieldElement(Self::B)
    }

    /// Create a field element from big‐endian bytes.
    /// Rejects values ≥ p; every element has exactly one encoding.
    pub fn from_bytes(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs: [u32; NLIMBS] = be_bytes_to_le_limbs(bytes);
        let fe = FieldElement(limbs);
        if !fe.is_valid() {
            return Err(Error::param("P-256 FieldElement", "Value ≥ modulus"));
        }
        Ok(fe)
    }

    /// Convert this field element into big‐endian bytes.
    pub fn to_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; P256_FIELD_ELEMENT_SIZE];
        le_limbs_to_be_bytes(&self.0, &mut out);
        out
    }

    /// Is self < p ?
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        let (_, borrow) = Self::sbb8(self.0, Self::MOD_LIMBS);
        borrow == 1
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Return true if the element is odd (least‐significant bit = 1).
    pub fn is_odd(&self) -> bool {
        (self.0[0] & 1) == 1
    }

    /// Constant‐time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = Self::adc8(self.0, other.0);

        // If carry = 1 or sum ≥ p, subtract p
        let (reduced, borrow) = Self::sbb8(sum, Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;

        FieldElement(ct_select_limbs(&sum, &reduced, Choice::from(need_reduce as u8)))
    }

    /// Constant‐time subtraction: (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = Self::sbb8(self.0, other.0);
        let (diff_plus_p, _) = Self::adc8(diff, Self::MOD_LIMBS);
        FieldElement(ct_select_limbs(&diff, &diff_plus_p, Choice::from(borrow as u8)))
    }

    /// Doubling: (self + self) mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Field multiplication: (self · other) mod p
    /// Schoolbook 8×8 → 16‐limb product, then NIST fast reduction
    pub fn mul(&self, other: &Self) -> Self {
        // Phase 1: 8×8 → 16 128-bit partial accumulators
        let mut t = [0u128; NLIMBS * 2];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                t[i + j] += (self.0[i] as u128) * (other.0[j] as u128);
            }
        }

        // Phase 2: Carry‐propagate into 16 × u32 limbs
        let mut wide = [0u32; NLIMBS * 2];
        let mut carry: u128 = 0;
        for (w, &acc) in wide.iter_mut().zip(t.iter()) {
            let v = acc + carry;
            *w = (v & 0xFFFF_FFFF) as u32;
            carry = v >> 32;
        }

        // Phase 3: Reduce 16 limbs → 8 limbs mod p
        Self::reduce_wide(wide)
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Compute multiplicative inverse via Fermat: a^(p−2) mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("P-256 FieldElement", "Inverse of zero"));
        }
        Ok(self.invert_or_zero())
    }

    /// a^(p−2) mod p without the zero check; maps 0 to 0
    ///
    /// Only for call sites where the operand is non-zero by construction.
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow(&Self::P_MINUS_2)
    }

    /// Negate this field element: returns p − self if non-zero, else zero
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            FieldElement::zero().sub(self)
        }
    }

    /// Square root using the fact that p ≡ 3 (mod 4): sqrt(x) = x^((p+1)/4)
    ///
    /// Returns `None` when self is a quadratic non-residue.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = self.pow(&Self::SQRT_EXP);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }

    /// Swap `a` and `b` when `choice` is set, touching both in either case
    #[inline]
    pub fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        ct_swap_limbs(&mut a.0, &mut b.0, choice);
    }

    /* ================================================================= */
    /*  Private helper methods                                           */
    /* ================================================================= */

    /// Left-to-right square-and-multiply with a big-endian exponent
    fn pow(&self, exp_be: &[u8]) -> Self {
        let mut result = FieldElement::one();
        for &byte in exp_be.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// 8‐limb addition with carry
    #[inline(always)]
    fn adc8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (a_limb as u64) + (b_limb as u64) + carry;
            *r_limb = (tmp & 0xFFFF_FFFF) as u32;
            carry = tmp >> 32;
        }
        (r, carry as u32)
    }

    /// 8‐limb subtraction with borrow
    #[inline(always)]
    fn sbb8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut borrow = 0u32;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let ai = a_limb as u64;
            let bi = b_limb as u64 + borrow as u64;
            *r_limb = ai.wrapping_sub(bi) as u32;
            borrow = (ai < bi) as u32;
        }
        (r, borrow)
    }

    /// Reduce a 16-word (512-bit) value modulo p.
    ///
    /// Algorithm: FIPS 186-4 D.2.3,
    /// `s1 + 2·s2 + 2·s3 + s4 + s5 − s6 − s7 − s8 − s9`, evaluated per limb
    /// with signed accumulators, then the residual carry is folded with
    /// 2²⁵⁶ ≡ 2²²⁴ − 2¹⁹² − 2⁹⁶ + 1 (mod p).
    pub(crate) fn reduce_wide(c: [u32; 16]) -> FieldElement {
        let c: [i64; 16] = c.map(|w| w as i64);

        let acc: [i64; NLIMBS] = [
            c[0] + c[8] + c[9] - c[11] - c[12] - c[13] - c[14],
            c[1] + c[9] + c[10] - c[12] - c[13] - c[14] - c[15],
            c[2] + c[10] + c[11] - c[13] - c[14] - c[15],
            c[3] + 2 * c[11] + 2 * c[12] + c[13] - c[15] - c[8] - c[9],
            c[4] + 2 * c[12] + 2 * c[13] + c[14] - c[9] - c[10],
            c[5] + 2 * c[13] + 2 * c[14] + c[15] - c[10] - c[11],
            c[6] + c[13] + 3 * c[14] + 2 * c[15] - c[8] - c[9],
            c[7] + 3 * c[15] + c[8] - c[10] - c[11] - c[12] - c[13],
        ];

        let (mut out, mut carry) = Self::propagate(acc);

        // carry is a small signed multiple of 2²⁵⁶; one fold suffices in
        // practice, the loop covers the wrap of a negative intermediate
        while carry != 0 {
            let mut acc = out.map(|w| w as i64);
            acc[0] += carry;
            acc[3] -= carry;
            acc[6] -= carry;
            acc[7] += carry;
            (out, carry) = Self::propagate(acc);
        }

        // out < 2²⁵⁶ < 2p, so a single conditional subtraction finishes
        let (sub, borrow) = Self::sbb8(out, Self::MOD_LIMBS);
        FieldElement(ct_select_limbs(&out, &sub, Choice::from((borrow ^ 1) as u8)))
    }

    /// Signed carry propagation over eight 32-bit limbs
    #[inline(always)]
    fn propagate(acc: [i64; NLIMBS]) -> ([u32; NLIMBS], i64) {
        let mut out = [0u32; NLIMBS];
        let mut carry = 0i64;
        for (o, &a) in out.iter_mut().zip(acc.iter()) {
            let v = a + carry;
            *o = (v & 0xFFFF_FFFF) as u32;
            carry = v >> 32;
        }
        (out, carry)
    }
}
