//! P-256 scalar arithmetic operations

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use p256coz_internal::endian::{be_bytes_to_le_limbs, le_limbs_to_be_bytes};
use p256coz_params::NIST_P256;

/// P-256 scalar value for use in elliptic curve operations
///
/// Represents a non-negative integer already reduced modulo the curve
/// order n. Zero is a legal value (0·P is the point at infinity).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar([u32; 8]);

impl Scalar {
    /// Create a scalar from 32 big-endian bytes with modular reduction
    ///
    /// Any 256-bit value is below 2n, so one conditional subtraction of n
    /// brings it into [0, n).
    pub fn new(bytes: [u8; P256_SCALAR_SIZE]) -> Self {
        let mut limbs: [u32; 8] = be_bytes_to_le_limbs(&bytes);
        if Self::geq(&limbs, &Self::N_LIMBS) {
            Self::sub_in_place(&mut limbs, &Self::N_LIMBS);
        }
        Scalar(limbs)
    }

    /// Create a scalar from big-endian bytes of any length, reduced mod n
    ///
    /// Horner evaluation: acc ← acc·256 + byte (mod n) for every byte.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
        let mut acc = Self::zero();
        for &byte in bytes {
            for _ in 0..8 {
                acc = acc.add_mod_n(&acc);
            }
            acc = acc.add_mod_n(&Self::from_u64(byte as u64));
        }
        acc
    }

    /// Create a scalar from a machine integer (always < n)
    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u32; 8];
        limbs[0] = value as u32;
        limbs[1] = (value >> 32) as u32;
        Scalar(limbs)
    }

    /// The scalar 0
    pub fn zero() -> Self {
        Scalar([0u32; 8])
    }

    /// The scalar 1
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// The largest scalar, n − 1 (≡ −1 mod n)
    pub fn n_minus_one() -> Self {
        let mut limbs = Self::N_LIMBS;
        limbs[0] -= 1; // n is odd, no borrow
        Scalar(limbs)
    }

    /// Serialize the scalar to 32 big-endian bytes
    pub fn serialize(&self) -> [u8; P256_SCALAR_SIZE] {
        let mut out = [0u8; P256_SCALAR_SIZE];
        le_limbs_to_be_bytes(&self.0, &mut out);
        out
    }

    /// Check if the scalar represents zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Check if the scalar is 1
    pub fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Check if the scalar is n − 1
    pub fn is_n_minus_one(&self) -> bool {
        *self == Self::n_minus_one()
    }

    /// Number of significant bits (0 for the zero scalar)
    pub fn bit_length(&self) -> usize {
        for i in (0..8).rev() {
            if self.0[i] != 0 {
                return i * 32 + (32 - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Significant bits from the most significant set bit down to bit 0
    ///
    /// The first item is always 1 for a non-zero scalar; the zero scalar
    /// yields nothing.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.bit_length())
            .rev()
            .map(move |i| ((self.0[i / 32] >> (i % 32)) & 1) as u8)
    }

    /// Add two scalars modulo the curve order n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let mut r = [0u32; 8];
        let mut carry = 0u64;

        // Plain 256-bit add
        for ((r_limb, &a), &b) in r.iter_mut().zip(self.0.iter()).zip(other.0.iter()) {
            let tmp = a as u64 + b as u64 + carry;
            *r_limb = tmp as u32;
            carry = tmp >> 32;
        }

        // If we overflowed OR r >= n, subtract n once
        if carry == 1 || Self::geq(&r, &Self::N_LIMBS) {
            Self::sub_in_place(&mut r, &Self::N_LIMBS);
        }

        Scalar(r)
    }

    /// Compute the additive inverse (negation) modulo n
    ///
    /// Returns n − self for non-zero self, 0 for 0
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        let mut res = Self::N_LIMBS;
        Self::sub_in_place(&mut res, &self.0);
        Scalar(res)
    }

    // Private helper methods

    // n in little-endian limb order; must agree with NIST_P256.n
    const N_LIMBS: [u32; 8] = [
        0xFC63_2551,
        0xF3B9_CAC2,
        0xA717_9E84,
        0xBCE6_FAAD,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0xFFFF_FFFF,
    ];

    /// Curve order n as big-endian bytes
    pub fn order_bytes() -> [u8; P256_SCALAR_SIZE] {
        NIST_P256.n
    }

    /// Compare two limb arrays for greater-than-or-equal
    #[inline(always)]
    fn geq(a: &[u32; 8], b: &[u32; 8]) -> bool {
        for i in (0..8).rev() {
            if a[i] > b[i] {
                return true;
            }
            if a[i] < b[i] {
                return false;
            }
        }
        true // equal
    }

    /// Subtract b from a in-place (wrapping at 2²⁵⁶)
    #[inline(always)]
    fn sub_in_place(a: &mut [u32; 8], b: &[u32; 8]) {
        let mut borrow = 0u64;
        for (a_limb, &b_limb) in a.iter_mut().zip(b.iter()) {
            let tmp = (*a_limb as u64)
                .wrapping_sub(b_limb as u64)
                .wrapping_sub(borrow);
            *a_limb = tmp as u32;
            borrow = (tmp >> 63) & 1; // 1 if we wrapped
        }
    }
}
