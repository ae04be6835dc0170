//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time selection between two limb arrays
pub fn ct_select_limbs<const N: usize>(a: &[u32; N], b: &[u32; N], choice: Choice) -> [u32; N] {
    let mut out = [0u32; N];
    for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *out_limb = u32::conditional_select(a_limb, b_limb, choice);
    }
    out
}

/// Constant-time conditional swap of two limb arrays
///
/// Both arrays are rewritten on every call; only the values differ.
pub fn ct_swap_limbs<const N: usize>(a: &mut [u32; N], b: &mut [u32; N], choice: Choice) {
    for (a_limb, b_limb) in a.iter_mut().zip(b.iter_mut()) {
        u32::conditional_swap(a_limb, b_limb, choice);
    }
}
