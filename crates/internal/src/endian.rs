//! Conversions between big-endian byte strings and little-endian u32 limbs

/// Convert `4·N` big-endian bytes into `N` little-endian limbs
///
/// Limb 0 holds the four least-significant bytes.
pub fn be_bytes_to_le_limbs<const N: usize>(bytes: &[u8]) -> [u32; N] {
    debug_assert_eq!(bytes.len(), 4 * N);
    let mut limbs = [0u32; N];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let offset = (N - 1 - i) * 4;
        *limb = u32::from_be_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ]);
    }
    limbs
}

/// Convert `N` little-endian limbs into `4·N` big-endian bytes
pub fn le_limbs_to_be_bytes<const N: usize>(limbs: &[u32; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 4 * N);
    for (i, &limb) in limbs.iter().enumerate() {
        let offset = (N - 1 - i) * 4;
        out[offset..offset + 4].copy_from_slice(&limb.to_be_bytes());
    }
}
