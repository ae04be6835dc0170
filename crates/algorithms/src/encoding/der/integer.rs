//! INTEGER content octets: shortest two's-complement, big-endian

use crate::error::{validate, Result};
use num_bigint::BigInt;

/// Minimal two's-complement content octets for `value`
///
/// Zero encodes as a single 0x00; a positive value whose top bit would be
/// set gains a leading 0x00, a negative one whose top bit would be clear
/// gains a leading 0xFF.
pub(crate) fn encode_integer_content(value: &BigInt) -> Vec<u8> {
    value.to_signed_bytes_be()
}

/// Parse INTEGER content octets, rejecting redundant leading octets
pub(crate) fn decode_integer_content(content: &[u8]) -> Result<BigInt> {
    validate::minimal_integer(content, "DER INTEGER")?;
    Ok(BigInt::from_signed_bytes_be(content))
}
