//! DER length octets

use crate::error::{validate, Error, Result};
use p256coz_params::encoding::der::{
    INDEFINITE_LENGTH, LONG_FORM_FLAG, RESERVED_LENGTH, SHORT_FORM_MAX,
};

const CONTEXT: &str = "DER length";

/// Append the minimal length encoding of `len` to `out`
///
/// 0..=127 is a single octet; anything larger is `0x80 | k` followed by the
/// k big-endian octets of `len`, with no leading zero octet.
pub(crate) fn encode_length(len: usize, out: &mut Vec<u8>) {
    if len <= SHORT_FORM_MAX {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let octets = &bytes[skip..];
    // at most size_of::<usize>() octets, always below 0x7F
    out.push(LONG_FORM_FLAG | octets.len() as u8);
    out.extend_from_slice(octets);
}

/// Decode a length field, returning the length and the bytes after it
pub(crate) fn decode_length(input: &[u8]) -> Result<(usize, &[u8])> {
    let (&first, rest) = input.split_first().ok_or(Error::TruncatedInput {
        context: CONTEXT,
        needed: 1,
        available: 0,
    })?;
    validate::length_form(first != INDEFINITE_LENGTH && first != RESERVED_LENGTH, CONTEXT)?;

    if usize::from(first) <= SHORT_FORM_MAX {
        return Ok((usize::from(first), rest));
    }

    let count = usize::from(first & !LONG_FORM_FLAG);
    validate::available(CONTEXT, count, rest.len())?;
    let (octets, tail) = rest.split_at(count);

    // a single octet below 0x80 belonged in the short form
    validate::length_form(!(count == 1 && usize::from(octets[0]) <= SHORT_FORM_MAX), CONTEXT)?;
    validate::length_form(octets[0] != 0x00, CONTEXT)?;
    validate::length_form(count <= core::mem::size_of::<usize>(), CONTEXT)?;

    let len = octets
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
    Ok((len, tail))
}

/// Decode a length field and split off exactly that many content bytes
pub(crate) fn split_content(input: &[u8]) -> Result<(&[u8], &[u8])> {
    let (len, rest) = decode_length(input)?;
    validate::available("DER content", len, rest.len())?;
    Ok(rest.split_at(len))
}
