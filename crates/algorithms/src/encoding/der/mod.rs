//! Distinguished Encoding Rules for a small ASN.1 subset
//!
//! Every value is framed as `tag ∥ length ∥ content`. The decoder accepts
//! exactly one encoding per value:
//!
//! - lengths use the short form up to 127 and the minimal long form above,
//!   so `0x80` (indefinite), `0xFF`, a long form that fits the short form and
//!   a leading zero length octet are all rejected;
//! - INTEGER content is the shortest two's-complement form;
//! - a top-level decode consumes the whole buffer.
//!
//! Recognised tags are INTEGER (0x02), OCTET STRING (0x04) and SEQUENCE
//! (0x30). BIT STRING (0x03) is produced by [`encode_bit_string`] but is not
//! accepted by the decoder.

mod integer;
mod length;
mod signature;
mod value;

pub use signature::SignaturePair;
pub use value::Asn1Value;

use crate::ec::p256::Point;
use crate::error::{validate, Error, Result};
use integer::{decode_integer_content, encode_integer_content};
use length::{encode_length, split_content};
use p256coz_api::{DerDecode, DerEncode};
use p256coz_params::encoding::der::{
    MAX_NESTING_DEPTH, TAG_BIT_STRING, TAG_INTEGER, TAG_OCTET_STRING, TAG_SEQUENCE,
};

/// Encode a value to DER bytes
pub fn encode(value: &Asn1Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(value, &mut out);
    out
}

fn encode_into(value: &Asn1Value, out: &mut Vec<u8>) {
    match value {
        Asn1Value::Integer(i) => {
            write_tlv(TAG_INTEGER, &encode_integer_content(i), out);
        }
        Asn1Value::OctetString(bytes) => {
            write_tlv(TAG_OCTET_STRING, bytes, out);
        }
        Asn1Value::Sequence(items) => {
            let mut content = Vec::new();
            for item in items {
                encode_into(item, &mut content);
            }
            write_tlv(TAG_SEQUENCE, &content, out);
        }
    }
}

fn write_tlv(tag: u8, content: &[u8], out: &mut Vec<u8>) {
    out.push(tag);
    encode_length(content.len(), out);
    out.extend_from_slice(content);
}

/// Encode `bytes` as a BIT STRING with zero unused trailing bits
pub fn encode_bit_string(bytes: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(bytes.len() + 1);
    content.push(0x00);
    content.extend_from_slice(bytes);
    let mut out = Vec::new();
    write_tlv(TAG_BIT_STRING, &content, &mut out);
    out
}

/// Wrap the SEC1 encoding of `point` in a BIT STRING
pub fn encode_point_bit_string(point: &Point, compressed: bool) -> Vec<u8> {
    encode_bit_string(&point.serialize(compressed))
}

/// Decode exactly one value; any byte left after it is an error
pub fn decode(input: &[u8]) -> Result<Asn1Value> {
    let (value, tail) = decode_value_and_tail(input)?;
    validate::exhausted("DER value", tail.len())?;
    Ok(value)
}

/// Decode the first value in `input` and return it with the unread remainder
pub fn decode_value_and_tail(input: &[u8]) -> Result<(Asn1Value, &[u8])> {
    decode_at_depth(input, 0)
}

fn decode_at_depth(input: &[u8], depth: usize) -> Result<(Asn1Value, &[u8])> {
    let (&tag, rest) = input.split_first().ok_or(Error::TruncatedInput {
        context: "DER tag",
        needed: 1,
        available: 0,
    })?;

    match tag {
        TAG_INTEGER => {
            let (content, tail) = split_content(rest)?;
            Ok((Asn1Value::Integer(decode_integer_content(content)?), tail))
        }
        TAG_OCTET_STRING => {
            let (content, tail) = split_content(rest)?;
            Ok((Asn1Value::OctetString(content.to_vec()), tail))
        }
        TAG_SEQUENCE => {
            validate::nesting("DER SEQUENCE", depth + 1, MAX_NESTING_DEPTH)?;
            let (mut content, tail) = split_content(rest)?;
            let mut items = Vec::new();
            while !content.is_empty() {
                let (item, remaining) = decode_at_depth(content, depth + 1)?;
                items.push(item);
                content = remaining;
            }
            Ok((Asn1Value::Sequence(items), tail))
        }
        _ => Err(Error::TypeMismatch {
            context: "DER tag",
            expected: "INTEGER, OCTET STRING or SEQUENCE",
        }),
    }
}

impl DerEncode for Asn1Value {
    fn to_der(&self) -> Vec<u8> {
        encode(self)
    }
}

impl DerDecode for Asn1Value {
    fn from_der(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }
}
