//! Wire encodings beyond the SEC1 point form
//!
//! Only DER is provided: a canonical codec for INTEGER, OCTET STRING and
//! SEQUENCE values, plus BIT STRING on the encode side.

pub mod der;

pub use der::{
    decode, decode_value_and_tail, encode, encode_bit_string, encode_point_bit_string,
    Asn1Value, SignaturePair,
};
