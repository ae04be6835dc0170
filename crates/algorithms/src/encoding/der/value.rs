//! The decoded ASN.1 value tree

use crate::error::{Error, Result};
use num_bigint::BigInt;

/// One DER value: INTEGER, OCTET STRING or SEQUENCE of values
///
/// Equality is structural; two values are equal exactly when their DER
/// encodings are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Asn1Value {
    /// Arbitrary-precision signed integer
    Integer(BigInt),
    /// Raw byte string
    OctetString(Vec<u8>),
    /// Ordered list of values
    Sequence(Vec<Asn1Value>),
}

impl Asn1Value {
    /// Borrow the integer, or fail with `TypeMismatch`
    pub fn as_integer(&self) -> Result<&BigInt> {
        match self {
            Asn1Value::Integer(i) => Ok(i),
            _ => Err(Error::TypeMismatch {
                context: "ASN.1 value",
                expected: "INTEGER",
            }),
        }
    }

    /// Borrow the octet string, or fail with `TypeMismatch`
    pub fn as_octet_string(&self) -> Result<&[u8]> {
        match self {
            Asn1Value::OctetString(bytes) => Ok(bytes),
            _ => Err(Error::TypeMismatch {
                context: "ASN.1 value",
                expected: "OCTET STRING",
            }),
        }
    }

    /// Borrow the sequence elements, or fail with `TypeMismatch`
    pub fn as_sequence(&self) -> Result<&[Asn1Value]> {
        match self {
            Asn1Value::Sequence(items) => Ok(items),
            _ => Err(Error::TypeMismatch {
                context: "ASN.1 value",
                expected: "SEQUENCE",
            }),
        }
    }
}

impl From<BigInt> for Asn1Value {
    fn from(value: BigInt) -> Self {
        Asn1Value::Integer(value)
    }
}

impl From<i64> for Asn1Value {
    fn from(value: i64) -> Self {
        Asn1Value::Integer(BigInt::from(value))
    }
}

impl From<Vec<u8>> for Asn1Value {
    fn from(bytes: Vec<u8>) -> Self {
        Asn1Value::OctetString(bytes)
    }
}

impl From<&[u8]> for Asn1Value {
    fn from(bytes: &[u8]) -> Self {
        Asn1Value::OctetString(bytes.to_vec())
    }
}

impl From<Vec<Asn1Value>> for Asn1Value {
    fn from(items: Vec<Asn1Value>) -> Self {
        Asn1Value::Sequence(items)
    }
}
