//! `SEQUENCE { INTEGER r, INTEGER s }` signature components

use super::{decode, encode, Asn1Value};
use crate::error::{Error, Result, ResultExt};
use num_bigint::{BigInt, Sign};
use num_traits::Signed;
use p256coz_api::{DerDecode, DerEncode};

/// Signature component pair (r, s), both non-negative
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignaturePair {
    /// First component
    pub r: BigInt,
    /// Second component
    pub s: BigInt,
}

impl SignaturePair {
    /// Build from unsigned big-endian component bytes
    pub fn from_be_bytes(r: &[u8], s: &[u8]) -> Self {
        SignaturePair {
            r: BigInt::from_bytes_be(Sign::Plus, r),
            s: BigInt::from_bytes_be(Sign::Plus, s),
        }
    }

    /// Serialize as a DER SEQUENCE of two INTEGERs
    pub fn to_der(&self) -> Vec<u8> {
        encode(&Asn1Value::Sequence(vec![
            Asn1Value::Integer(self.r.clone()),
            Asn1Value::Integer(self.s.clone()),
        ]))
    }

    /// Parse from DER; the sequence must hold exactly two non-negative INTEGERs
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let value = decode(der).with_context("signature DER")?;
        let items = value.as_sequence().with_context("signature DER")?;
        let (r, s) = match items {
            [r, s] => (component(r)?, component(s)?),
            _ => {
                return Err(Error::TypeMismatch {
                    context: "signature DER",
                    expected: "SEQUENCE of two INTEGERs",
                })
            }
        };
        Ok(SignaturePair { r, s })
    }
}

fn component(value: &Asn1Value) -> Result<BigInt> {
    let i = value.as_integer().with_context("signature component")?;
    if i.is_negative() {
        return Err(Error::TypeMismatch {
            context: "signature component",
            expected: "non-negative INTEGER",
        });
    }
    Ok(i.clone())
}

impl DerEncode for SignaturePair {
    fn to_der(&self) -> Vec<u8> {
        SignaturePair::to_der(self)
    }
}

impl DerDecode for SignaturePair {
    fn from_der(bytes: &[u8]) -> Result<Self> {
        SignaturePair::from_der(bytes)
    }
}
