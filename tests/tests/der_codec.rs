//! DER codec vectors and property tests

use num_bigint::BigInt;
use p256coz_algorithms::der::{decode, decode_value_and_tail, encode, Asn1Value, SignaturePair};
use p256coz_algorithms::ec::p256::{base_point_g, Point};
use p256coz_api::{DerDecode, DerEncode};
use p256coz_tests::vectors::{DER_INTEGERS, DER_REJECTS};
use proptest::prelude::*;

#[test]
fn integer_vectors() {
    for (value, der_hex) in DER_INTEGERS {
        let der = hex::decode(der_hex).unwrap();
        assert_eq!(encode(&Asn1Value::from(value)), der, "{}", value);
        assert_eq!(decode(&der).unwrap(), Asn1Value::from(value));
    }
}

#[test]
fn reject_vectors() {
    for (der_hex, kind) in DER_REJECTS {
        let der = hex::decode(der_hex).unwrap();
        let err = decode(&der).unwrap_err();
        assert_eq!(format!("{:?}", err.kind()), kind, "{}", der_hex);
    }
}

#[test]
fn sequence_of_one_and_minus_one() {
    let value = Asn1Value::Sequence(vec![Asn1Value::from(1i64), Asn1Value::from(-1i64)]);
    assert_eq!(hex::encode(encode(&value)), "30060201010201ff");
}

#[test]
fn point_inside_structures() {
    // SEQUENCE { OCTET STRING point, INTEGER k } carried through DER and back
    let g = base_point_g();
    let value = Asn1Value::Sequence(vec![
        Asn1Value::OctetString(g.serialize_compressed()),
        Asn1Value::from(7i64),
    ]);
    let der = value.to_der();
    let decoded = Asn1Value::from_der(&der).unwrap();
    let items = decoded.as_sequence().unwrap();
    let point = Point::deserialize(items[0].as_octet_string().unwrap()).unwrap();
    assert_eq!(point, g);
    assert_eq!(items[1].as_integer().unwrap(), &BigInt::from(7));
}

fn any_value() -> impl Strategy<Value = Asn1Value> {
    let leaf = prop_oneof![
        any::<i128>().prop_map(|i| Asn1Value::Integer(BigInt::from(i))),
        prop::collection::vec(any::<u8>(), 0..300).prop_map(Asn1Value::OctetString),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Asn1Value::Sequence)
    })
}

proptest! {
    #[test]
    fn integer_round_trip(i in any::<i128>()) {
        let value = Asn1Value::Integer(BigInt::from(i));
        let der = encode(&value);
        prop_assert_eq!(decode(&der).unwrap(), value);
        // content is minimal: one octet longer than needed would be redundant
        let content = &der[2..];
        if content.len() > 1 {
            let redundant = (content[0] == 0x00 && content[1] & 0x80 == 0)
                || (content[0] == 0xFF && content[1] & 0x80 != 0);
            prop_assert!(!redundant);
        }
    }

    #[test]
    fn big_integer_round_trip(bytes in prop::collection::vec(any::<u8>(), 1..200), negative in any::<bool>()) {
        let mut i = BigInt::from_bytes_be(num_bigint::Sign::Plus, &bytes);
        if negative {
            i = -i;
        }
        let value = Asn1Value::Integer(i);
        prop_assert_eq!(decode(&encode(&value)).unwrap(), value);
    }

    #[test]
    fn octet_string_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..1000)) {
        let value = Asn1Value::OctetString(bytes);
        prop_assert_eq!(decode(&encode(&value)).unwrap(), value);
    }

    #[test]
    fn tree_round_trip(value in any_value()) {
        prop_assert_eq!(decode(&encode(&value)).unwrap(), value);
    }

    #[test]
    fn trailing_bytes_rejected(value in any_value(), extra in prop::collection::vec(any::<u8>(), 1..4)) {
        let mut der = encode(&value);
        let len = der.len();
        der.extend_from_slice(&extra);
        prop_assert!(decode(&der).is_err());
        let (decoded, tail) = decode_value_and_tail(&der).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(tail, &der[len..]);
    }

    #[test]
    fn decoder_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn signature_round_trip(r in any::<[u8; 32]>(), s in any::<[u8; 32]>()) {
        let sig = SignaturePair::from_be_bytes(&r, &s);
        prop_assert_eq!(SignaturePair::from_der(&sig.to_der()).unwrap(), sig);
    }
}
