//! SEC1 point encoding round trips and rejections

use p256coz_algorithms::ec::p256::{base_point_g, Point, Scalar};
use p256coz_api::error::ErrorKind;
use p256coz_api::PointCodec;
use p256coz_params::NIST_P256;
use proptest::prelude::*;

fn any_point() -> impl Strategy<Value = Point> {
    prop_oneof![
        1 => Just(Point::identity()),
        15 => any::<[u8; 32]>().prop_map(|k| base_point_g().mul(&Scalar::new(k)).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn round_trip_both_forms(p in any_point()) {
        for compressed in [false, true] {
            let bytes = p.to_sec1(compressed);
            prop_assert_eq!(Point::from_sec1(&bytes).unwrap(), p.clone());
        }
    }

    #[test]
    fn compressed_forms_have_opposite_parity(p in any_point()) {
        prop_assume!(!p.is_identity());
        let mut even = p.serialize_compressed();
        even[0] = 0x02;
        let mut odd = even.clone();
        odd[0] = 0x03;

        let a = Point::deserialize(&even).unwrap();
        let b = Point::deserialize(&odd).unwrap();
        prop_assert_eq!(a.x_coordinate_bytes(), b.x_coordinate_bytes());
        prop_assert_eq!(a.y_coordinate_bytes().unwrap()[31] & 1, 0);
        prop_assert_eq!(b.y_coordinate_bytes().unwrap()[31] & 1, 1);
        prop_assert_eq!(a.negate(), b);
    }

    #[test]
    fn wrong_lengths_rejected(len in 0usize..100, tag in prop_oneof![Just(0u8), Just(2), Just(3), Just(4)]) {
        prop_assume!(!matches!((tag, len), (0, 1) | (2, 33) | (3, 33) | (4, 65)));
        let mut bytes = vec![0x11u8; len];
        if let Some(first) = bytes.first_mut() {
            *first = tag;
        }
        prop_assert_eq!(
            Point::deserialize(&bytes).unwrap_err().kind(),
            ErrorKind::InvalidPointEncoding
        );
    }

    #[test]
    fn tampered_uncompressed_rejected(p in any_point(), idx in 1usize..65, bit in 0u8..8) {
        prop_assume!(!p.is_identity());
        let mut bytes = p.serialize_uncompressed();
        bytes[idx] ^= 1 << bit;
        let kind = Point::deserialize(&bytes).unwrap_err().kind();
        prop_assert!(matches!(kind, ErrorKind::PointNotOnCurve | ErrorKind::InvalidPointEncoding));
    }
}

#[test]
fn infinity_is_one_zero_byte() {
    assert_eq!(Point::identity().to_sec1(false), [0x00]);
    assert_eq!(Point::identity().to_sec1(true), [0x00]);
    assert!(Point::from_sec1(&[0x00]).unwrap().is_identity());
}

#[test]
fn non_residue_x_rejected() {
    let mut bytes = base_point_g().serialize_compressed();
    // x = 1 has no point on P-256
    bytes[1..].fill(0);
    bytes[32] = 1;
    assert_eq!(
        Point::deserialize(&bytes).unwrap_err().kind(),
        ErrorKind::NoSquareRoot
    );
}

#[test]
fn generator_matches_domain_parameters() {
    let mut encoded = vec![0x04];
    encoded.extend_from_slice(&NIST_P256.g_x);
    encoded.extend_from_slice(&NIST_P256.g_y);
    assert_eq!(Point::from_sec1(&encoded).unwrap(), base_point_g());
    assert_eq!(base_point_g().serialize_uncompressed(), encoded);
}
