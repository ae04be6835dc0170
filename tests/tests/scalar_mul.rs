//! Scalar multiplication against known answers and the reference ladder

use p256coz_algorithms::ec::p256::{self, base_point_g, Point, Scalar};
use p256coz_tests::vectors::{co_z_vectors, N_MINUS_ONE, SMALL_MULTIPLES};
use p256coz_tests::{point_from_hex, scalar_from_hex};
use proptest::prelude::*;

#[test]
fn co_z_known_answers() {
    for v in co_z_vectors() {
        let result = p256::scalar_mult_base_g(&scalar_from_hex(v.k)).unwrap();
        assert_eq!(result, point_from_hex(v.x, v.y), "k = {}", v.k);
    }
}

#[test]
fn small_multiples() {
    for v in SMALL_MULTIPLES {
        let expected = point_from_hex(v.x, v.y);
        let k = scalar_from_hex(v.k);
        assert_eq!(base_point_g().mul(&k).unwrap(), expected);
        assert_eq!(base_point_g().mul_reference(&k), expected);
    }
}

#[test]
fn self_test_succeeds() {
    p256::self_test().unwrap();
}

#[test]
fn order_minus_one_negates() {
    let g = base_point_g();
    let k = scalar_from_hex(N_MINUS_ONE);
    assert!(k.is_n_minus_one());
    assert_eq!(g.mul(&k).unwrap(), g.negate());
    assert!(g.mul(&k).unwrap().add(&g).is_identity());
}

#[test]
fn scalars_at_and_above_order() {
    let g = base_point_g();
    let n = Scalar::order_bytes();
    assert!(g.mul(&Scalar::new(n)).unwrap().is_identity());

    // 2²⁵⁶ − 1 ≡ 2²⁵⁶ − 1 − n
    let all_ones = Scalar::new([0xFF; 32]);
    let reduced = Scalar::from_be_bytes_reduced(&[0xFF; 32]);
    assert_eq!(all_ones, reduced);
    assert_eq!(g.mul(&all_ones).unwrap(), g.mul_reference(&all_ones));
}

#[test]
fn identity_input() {
    let k = scalar_from_hex(SMALL_MULTIPLES[2].k);
    assert!(Point::identity().mul(&k).unwrap().is_identity());
    assert!(Point::identity().mul_reference(&k).is_identity());
}

fn any_scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>().prop_map(Scalar::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn co_z_matches_reference(k in any_scalar()) {
        let g = base_point_g();
        prop_assert_eq!(g.mul(&k).unwrap(), g.mul_reference(&k));
    }

    #[test]
    fn reduction_mod_n_is_invisible(k in any_scalar()) {
        // k and k + n give the same point
        let mut wide = vec![0u8];
        wide.extend_from_slice(&k.serialize());
        let n = Scalar::order_bytes();
        let mut carry = 0u16;
        for i in (0..32).rev() {
            let s = wide[i + 1] as u16 + n[i] as u16 + carry;
            wide[i + 1] = s as u8;
            carry = s >> 8;
        }
        wide[0] = carry as u8;
        let k_plus_n = Scalar::from_be_bytes_reduced(&wide);
        prop_assert_eq!(k_plus_n, k);
        prop_assert_eq!(base_point_g().mul(&k_plus_n).unwrap(), base_point_g().mul(&k).unwrap());
    }

    #[test]
    fn distributes_over_scalar_addition(a in any_scalar(), b in any_scalar()) {
        let g = base_point_g();
        let lhs = g.mul(&a.add_mod_n(&b)).unwrap();
        let rhs = g.mul(&a).unwrap().add(&g.mul(&b).unwrap());
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn composes(a in 2u64..1 << 20, b in any_scalar()) {
        // a·(b·G) = b·(a·G)
        let g = base_point_g();
        let a = Scalar::from_u64(a);
        let left = g.mul(&b).unwrap().mul(&a).unwrap();
        let right = g.mul(&a).unwrap().mul(&b).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn short_scalars_match_padded(bytes in prop::collection::vec(any::<u8>(), 0..8)) {
        let k = Scalar::from_be_bytes_reduced(&bytes);
        let mut padded = [0u8; 32];
        padded[32 - bytes.len()..].copy_from_slice(&bytes);
        prop_assert_eq!(k, Scalar::new(padded));
    }
}
