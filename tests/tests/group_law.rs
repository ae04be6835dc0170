//! Property tests for the affine group law

use p256coz_algorithms::ec::p256::{base_point_g, Point, Scalar};
use proptest::prelude::*;

fn any_point() -> impl Strategy<Value = Point> {
    any::<[u8; 32]>().prop_map(|k| base_point_g().mul(&Scalar::new(k)).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn results_stay_on_curve(p in any_point(), q in any_point()) {
        for r in [p.add(&q), p.double(), p.negate()] {
            if let Some((x, y)) = r.coordinates() {
                prop_assert!(Point::is_on_curve(x, y));
            }
        }
    }

    #[test]
    fn identity_is_neutral(p in any_point()) {
        prop_assert_eq!(p.add(&Point::identity()), p.clone());
        prop_assert_eq!(Point::identity().add(&p), p.clone());
    }

    #[test]
    fn inverse_cancels(p in any_point()) {
        prop_assert!(p.add(&p.negate()).is_identity());
        prop_assert_eq!(p.negate().negate(), p);
    }

    #[test]
    fn commutative(p in any_point(), q in any_point()) {
        prop_assert_eq!(p.add(&q), q.add(&p));
    }

    #[test]
    fn associative(p in any_point(), q in any_point(), r in any_point()) {
        prop_assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
    }

    #[test]
    fn doubling_is_self_addition(p in any_point()) {
        prop_assert_eq!(p.double(), p.add(&p));
        prop_assert_eq!(p.double(), p.mul(&Scalar::from_u64(2)).unwrap());
    }
}
