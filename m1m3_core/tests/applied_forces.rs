use m1m3_core::AppliedForces;
use m1m3_fatable::{FATABLE_XFA, FATABLE_YFA, FATABLE_ZFA};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

prop_compose! {
    fn forces()(
        x in prop::collection::vec(-1000.0f64..1000.0, FATABLE_XFA),
        y in prop::collection::vec(-1000.0f64..1000.0, FATABLE_YFA),
        z in prop::collection::vec(-3000.0f64..3000.0, FATABLE_ZFA),
        cog in prop::option::of(prop::array::uniform3(-1.0f64..1.0)),
    ) -> AppliedForces {
        AppliedForces::new(x, y, z, cog).unwrap()
    }
}

proptest! {
    #[test]
    fn totals_are_sums(f in forces()) {
        let sx: f64 = f.x_forces().iter().sum();
        let sy: f64 = f.y_forces().iter().sum();
        let sz: f64 = f.z_forces().iter().sum();
        prop_assert!(close(f.fx(), sx));
        prop_assert!(close(f.fy(), sy));
        prop_assert!(close(f.fz(), sz));
        let magnitude = (sx * sx + sy * sy + sz * sz).sqrt();
        prop_assert!(close(f.force_magnitude(), magnitude));
    }

    #[test]
    fn addition_is_componentwise(a in forces(), b in forces()) {
        let s = &a + &b;
        for i in 0..FATABLE_XFA {
            prop_assert_eq!(s.x_forces()[i], a.x_forces()[i] + b.x_forces()[i]);
        }
        for i in 0..FATABLE_YFA {
            prop_assert_eq!(s.y_forces()[i], a.y_forces()[i] + b.y_forces()[i]);
        }
        for i in 0..FATABLE_ZFA {
            prop_assert_eq!(s.z_forces()[i], a.z_forces()[i] + b.z_forces()[i]);
        }
    }

    #[test]
    fn addition_commutes_on_vectors(a in forces(), b in forces()) {
        let ab = &a + &b;
        let ba = &b + &a;
        prop_assert_eq!(ab.x_forces(), ba.x_forces());
        prop_assert_eq!(ab.y_forces(), ba.y_forces());
        prop_assert_eq!(ab.z_forces(), ba.z_forces());
    }

    #[test]
    fn addition_associates_within_rounding(a in forces(), b in forces(), c in forces()) {
        let left = (&a + &b) + &c;
        let right = a.clone() + (&b + &c);
        for (l, r) in left.z_forces().iter().zip(right.z_forces()) {
            prop_assert!(close(*l, *r));
        }
        prop_assert!(close(left.mx(), right.mx()));
        prop_assert!(close(left.my(), right.my()));
    }

    #[test]
    fn moments_are_linear(a in forces(), b in forces()) {
        let b = AppliedForces::new(
            b.x_forces().to_vec(),
            b.y_forces().to_vec(),
            b.z_forces().to_vec(),
            a.center_of_gravity(),
        ).unwrap();
        let s = &a + &b;
        for (t, (ta, tb)) in s
            .totals()
            .as_array()
            .iter()
            .zip(a.totals().as_array().iter().zip(b.totals().as_array()))
        {
            prop_assert!((t - (ta + tb)).abs() <= 1e-6 * (1.0 + ta.abs() + tb.abs()));
        }
    }

    #[test]
    fn cleared_quadrants_sum_to_original(f in forces()) {
        let q13 = f.clear_quadrants(&[1, 3]);
        let q24 = f.clear_quadrants(&[2, 4]);
        let s = &q13 + &q24;
        prop_assert_eq!(s.z_forces(), f.z_forces());
        let all = f.clear_quadrants(&[1, 2, 3, 4]);
        prop_assert_eq!(all.z_forces(), &[0.0; FATABLE_ZFA][..]);
    }
}
