use std::f64::consts::{FRAC_PI_2, PI};

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::dispatch::{self, BinarySignature};
use crate::products::{geometric, inner, outer, regressive};
use crate::traits::*;
use crate::*;

const BINARY_OPERATORS: [Operator; 7] = [
    Operator::Mul,
    Operator::Dot,
    Operator::Meet,
    Operator::Join,
    Operator::Sandwich,
    Operator::Distance,
    Operator::Angle,
];

/// Constructs an element of type `ty` from the first few of `coefs`.
fn element_from(ty: ElementType, coefs: &[Float; 16]) -> AnyElement {
    let mut ret = AnyElement::zero(ty);
    let n = ret.coefs().len();
    ret.coefs_mut().copy_from_slice(&coefs[..n]);
    ret
}

fn apply_binary(
    op: Operator,
    lhs: &AnyElement,
    rhs: &AnyElement,
) -> Result<AnyElement, PgaError> {
    match op {
        Operator::Mul => dispatch::mul(lhs, rhs),
        Operator::Dot => dispatch::dot(lhs, rhs),
        Operator::Meet => dispatch::meet(lhs, rhs),
        Operator::Join => dispatch::join(lhs, rhs),
        Operator::Sandwich => dispatch::sw(lhs, rhs),
        Operator::Distance => dispatch::distance(lhs, rhs).map(AnyElement::Scalar),
        Operator::Angle => dispatch::angle(lhs, rhs).map(AnyElement::Scalar),
        _ => Err(PgaError::unsupported(op, lhs.element_type())),
    }
}

/// Returns the part of an operand that takes part in an incidence product.
fn incidence_operand(e: &AnyElement) -> Multivector {
    let mv = e.to_multivector();
    match e.element_type().primary_grade() {
        Some(grade) => mv.grade_project(grade),
        None => mv,
    }
}

/// Computes a product term by term.
fn reference_product(op: Operator, lhs: &AnyElement, rhs: &AnyElement) -> Multivector {
    match op {
        Operator::Mul => lhs.to_multivector().geometric_product(&rhs.to_multivector()),
        Operator::Dot => incidence_operand(lhs).inner_product(&incidence_operand(rhs)),
        Operator::Meet => incidence_operand(lhs).outer_product(&incidence_operand(rhs)),
        Operator::Join => incidence_operand(lhs).regressive_product(&incidence_operand(rhs)),
        Operator::Sandwich => lhs.to_multivector().sandwich(&rhs.to_multivector()),
        _ => Multivector::zero(),
    }
}

fn assert_table_matches_reference(
    op: Operator,
    table: &[BinarySignature],
    a: &[Float; 16],
    b: &[Float; 16],
) {
    for &(lhs_ty, rhs_ty, out_ty) in table {
        let lhs = element_from(lhs_ty, a);
        let rhs = element_from(rhs_ty, b);
        let result = match apply_binary(op, &lhs, &rhs) {
            Ok(result) => result,
            Err(e) => panic!("{} failed: {e}", op.signature(lhs_ty, rhs_ty)),
        };
        assert_eq!(result.element_type(), out_ty);
        let expected = reference_product(op, &lhs, &rhs);
        assert!(
            approx::abs_diff_eq!(result.to_multivector(), expected, epsilon = 1e-9),
            "{}: {result} != {expected}",
            op.signature(lhs_ty, rhs_ty),
        );
    }
}

fn coefs_strategy() -> impl Strategy<Value = [Float; 16]> {
    prop::array::uniform16(-4.0..4.0_f64)
}

proptest! {
    #[test]
    fn proptest_geometric_product_formulas(a in coefs_strategy(), b in coefs_strategy()) {
        assert_table_matches_reference(Operator::Mul, dispatch::MUL_TABLE, &a, &b);
    }

    #[test]
    fn proptest_inner_product_formulas(a in coefs_strategy(), b in coefs_strategy()) {
        assert_table_matches_reference(Operator::Dot, dispatch::DOT_TABLE, &a, &b);
    }

    #[test]
    fn proptest_outer_product_formulas(a in coefs_strategy(), b in coefs_strategy()) {
        assert_table_matches_reference(Operator::Meet, dispatch::MEET_TABLE, &a, &b);
    }

    #[test]
    fn proptest_regressive_product_formulas(a in coefs_strategy(), b in coefs_strategy()) {
        assert_table_matches_reference(Operator::Join, dispatch::JOIN_TABLE, &a, &b);
    }

    #[test]
    fn proptest_sandwich_product_formulas(a in coefs_strategy(), b in coefs_strategy()) {
        assert_table_matches_reference(Operator::Sandwich, dispatch::SANDWICH_TABLE, &a, &b);
    }

    #[test]
    fn proptest_dual_formulas(a in coefs_strategy()) {
        for &(ty, out_ty) in dispatch::DUAL_TABLE {
            let e = element_from(ty, &a);
            let dual = dispatch::dual(&e);
            prop_assert_eq!(dual.map(|d| d.element_type()), Ok(out_ty));
            if let Ok(dual) = dispatch::dual(&e) {
                let expected = e.to_multivector().dual();
                prop_assert!(approx::abs_diff_eq!(dual.to_multivector(), expected));
            }
        }
    }

    #[test]
    fn proptest_grade_flip_roundtrip(a in coefs_strategy()) {
        for ty in ElementType::ALL {
            let e = element_from(ty, &a);
            prop_assert_eq!(e.involuted().involuted(), e);
            prop_assert_eq!(e.reversed().reversed(), e);
            prop_assert_eq!(e.conjugated().conjugated(), e);
            prop_assert_eq!(e.involuted().reversed(), e.conjugated());
            prop_assert_eq!(e.negated().negated(), e);
            if e.coefs().iter().any(|&c| c != 0.0) {
                prop_assert_ne!(e.negated(), e);
            }
        }
    }

    #[test]
    fn proptest_exp_log_roundtrip(coefs in prop::array::uniform6(-0.8..0.8_f64)) {
        let [d1, d2, d3, o1, o2, o3] = coefs;
        let l = Line::new(d1, d2, d3, o1, o2, o3);
        let m = functional::exp_line(&l);
        prop_assert!(approx::abs_diff_eq!(functional::log_motor(&m), l, epsilon = 1e-9));
        prop_assert!(approx::abs_diff_eq!(
            functional::exp_line(&functional::log_motor(&m)),
            m,
            epsilon = 1e-9
        ));
        prop_assert!(approx::abs_diff_eq!(
            geometric::motor_motor(&m, &m.reversed()),
            Motor::ident(),
            epsilon = 1e-9
        ));
    }

    #[test]
    fn proptest_normalize_fixed_point(a in coefs_strategy()) {
        fn check<E: Element + Normed>(e: E) -> bool {
            let n = e.normalized();
            approx::abs_diff_eq!(n.normalized(), n, epsilon = 1e-9)
        }
        prop_assume!(a[..4].iter().all(|c| c.abs() > 0.1));
        let a4 = [a[0], a[1], a[2], a[3]];
        let a8 = [a[4], a[5], a[6], a[7], a[0], a[1], a[2], a[3]];
        prop_assert!(check(Plane::from_coefs(a4)));
        prop_assert!(check(OriginLine::from_coefs(a4)));
        prop_assert!(check(Rotor::from_coefs(a4)));
        prop_assert!(check(Motor::from_coefs(a8)));
        prop_assert!(check(Line::from_coefs(a8)));
        prop_assert!(check(Point::from_coefs(a4)));
        prop_assert!(check(Translator::from_coefs(a4)));
    }

    #[test]
    fn proptest_inverse_identity(a in coefs_strategy()) {
        prop_assume!(a[..4].iter().all(|c| c.abs() > 0.1));
        let a4 = [a[0], a[1], a[2], a[3]];

        let p = Plane::from_coefs(a4);
        prop_assert!(approx::abs_diff_eq!(inner::plane_plane(&p, &p.inverted()), 1.0));
        let o = OriginLine::from_coefs(a4);
        prop_assert!(approx::abs_diff_eq!(
            geometric::origin_line_origin_line(&o, &o.inverted()),
            Rotor::ident()
        ));
        let r = Rotor::from_coefs(a4);
        prop_assert!(approx::abs_diff_eq!(
            geometric::rotor_rotor(&r, &r.inverted()),
            Rotor::ident()
        ));
        let t = Translator::from_coefs(a4);
        prop_assert!(approx::abs_diff_eq!(
            geometric::translator_translator(&t, &t.inverted()),
            Translator::ident()
        ));
        let pt = Point::from_coefs(a4);
        prop_assert!(approx::abs_diff_eq!(inner::point_point(&pt, &pt.inverted()), 1.0));
        let m = Motor::from_coefs([a[4], a[5], a[6], a[7], a[0], a[1], a[2], a[3]]);
        let identity = geometric::motor_motor(&m, &m.inverted());
        prop_assert!(approx::abs_diff_eq!(identity, Motor::ident()));
        let l = m.to_line();
        let identity = geometric::line_line(&l, &l.inverted());
        prop_assert!(approx::abs_diff_eq!(identity, Motor::ident()));
    }
}

#[test]
fn test_dispatch_totality() {
    let a: [Float; 16] = std::array::from_fn(|i| i as Float + 1.0);
    let b: [Float; 16] = std::array::from_fn(|i| 0.5 - i as Float);
    for op in BINARY_OPERATORS {
        for lhs_ty in ElementType::ALL {
            for rhs_ty in ElementType::ALL {
                let lhs = element_from(lhs_ty, &a);
                let rhs = element_from(rhs_ty, &b);
                let result = apply_binary(op, &lhs, &rhs).map(|e| e.element_type());
                let expected = if lhs_ty.is_scalar_like() {
                    Err(PgaError::unsupported(op, lhs_ty))
                } else if rhs_ty.is_scalar_like() {
                    Err(PgaError::unsupported(op, rhs_ty))
                } else {
                    dispatch::binary_result_type(op, lhs_ty, rhs_ty).ok_or(PgaError::Vanishing {
                        op,
                        lhs: lhs_ty,
                        rhs: rhs_ty,
                    })
                };
                assert_eq!(result, expected, "{}", op.signature(lhs_ty, rhs_ty));
            }
        }
    }

    for op in [Operator::Dual, Operator::Exp, Operator::Log, Operator::Sqrt] {
        for ty in ElementType::ALL {
            let e = element_from(ty, &a);
            let result = match op {
                Operator::Dual => dispatch::dual(&e),
                Operator::Exp => dispatch::exp(&e),
                Operator::Log => dispatch::log(&e),
                _ => dispatch::sqrt(&e),
            };
            let expected = dispatch::unary_result_type(op, ty)
                .ok_or_else(|| PgaError::unsupported(op, ty));
            assert_eq!(result.map(|e| e.element_type()), expected);
        }
    }
}

#[test]
fn test_self_products() {
    let p = Plane::new(3.0, 0.0, 4.0, -2.0).normalized();
    assert_approx_eq!(inner::plane_plane(&p, &p), 1.0);
    assert_approx_eq!(geometric::plane_plane(&p, &p), Motor::ident());

    let o = OriginLine::new(1.0, -2.0, 2.0).normalized();
    assert_approx_eq!(inner::origin_line_origin_line(&o, &o), -1.0);

    let pt = Point::with_weight(2.0, 4.0, -6.0, 2.0).normalized();
    assert_eq!(pt.e123(), 1.0);
    assert_eq!(pt.to_xyz(), Some([1.0, 2.0, -3.0]));

    let l = regressive::point_point(&Point::new(1.0, 2.0, 3.0), &Point::new(0.0, 5.0, -1.0))
        .normalized();
    assert_approx_eq!(inner::line_line(&l, &l), -1.0);
}

#[test]
fn test_motion_composition() {
    let r = Rotor::new(0.0, 0.0, 1.0, FRAC_PI_2);
    let t = Translator::new(1.0, 2.0, 3.0);
    let m = Motor::from_rotor_translator(r, t);
    let p = dispatch::sw(&Point::new(1.0, 0.0, 0.0).into(), &m.into()).unwrap();
    assert_approx_eq!(p, AnyElement::from(Point::new(1.0, 1.0, 3.0)));

    let m2 = dispatch::mul(&t.into(), &r.into()).unwrap();
    assert_approx_eq!(m2, AnyElement::from(m));

    // Reflecting twice across the same plane is the identity.
    let plane = AnyElement::from(Plane::new(1.0, 1.0, 0.0, -1.0).normalized());
    let q = AnyElement::from(Point::new(2.0, -1.0, 4.0));
    let reflected = dispatch::sw(&q, &plane).and_then(|e| dispatch::sw(&e, &plane));
    assert_approx_eq!(reflected.unwrap(), q);
}

#[test]
fn test_scenario_point_dot_point() {
    let p = AnyElement::from(Point::from_coefs([0.0, 0.0, 0.0, 1.0]));
    assert_eq!(dispatch::dot(&p, &p), Ok(AnyElement::Scalar(-1.0)));
}

#[test]
fn test_scenario_plane_meet_plane() {
    let a = AnyElement::from(Plane::new(1.0, 0.0, 0.0, 0.0));
    let b = AnyElement::from(Plane::new(0.0, 1.0, 0.0, 0.0));
    let mut expected = Line::zero();
    expected.set_e12(1.0);
    assert_eq!(dispatch::meet(&a, &b), Ok(expected.into()));
}

#[test]
fn test_scenario_ideal_line_normalize() {
    let l = IdealLine::from_coefs([1.0, 2.0, 3.0, 0.0]).normalized();
    let expected = IdealLine::from_coefs([0.2672612, 0.5345225, 0.8017837, 0.0]);
    assert_approx_eq!(l, expected);
    // An ideal line squares to zero, so check its dual instead.
    let dual = dispatch::dual(&l.into());
    let dot = dual.and_then(|d| dispatch::dot(&d, &d));
    assert_approx_eq!(dot.unwrap(), AnyElement::Scalar(-1.0));
}

#[test]
fn test_scenario_half_turn_rotor() {
    let r = Rotor::new(1.0, 0.0, 0.0, PI);
    assert_approx_eq!(r, Rotor::from_coefs([1.0, 0.0, 0.0, 0.0]));
}

#[test]
fn test_scenario_motor_reverse() {
    let m = Motor::from_coefs([1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, FRAC_PI_2]).normalized();
    let product = dispatch::mul(&m.into(), &m.reversed().into());
    assert_approx_eq!(product.unwrap().coefs()[7], 1.0);
}

#[test]
fn test_scenario_point_meet_point() {
    let p = AnyElement::from(Point::new(1.0, 2.0, 3.0));
    let e = dispatch::meet(&p, &p).unwrap_err();
    assert!(matches!(e, PgaError::Vanishing { .. }));
    assert!(e.to_string().contains('∧'));
}

#[test]
fn test_intersections() {
    // Three coordinate planes meet at the origin.
    let x = AnyElement::from(Plane::new(1.0, 0.0, 0.0, -1.0));
    let y = AnyElement::from(Plane::new(0.0, 1.0, 0.0, -2.0));
    let z = AnyElement::from(Plane::new(0.0, 0.0, 1.0, -3.0));
    let point = dispatch::meet(&x, &y).and_then(|l| dispatch::meet(&l, &z));
    let Ok(AnyElement::Point(point)) = point else {
        panic!("expected point");
    };
    assert_approx_eq!(point.normalized(), Point::new(1.0, 2.0, 3.0));

    // Parallel planes meet in an ideal line.
    let x2 = AnyElement::from(Plane::new(2.0, 0.0, 0.0, 5.0));
    let Ok(AnyElement::Line(l)) = dispatch::meet(&x, &x2) else {
        panic!("expected line");
    };
    assert_eq!(l.origin_part(), OriginLine::zero());
    assert!(!l.ideal_part().is_zero());

    // A plane through three points contains each of them.
    let [a, b, c] = [
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let plane = regressive::line_point(&regressive::point_point(&a, &b), &c);
    for p in [a, b, c] {
        assert_approx_eq!(outer::plane_point(&plane, &p), 0.0);
    }
    let d = dispatch::distance(&plane.into(), &Point::origin().into()).unwrap();
    assert_approx_eq!(d, 1.0 / 3.0_f64.sqrt());
}
