use sturdy::prelude::*;
use sturdy_macro_tests::{Cents, Label, Radian, Ratio, UserId};

#[test]
fn epsilon_boundary_f64() {
    let one = Radian::new(1.0);

    assert_eq!(one, Radian::new(1.0 + f64::EPSILON / 2.0));
    assert_ne!(one, Radian::new(1.0 + f64::EPSILON * 10.0));
}

#[test]
fn epsilon_boundary_f32() {
    let one = Ratio::new(1.0);

    assert_eq!(one, Ratio::new(1.0 + f32::EPSILON / 2.0));
    assert_ne!(one, Ratio::new(1.0 + f32::EPSILON * 10.0));
}

#[test]
fn tolerance_is_relative_not_absolute() {
    // one ulp apart at large magnitude is equal, far beyond any absolute epsilon
    let big = 1.0e15_f64;
    let next = f64::from_bits(big.to_bits() + 1);
    assert_eq!(Radian::new(big), Radian::new(next));

    // tiny values differing by far less than EPSILON are still distinct
    assert_ne!(Radian::new(1.0e-20), Radian::new(2.0e-20));
}

#[test]
fn reflexive_and_symmetric() {
    let values = [0.0, -0.0, 1.0, 0.1 + 0.2, 0.3, -7.25, 1.0e300];

    for a in values {
        assert_eq!(Radian::new(a), Radian::new(a));
        for b in values {
            assert_eq!(Radian::new(a) == Radian::new(b), Radian::new(b) == Radian::new(a));
        }
    }
}

#[test]
fn ne_is_negation_of_eq() {
    let pairs = [(1.0, 1.0), (1.0, 2.0), (f64::NAN, f64::NAN), (0.0, -0.0)];

    for (a, b) in pairs {
        let (a, b) = (Radian::new(a), Radian::new(b));
        assert_eq!(a != b, !(a == b));
    }
}

#[test]
fn nan_semantics_are_preserved() {
    let nan = Radian::new(f64::NAN);

    assert!(nan != nan);
    assert!(!(nan == Radian::new(0.0)));
}

#[test]
fn exact_equality_for_non_float() {
    assert_eq!(Cents::new(100), Cents::new(100));
    assert_ne!(Cents::new(100), Cents::new(101));
    assert_eq!(UserId::new(7), UserId::new(7));
    assert_eq!(Label::new("a".into()), Label::new("a".into()));
    assert_ne!(Label::new("a".into()), Label::new("A".into()));
}
