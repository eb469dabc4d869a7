use sturdy::prelude::*;
use sturdy_macro_tests::{Cents, Meters, Radian, Ratio};

#[test]
fn value_forms_round_trip_through_the_representation() {
    let (x, y) = (2.75_f64, -0.5_f64);

    assert_eq!(*(Meters::new(x) + Meters::new(y)).get(), x + y);
    assert_eq!(*(Meters::new(x) - Meters::new(y)).get(), x - y);
    assert_eq!(*(Meters::new(x) * Meters::new(y)).get(), x * y);
    assert_eq!(*(Meters::new(x) / Meters::new(y)).get(), x / y);
    assert_eq!(*(-Meters::new(x)).get(), -x);

    assert_eq!((Cents::new(1_250) + Cents::new(-300)).into_inner(), 950);
    assert_eq!((Cents::new(1_250) - Cents::new(-300)).into_inner(), 1_550);
    assert_eq!((-Cents::new(7)).into_inner(), -7);
}

#[test]
fn compound_forms_equal_value_forms() {
    let a = Radian::new(1.2);
    let b = Radian::new(0.3);

    let mut r = a;
    r += b;
    assert_eq!(r, a + b);

    let mut r = a;
    r -= b;
    assert_eq!(r, a - b);

    let mut r = a;
    r *= b;
    assert_eq!(r, a * b);

    let mut r = a;
    r /= b;
    assert_eq!(r, a / b);
}

#[test]
fn operands_are_left_untouched() {
    let a = Ratio::new(3.0);
    let b = Ratio::new(4.0);
    let _ = a + b;
    let _ = a * b;

    assert_eq!(a, Ratio::new(3.0));
    assert_eq!(b, Ratio::new(4.0));
}

#[test]
fn chained_expressions_stay_strong() {
    let sides = [3.0, 4.0].map(Meters::new);
    let hypotenuse_sq = sides[0] * sides[0] + sides[1] * sides[1];

    assert_eq!(hypotenuse_sq, Meters::new(25.0));
}

#[test]
fn sum_of_strong_values() {
    let ledger = [120, -45, 300].map(Cents::new);

    assert_eq!(ledger.into_iter().sum::<Cents>(), Cents::new(375));
    assert_eq!(std::iter::empty::<Cents>().sum::<Cents>(), Cents::default());
}

#[test]
fn float_division_by_zero_follows_ieee() {
    let inf = Radian::new(1.0) / Radian::new(0.0);
    let nan = Radian::new(0.0) / Radian::new(0.0);

    assert!(inf.get().is_infinite());
    assert!(nan.get().is_nan());
}

#[test]
#[should_panic(expected = "divide by zero")]
fn integer_division_by_zero_panics() {
    let _ = Cents::new(10) / 0i64;
}
