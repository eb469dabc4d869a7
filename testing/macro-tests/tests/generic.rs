use sturdy::prelude::*;
use sturdy_macro_tests::{Cents, Meters, Radian, Ratio, Scaled, UserId};

fn midpoint<T: Arithmetic>(a: T, b: T) -> T {
    (a + b) / 2i32
}

fn clamp<T: Comparison>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

fn total<T: Addition + Default>(items: impl IntoIterator<Item = T>) -> T {
    items.into_iter().fold(T::default(), |acc, x| acc + x)
}

fn same<T: Equality>(a: &T, b: &T) -> bool {
    a == b
}

fn halve<T: DivByFloat>(x: T) -> T {
    x / 2.0f64
}

fn raw<T: Skill>(x: &T) -> &T::Repr {
    x.value()
}

#[test]
fn arithmetic_bound_covers_scalar_division() {
    assert_eq!(midpoint(Radian::new(1.0), Radian::new(2.0)), Radian::new(1.5));
    assert_eq!(midpoint(Ratio::new(-4.0), Ratio::new(4.0)), Ratio::new(0.0));
}

#[test]
fn comparison_bound_orders_any_comparable_type() {
    assert_eq!(clamp(Meters::new(7.5), Meters::new(0.0), Meters::new(5.0)), Meters::new(5.0));
    assert_eq!(clamp(Cents::new(-3), Cents::new(0), Cents::new(100)), Cents::new(0));
    assert_eq!(clamp(Cents::new(42), Cents::new(0), Cents::new(100)), Cents::new(42));
}

#[test]
fn addition_bound_folds() {
    assert_eq!(total([1, 2, 3].map(Cents::new)), Cents::new(6));
    assert_eq!(total(Vec::<Meters>::new()), Meters::new(0.0));
}

#[test]
fn equality_bound_uses_representation_equality() {
    assert!(same(&UserId::new(3), &UserId::new(3)));
    assert!(same(&Radian::new(0.1 + 0.2), &Radian::new(0.3)));
}

#[test]
fn float_scalar_bound() {
    assert_eq!(halve(Radian::new(3.0)), Radian::new(1.5));
    assert_eq!(halve(Ratio::new(-1.0)), Ratio::new(-0.5));
}

#[test]
fn skill_access_is_generic() {
    assert_eq!(*raw(&Cents::new(12)), 12);
    assert_eq!(raw(&Scaled::new("tag")), &"tag");
}

#[test]
fn generic_strong_type_picks_up_skills_per_representation() {
    let a = Scaled::new(1.5f64) + Scaled::new(2.0);
    let b = 2.0f32 * Scaled::new(1.75f64);
    let c = Scaled::new(7i64) * 0.5f64;

    assert_eq!(a, Scaled::new(3.5));
    assert_eq!(b, Scaled::new(3.5));
    assert_eq!(c, Scaled::new(3));
}
