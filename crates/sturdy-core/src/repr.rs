//! Representation-level behaviour the skills rely on.
//!
//! `ReprEq` decides what "equal" means for a stored value; `Scale<S>` is how
//! a stored value is multiplied or divided by one of the supported scalar
//! widths.

use num_traits::{AsPrimitive, Float};

///
/// ReprEq
///
/// Equality used by the `eq` and `cmp` skills.
/// Exact by default; floating-point representations override it with a
/// scaled-epsilon comparison.
///

pub trait ReprEq: PartialEq {
    fn repr_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Scaled-epsilon equality: `|a - b| <= EPSILON * max(|a|, |b|)`.
///
/// Any NaN operand makes the comparison false, and so does `inf` against
/// `inf` since their difference is NaN.
#[must_use]
pub fn float_eq<F: Float>(a: F, b: F) -> bool {
    let scaled_eps = F::epsilon() * a.abs().max(b.abs());

    (a - b).abs() <= scaled_eps
}

impl ReprEq for f32 {
    fn repr_eq(&self, other: &Self) -> bool {
        float_eq(*self, *other)
    }
}

impl ReprEq for f64 {
    fn repr_eq(&self, other: &Self) -> bool {
        float_eq(*self, *other)
    }
}

macro_rules! impl_repr_eq_exact {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl ReprEq for $type {}
        )*
    };
}

impl_repr_eq_exact!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
    &'static str,
);

///
/// Scale
///
/// Multiplication and division of a representation by the scalar `S`.
///
/// Only the fixed scalar set `i32`, `u32`, `i64`, `f32`, `f64` is wired into
/// the `mul_f`/`mul_i`/`div_f`/`div_i` skills.
///
/// - float representations convert the scalar with `as` and operate natively
/// - integer representations with an integer scalar compute exactly in
///   `i128`; a result outside the representation panics with the same
///   message as native overflow, whatever the overflow-checks setting, and a
///   zero divisor panics with the native division-by-zero message
/// - integer representations with a float scalar compute in `f64` and
///   convert back with `as` (saturating, NaN becomes zero); beyond `2^53`
///   the representation is rounded on the way in, so `x * 1.0` may differ
///   from `x`
///
/// `u128` is not a supported representation since it does not fit `i128`.
///

pub trait Scale<S>: Sized {
    #[must_use]
    fn scale(self, scalar: S) -> Self;

    #[must_use]
    fn unscale(self, scalar: S) -> Self;
}

macro_rules! impl_scale_float {
    ( $repr:ty ; $( $scalar:ty ),* ) => {
        $(
            impl Scale<$scalar> for $repr {
                #[inline]
                fn scale(self, scalar: $scalar) -> Self {
                    self * AsPrimitive::<$repr>::as_(scalar)
                }

                #[inline]
                fn unscale(self, scalar: $scalar) -> Self {
                    self / AsPrimitive::<$repr>::as_(scalar)
                }
            }
        )*
    };
}

// narrow
// an exact `i128` result back into the representation, or the native
// overflow panic
#[track_caller]
fn narrow<R: TryFrom<i128>>(wide: Option<i128>, op: &str) -> R {
    match wide.and_then(|wide| R::try_from(wide).ok()) {
        Some(value) => value,
        None => panic!("attempt to {op} with overflow"),
    }
}

macro_rules! impl_scale_int {
    ( $repr:ty ; int: $( $int:ty ),* ; float: $( $float:ty ),* ) => {
        $(
            impl Scale<$int> for $repr {
                #[inline]
                fn scale(self, scalar: $int) -> Self {
                    let wide = AsPrimitive::<i128>::as_(self)
                        .checked_mul(AsPrimitive::<i128>::as_(scalar));

                    narrow(wide, "multiply")
                }

                #[inline]
                fn unscale(self, scalar: $int) -> Self {
                    let divisor: i128 = scalar.as_();
                    assert!(divisor != 0, "attempt to divide by zero");

                    narrow(AsPrimitive::<i128>::as_(self).checked_div(divisor), "divide")
                }
            }
        )*
        $(
            impl Scale<$float> for $repr {
                #[inline]
                fn scale(self, scalar: $float) -> Self {
                    let wide: f64 = self.as_();
                    AsPrimitive::<$repr>::as_(wide * AsPrimitive::<f64>::as_(scalar))
                }

                #[inline]
                fn unscale(self, scalar: $float) -> Self {
                    let wide: f64 = self.as_();
                    AsPrimitive::<$repr>::as_(wide / AsPrimitive::<f64>::as_(scalar))
                }
            }
        )*
    };
}

macro_rules! impl_scale {
    ( float: $( $f:ty ),* ; int: $( $i:ty ),* ) => {
        $(
            impl_scale_float!($f; i32, u32, i64, f32, f64);
        )*
        $(
            impl_scale_int!($i; int: i32, u32, i64; float: f32, f64);
        )*
    };
}

impl_scale!(
    float: f32, f64;
    int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize
);

///
/// TESTS
///
