//! Scalar-rhs arithmetic skills: `mul_f`, `mul_i`, `div_f`, `div_i`.
//!
//! The scalar goes through `Scale<S>` on the representation. Multiplication
//! is generated in both operand orders; division only as `strong / scalar`.

use super::Skill;
use crate::repr::Scale;

#[must_use]
pub fn mul_scalar<T, S>(lhs: T, scalar: S) -> T
where
    T: Skill,
    T::Repr: Scale<S>,
{
    T::new(lhs.into_inner().scale(scalar))
}

/// `scalar * rhs`, same result as [`mul_scalar`].
#[must_use]
pub fn scalar_mul<T, S>(scalar: S, rhs: T) -> T
where
    T: Skill,
    T::Repr: Scale<S>,
{
    mul_scalar(rhs, scalar)
}

pub fn mul_scalar_assign<T, S>(lhs: &mut T, scalar: S) -> &mut T
where
    T: Skill,
    T::Repr: Clone + Scale<S>,
{
    let scratch = lhs.value().clone().scale(scalar);
    *lhs.underlying_mut() = T::new(scratch);

    lhs
}

#[must_use]
pub fn div_scalar<T, S>(lhs: T, scalar: S) -> T
where
    T: Skill,
    T::Repr: Scale<S>,
{
    T::new(lhs.into_inner().unscale(scalar))
}

pub fn div_scalar_assign<T, S>(lhs: &mut T, scalar: S) -> &mut T
where
    T: Skill,
    T::Repr: Clone + Scale<S>,
{
    let scratch = lhs.value().clone().unscale(scalar);
    *lhs.underlying_mut() = T::new(scratch);

    lhs
}

///
/// TESTS
///
