//! `cmp` skill.
//!
//! Every relation is derived from [`lt`], and `lt` excludes values the `eq`
//! skill considers equal, so two floats within epsilon of each other are
//! neither less nor greater than one another.

use super::{Skill, eq};
use crate::repr::ReprEq;
use std::cmp::Ordering;

/// Raw `<` that is false whenever the operands are equal under [`eq::eq`].
#[must_use]
pub fn lt<T>(lhs: &T, rhs: &T) -> bool
where
    T: Skill,
    T::Repr: ReprEq + PartialOrd,
{
    lhs.value() < rhs.value() && !eq::eq(lhs, rhs)
}

#[must_use]
pub fn gt<T>(lhs: &T, rhs: &T) -> bool
where
    T: Skill,
    T::Repr: ReprEq + PartialOrd,
{
    lt(rhs, lhs)
}

/// `!(lhs < rhs)`; true against NaN.
#[must_use]
pub fn ge<T>(lhs: &T, rhs: &T) -> bool
where
    T: Skill,
    T::Repr: ReprEq + PartialOrd,
{
    !lt(lhs, rhs)
}

/// `!(rhs < lhs)`; true against NaN.
#[must_use]
pub fn le<T>(lhs: &T, rhs: &T) -> bool
where
    T: Skill,
    T::Repr: ReprEq + PartialOrd,
{
    !lt(rhs, lhs)
}

/// `None` only when the operands are neither equal nor ordered (NaN).
#[must_use]
pub fn partial_cmp<T>(lhs: &T, rhs: &T) -> Option<Ordering>
where
    T: Skill,
    T::Repr: ReprEq + PartialOrd,
{
    if eq::eq(lhs, rhs) {
        Some(Ordering::Equal)
    } else if lt(lhs, rhs) {
        Some(Ordering::Less)
    } else if lt(rhs, lhs) {
        Some(Ordering::Greater)
    } else {
        None
    }
}

///
/// TESTS
///
