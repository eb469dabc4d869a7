//! `eq` skill.

use super::Skill;
use crate::repr::ReprEq;

/// Representation-aware equality of two values of the same strong type.
#[must_use]
pub fn eq<T>(lhs: &T, rhs: &T) -> bool
where
    T: Skill,
    T::Repr: ReprEq,
{
    lhs.value().repr_eq(rhs.value())
}

/// Negation of [`eq`].
#[must_use]
pub fn ne<T>(lhs: &T, rhs: &T) -> bool
where
    T: Skill,
    T::Repr: ReprEq,
{
    !eq(lhs, rhs)
}

///
/// TESTS
///
