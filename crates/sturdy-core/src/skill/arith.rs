//! Same-type arithmetic skills: `add`, `sub`, `mul_t`, `div_t`.
//!
//! Value forms unwrap both operands, apply the representation's operator
//! and construct a fresh `T` from the result. Compound forms never mutate
//! the stored value through the operator: they copy it into a scratch,
//! apply the compound operator there, and assign a newly constructed `T`
//! back into `lhs`.
//!
//! Division by zero is whatever the representation does (inf/NaN for
//! floats, a panic for integers).

use super::Skill;
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

macro_rules! same_type_skill {
    ($method:ident, $assign_method:ident, $op_trait:ident, $assign_trait:ident, $op:tt, $assign_op:tt) => {
        #[must_use]
        pub fn $method<T>(lhs: T, rhs: T) -> T
        where
            T: Skill,
            T::Repr: $op_trait<Output = T::Repr>,
        {
            T::new(lhs.into_inner() $op rhs.into_inner())
        }

        pub fn $assign_method<T>(lhs: &mut T, rhs: T) -> &mut T
        where
            T: Skill,
            T::Repr: Clone + $assign_trait,
        {
            let mut scratch = lhs.value().clone();
            scratch $assign_op rhs.into_inner();
            *lhs.underlying_mut() = T::new(scratch);

            lhs
        }
    };
}

same_type_skill!(add, add_assign, Add, AddAssign, +, +=);
same_type_skill!(sub, sub_assign, Sub, SubAssign, -, -=);
same_type_skill!(mul, mul_assign, Mul, MulAssign, *, *=);
same_type_skill!(div, div_assign, Div, DivAssign, /, /=);

/// Unary negation, part of the `sub` skill.
#[must_use]
pub fn neg<T>(value: T) -> T
where
    T: Skill,
    T::Repr: Neg<Output = T::Repr>,
{
    T::new(-value.into_inner())
}

/// Sum of strong values, attached alongside the `add` skill.
#[must_use]
pub fn sum<T, I>(iter: I) -> T
where
    T: Skill,
    T::Repr: Sum,
    I: Iterator<Item = T>,
{
    T::new(iter.map(T::into_inner).sum())
}

///
/// TESTS
///
