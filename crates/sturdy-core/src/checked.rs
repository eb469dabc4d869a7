//! Checked arithmetic on strong types.
//!
//! Available only where the matching operator skill was selected, and only
//! for representations implementing the `num_traits` checked traits (so in
//! practice, integers). Results re-enter the strong type; failures surface
//! as [`ArithmeticError`] instead of panicking or wrapping.

use crate::{
    error::{ArithmeticError, ArithmeticOp},
    skill::{Addition, DivByType, MulByType, Skill, Subtraction},
};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, Zero};

///
/// Checked
///

pub trait Checked: Skill {
    fn checked_add(self, rhs: Self) -> Result<Self, ArithmeticError>
    where
        Self: Addition,
        Self::Repr: CheckedAdd,
    {
        CheckedAdd::checked_add(self.value(), rhs.value())
            .map(Self::new)
            .ok_or_else(|| ArithmeticError::overflow::<Self>(ArithmeticOp::Add))
    }

    fn checked_sub(self, rhs: Self) -> Result<Self, ArithmeticError>
    where
        Self: Subtraction,
        Self::Repr: CheckedSub,
    {
        CheckedSub::checked_sub(self.value(), rhs.value())
            .map(Self::new)
            .ok_or_else(|| ArithmeticError::overflow::<Self>(ArithmeticOp::Sub))
    }

    fn checked_mul(self, rhs: Self) -> Result<Self, ArithmeticError>
    where
        Self: MulByType,
        Self::Repr: CheckedMul,
    {
        CheckedMul::checked_mul(self.value(), rhs.value())
            .map(Self::new)
            .ok_or_else(|| ArithmeticError::overflow::<Self>(ArithmeticOp::Mul))
    }

    /// Division by zero is reported separately from overflow (`MIN / -1`).
    fn checked_div(self, rhs: Self) -> Result<Self, ArithmeticError>
    where
        Self: DivByType,
        Self::Repr: CheckedDiv + Zero,
    {
        if Zero::is_zero(rhs.value()) {
            return Err(ArithmeticError::division_by_zero::<Self>());
        }

        CheckedDiv::checked_div(self.value(), rhs.value())
            .map(Self::new)
            .ok_or_else(|| ArithmeticError::overflow::<Self>(ArithmeticOp::Div))
    }

    fn checked_neg(self) -> Result<Self, ArithmeticError>
    where
        Self: Subtraction,
        Self::Repr: CheckedNeg,
    {
        CheckedNeg::checked_neg(self.value())
            .map(Self::new)
            .ok_or_else(|| ArithmeticError::overflow::<Self>(ArithmeticOp::Neg))
    }
}

impl<T: Skill> Checked for T {}

///
/// TESTS
///
