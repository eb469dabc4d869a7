use derive_more::Display;
use std::any::type_name;
use thiserror::Error as ThisError;

///
/// ArithmeticOp
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
}

///
/// ArithmeticError
///
/// Returned by the checked arithmetic surface only. The operator skills
/// never fail; they inherit the representation's behaviour instead.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ArithmeticError {
    #[error("division by zero for {type_name}")]
    DivisionByZero { type_name: &'static str },

    #[error("{op} overflowed for {type_name}")]
    Overflow {
        op: ArithmeticOp,
        type_name: &'static str,
    },
}

impl ArithmeticError {
    pub(crate) fn division_by_zero<T>() -> Self {
        Self::DivisionByZero {
            type_name: type_name::<T>(),
        }
    }

    pub(crate) fn overflow<T>(op: ArithmeticOp) -> Self {
        Self::Overflow {
            op,
            type_name: type_name::<T>(),
        }
    }

    /// Name of the strong type the failing operation ran on.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::DivisionByZero { type_name } | Self::Overflow { type_name, .. } => *type_name,
        }
    }
}
