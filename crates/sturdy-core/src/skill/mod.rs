//! Skills: opt-in operator families for strong types.
//!
//! Each skill is implemented once as a set of generic functions over
//! `T: StrongType` and written only against the `Skill` access protocol.
//! `#[derive(StrongType)]` attaches a skill to a concrete type by emitting
//! the `std::ops`/`std::cmp` impls that forward here, plus the matching
//! marker trait so generic code can require the capability.
//!
//! | skill   | operators                    | marker           |
//! |---------|------------------------------|------------------|
//! | `eq`    | `==` `!=`                    | `Equality`       |
//! | `cmp`   | `<` `<=` `>` `>=` (+ `eq`)   | `Comparison`     |
//! | `add`   | `+` `+=`                     | `Addition`       |
//! | `sub`   | `-` `-=` unary `-`           | `Subtraction`    |
//! | `mul_t` | `*` `*=` by self             | `MulByType`      |
//! | `mul_f` | `*` `*=` by `f32`/`f64`      | `MulByFloat`     |
//! | `mul_i` | `*` `*=` by `i32`/`u32`/`i64`| `MulByInt`       |
//! | `div_t` | `/` `/=` by self             | `DivByType`      |
//! | `div_f` | `/` `/=` by `f32`/`f64`      | `DivByFloat`     |
//! | `div_i` | `/` `/=` by `i32`/`u32`/`i64`| `DivByInt`       |
//! | `mul`   | `mul_t` + `mul_f` + `mul_i`  | `Multiplication` |
//! | `div`   | `div_t` + `div_f` + `div_i`  | `Division`       |
//! | `math`  | `add` + `sub` + `mul` + `div`| `Arithmetic`     |
//!
//! Scalar multiplication is symmetric; scalar division is not, `s / x` is
//! never generated.

pub mod arith;
pub mod cmp;
pub mod eq;
pub mod scalar;

use crate::{repr::ReprEq, strong::StrongType};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

///
/// Skill
///
/// Access protocol shared by every skill: the concrete instance and its
/// stored value. Blanket-implemented for all strong types.
///

pub trait Skill: StrongType {
    fn underlying(&self) -> &Self {
        self
    }

    fn underlying_mut(&mut self) -> &mut Self {
        self
    }

    fn value(&self) -> &Self::Repr {
        self.underlying().get()
    }

    fn value_mut(&mut self) -> &mut Self::Repr {
        self.underlying_mut().get_mut()
    }
}

impl<T: StrongType> Skill for T {}

// ============================================================================
// MARKERS
// ============================================================================
//
// Emitted by the derive alongside the operator impls. Composite markers are
// only emitted when every constituent skill is present.
//

/// `==` / `!=` with representation-aware equality.
pub trait Equality: Skill + StrongType<Repr: ReprEq> + PartialEq {}

/// Ordering consistent with `Equality`.
pub trait Comparison: Equality + StrongType<Repr: PartialOrd> + PartialOrd {}

pub trait Addition: Skill + Add<Output = Self> + AddAssign {}

pub trait Subtraction: Skill + Sub<Output = Self> + SubAssign + Neg<Output = Self> {}

pub trait MulByType: Skill + Mul<Output = Self> + MulAssign {}

pub trait MulByFloat:
    Skill + Mul<f32, Output = Self> + Mul<f64, Output = Self> + MulAssign<f32> + MulAssign<f64>
{
}

pub trait MulByInt:
    Skill
    + Mul<i32, Output = Self>
    + Mul<u32, Output = Self>
    + Mul<i64, Output = Self>
    + MulAssign<i32>
    + MulAssign<u32>
    + MulAssign<i64>
{
}

pub trait DivByType: Skill + Div<Output = Self> + DivAssign {}

pub trait DivByFloat:
    Skill + Div<f32, Output = Self> + Div<f64, Output = Self> + DivAssign<f32> + DivAssign<f64>
{
}

pub trait DivByInt:
    Skill
    + Div<i32, Output = Self>
    + Div<u32, Output = Self>
    + Div<i64, Output = Self>
    + DivAssign<i32>
    + DivAssign<u32>
    + DivAssign<i64>
{
}

pub trait Multiplication: MulByType + MulByFloat + MulByInt {}

pub trait Division: DivByType + DivByFloat + DivByInt {}

/// Every arithmetic skill.
pub trait Arithmetic: Addition + Subtraction + Multiplication + Division {}
