//! ## Strong types with opt-in skills
//!
//! A strong type wraps exactly one value and refuses to mix with anything
//! else, including other strong types over the same representation. Each
//! operator family is a *skill* the type opts into:
//!
//! ```
//! use sturdy::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, Default, StrongType)]
//! #[strong_type(skills(cmp, math))]
//! pub struct Radian(f64);
//!
//! let quarter = Radian::new(std::f64::consts::FRAC_PI_2);
//! let half = quarter * 2i32;
//!
//! assert!(half > quarter);
//! assert_eq!(half - quarter, quarter);
//! assert_eq!(*half.get(), std::f64::consts::PI);
//! ```
//!
//! ## Crate layout
//! - `strong`: the `StrongType` contract (explicit construction, access).
//! - `skill`: access protocol, marker traits, and the generic operations.
//! - `repr`: representation behaviour (`ReprEq`, `Scale`).
//! - `checked`: `Result`-returning arithmetic for integer representations.
//! - `error`: `ArithmeticError`.
//!
//! ## Sharp edges
//! Operators never return errors: division by zero is whatever the
//! representation does (inf/NaN for floats, a panic for integers). Integer
//! representations scaled by an integer always panic when the exact result
//! does not fit, see `repr::Scale`. Use `checked` when that matters.

pub use sturdy_core::{checked, error, repr, skill, strong};
pub use sturdy_derive::StrongType;

#[doc(hidden)]
pub use sturdy_core::__reexports;

///
/// Prelude
///

pub mod prelude {
    pub use sturdy_core::prelude::*;
    pub use sturdy_derive::StrongType;
}

///
/// Compile-rejection checks
///
/// Each block must fail to compile; together they pin down what strong
/// types refuse to do.
///
/// No implicit construction from the representation:
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(math))]
/// pub struct Meters(f64);
///
/// let m: Meters = 1.0.into();
/// ```
///
/// No arithmetic between a strong type and its raw representation:
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(add))]
/// pub struct Meters(f64);
///
/// let _ = Meters::new(1.0) + 1.0;
/// ```
///
/// Scalar division is one-sided:
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(div))]
/// pub struct Hertz(f64);
///
/// let _ = 1.0f64 / Hertz::new(2.0);
/// ```
///
/// Two strong types over the same representation never mix:
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(cmp, math))]
/// pub struct Radian(f64);
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(cmp, math))]
/// pub struct Meters(f64);
///
/// let _ = Radian::new(1.0) + Meters::new(1.0);
/// ```
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(cmp))]
/// pub struct Radian(f64);
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(cmp))]
/// pub struct Meters(f64);
///
/// let _ = Radian::new(1.0) == Meters::new(1.0);
/// ```
///
/// Operators are only present when their skill is selected:
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(eq))]
/// pub struct Meters(f64);
///
/// let _ = Meters::new(1.0) < Meters::new(2.0);
/// ```
///
/// A skill set may not provide the same operator twice:
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Copy, Debug, StrongType)]
/// #[strong_type(skills(math, add))]
/// pub struct Meters(f64);
/// ```
///
/// Skills need the representation to support them:
///
/// ```compile_fail
/// use sturdy::prelude::*;
///
/// #[derive(Clone, Debug, StrongType)]
/// #[strong_type(skills(mul_t))]
/// pub struct Name(String);
/// ```
#[cfg(doctest)]
pub struct CompileFail;
