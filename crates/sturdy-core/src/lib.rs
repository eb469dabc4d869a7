//! Core runtime for sturdy: the strong-type contract, the skill access
//! protocol, representation traits, and the generic operations every
//! derived operator forwards to.
//!
//! Nothing here allocates or dispatches dynamically; every skill is a plain
//! generic function monomorphized per concrete strong type.
#![warn(unreachable_pub)]

extern crate self as sturdy;

pub mod checked;
pub mod error;
pub mod repr;
pub mod skill;
pub mod strong;

///
/// re-exports
///
/// generated code reaches third-party crates through here so downstream
/// crates do not need to depend on them directly
///

#[doc(hidden)]
pub mod __reexports {
    pub use serde;
}

///
/// Prelude
///
/// Traits needed to construct, read, and compute with strong types.
///

pub mod prelude {
    pub use crate::{
        checked::Checked as _,
        repr::{ReprEq, Scale},
        skill::{
            Addition, Arithmetic, Comparison, DivByFloat, DivByInt, DivByType, Division,
            Equality, MulByFloat, MulByInt, MulByType, Multiplication, Skill, Subtraction,
        },
        strong::StrongType,
    };
}
