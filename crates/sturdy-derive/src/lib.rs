//! `#[derive(StrongType)]`.
//!
//! Turns a single-field tuple struct into a strong type and attaches the
//! skills named in `#[strong_type(skills(...))]`. Every generated operator
//! forwards to the generic skill functions in `sturdy::skill`.

use proc_macro::TokenStream;

mod newtype;
mod ops;
mod options;
mod skill;
mod strong_type;

/// Derive the strong-type contract and the selected skills.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, Default, StrongType)]
/// #[strong_type(skills(cmp, math), display, serde)]
/// pub struct Radian(f64);
/// ```
#[proc_macro_derive(StrongType, attributes(strong_type))]
pub fn derive_strong_type(input: TokenStream) -> TokenStream {
    strong_type::derive_strong_type(input.into()).into()
}
