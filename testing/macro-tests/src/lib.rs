//! Fixture strong types shared by the integration tests.
//!
//! `Radian` and `Meters` are deliberately identical apart from their names.

use sturdy::prelude::*;

#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(cmp, math), display, serde)]
pub struct Radian(f64);

#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(cmp, math), display, serde)]
pub struct Meters(f64);

#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(cmp, math))]
pub struct Ratio(f32);

///
/// Cents
///
/// Integer money: no same-type multiplication or division.
///

#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(cmp, add, sub, mul_i, div_i), display, serde)]
pub struct Cents(i64);

#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(eq))]
pub struct UserId(u32);

#[derive(Clone, Debug, Default, StrongType)]
#[strong_type(skills(cmp), display)]
pub struct Label(String);

/// Generic over its representation; skills apply wherever `T` supports them.
#[derive(Clone, Copy, Debug, Default, StrongType)]
#[strong_type(skills(eq, add, mul_f), serde)]
pub struct Scaled<T>(T);

// Radian
impl Radian {
    /// Normalize into `[0, 2π)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.into_inner().rem_euclid(std::f64::consts::TAU))
    }
}
