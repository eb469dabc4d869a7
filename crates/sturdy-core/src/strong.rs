///
/// StrongType
///
/// Contract of a strongly-typed scalar: exactly one stored value of type
/// `Repr`, constructed explicitly and read back through accessors.
///
/// Implemented by `#[derive(StrongType)]` on single-field tuple structs. The
/// field stays private to the declaring module, so `new`/`from_ref` are the
/// only construction paths; no `From<Repr>` is ever generated.
///

pub trait StrongType: Sized {
    type Repr;

    /// Construct by taking ownership of `value`.
    fn new(value: Self::Repr) -> Self;

    fn get(&self) -> &Self::Repr;

    fn get_mut(&mut self) -> &mut Self::Repr;

    fn into_inner(self) -> Self::Repr;

    /// Construct from a borrowed representation by cloning it.
    #[must_use]
    fn from_ref(value: &Self::Repr) -> Self
    where
        Self::Repr: Clone,
    {
        Self::new(value.clone())
    }
}

///
/// TESTS
///
