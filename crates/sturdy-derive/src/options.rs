use darling::{
    FromDeriveInput,
    util::{Flag, PathList},
};

///
/// Options
///
/// `#[strong_type(...)]` configuration.
///
/// - `skills(...)`: skills to attach, see `SkillKind`
/// - `display`: forward `Display` to the representation
/// - `serde`: transparent `Serialize`/`Deserialize`
///

#[derive(Debug, Default, FromDeriveInput)]
#[darling(attributes(strong_type), default)]
pub struct Options {
    pub skills: PathList,
    pub display: Flag,
    pub serde: Flag,
}

///
/// TESTS
///
