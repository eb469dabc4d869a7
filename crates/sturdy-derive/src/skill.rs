use darling::{Error as DarlingError, util::PathList};
use derive_more::Display;
use std::collections::BTreeMap;

///
/// SkillKind
///
/// Every name accepted in `skills(...)`. Composites expand to their leaves
/// before anything is generated.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SkillKind {
    #[display("add")]
    Add,
    #[display("cmp")]
    Cmp,
    #[display("div")]
    Div,
    #[display("div_f")]
    DivF,
    #[display("div_i")]
    DivI,
    #[display("div_t")]
    DivT,
    #[display("eq")]
    Eq,
    #[display("math")]
    Math,
    #[display("mul")]
    Mul,
    #[display("mul_f")]
    MulF,
    #[display("mul_i")]
    MulI,
    #[display("mul_t")]
    MulT,
    #[display("sub")]
    Sub,
}

impl SkillKind {
    pub const ALL: [Self; 13] = [
        Self::Eq,
        Self::Cmp,
        Self::Add,
        Self::Sub,
        Self::MulT,
        Self::MulF,
        Self::MulI,
        Self::Mul,
        Self::DivT,
        Self::DivF,
        Self::DivI,
        Self::Div,
        Self::Math,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.to_string() == name)
    }

    /// Leaf skills this name attaches.
    /// `cmp` composes `eq`, the same way it reuses its logic.
    pub const fn leaves(self) -> &'static [Self] {
        match self {
            Self::Cmp => &[Self::Eq, Self::Cmp],
            Self::Mul => &[Self::MulT, Self::MulF, Self::MulI],
            Self::Div => &[Self::DivT, Self::DivF, Self::DivI],
            Self::Math => &[
                Self::Add,
                Self::Sub,
                Self::MulT,
                Self::MulF,
                Self::MulI,
                Self::DivT,
                Self::DivF,
                Self::DivI,
            ],
            Self::Add => &[Self::Add],
            Self::DivF => &[Self::DivF],
            Self::DivI => &[Self::DivI],
            Self::DivT => &[Self::DivT],
            Self::Eq => &[Self::Eq],
            Self::MulF => &[Self::MulF],
            Self::MulI => &[Self::MulI],
            Self::MulT => &[Self::MulT],
            Self::Sub => &[Self::Sub],
        }
    }
}

///
/// SkillSet
///
/// Resolved leaf skills of one strong type. Each leaf has exactly one
/// provider; a leaf reached twice is an error rather than a silent merge.
///

#[derive(Debug, Default)]
pub struct SkillSet {
    providers: BTreeMap<SkillKind, SkillKind>,
}

impl SkillSet {
    pub fn resolve(paths: &PathList) -> Result<Self, DarlingError> {
        let mut errors = DarlingError::accumulator();
        let mut set = Self::default();

        for path in paths.iter() {
            let Some(requested) = path
                .get_ident()
                .and_then(|ident| SkillKind::from_name(&ident.to_string()))
            else {
                let names = SkillKind::ALL.map(|kind| kind.to_string()).join(", ");
                errors.push(
                    DarlingError::custom(format!("unknown skill, expected one of: {names}"))
                        .with_span(path),
                );
                continue;
            };

            for &leaf in requested.leaves() {
                if let Some(&provider) = set.providers.get(&leaf) {
                    errors.push(
                        DarlingError::custom(format!(
                            "skill `{leaf}` is provided by both `{provider}` and `{requested}`"
                        ))
                        .with_span(path),
                    );
                } else {
                    set.providers.insert(leaf, requested);
                }
            }
        }

        errors.finish_with(set)
    }

    pub fn has(&self, leaf: SkillKind) -> bool {
        self.providers.contains_key(&leaf)
    }

    pub fn has_all(&self, leaves: &[SkillKind]) -> bool {
        leaves.iter().all(|&leaf| self.has(leaf))
    }
}

///
/// TESTS
///
