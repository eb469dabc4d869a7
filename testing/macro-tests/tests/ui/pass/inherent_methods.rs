use sturdy::prelude::*;

#[derive(Clone, Debug, StrongType)]
#[strong_type(skills(cmp), display)]
struct Username(String);

impl Username {
    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        (!trimmed.is_empty()).then(|| Self::new(trimmed.to_lowercase()))
    }

    fn len(&self) -> usize {
        self.value().len()
    }
}

fn main() {
    let name = Username::parse("  Alice ").unwrap();

    assert_eq!(name.len(), 5);
    assert_eq!(name.to_string(), "alice");
    assert!(name < Username::new("bob".into()));
    assert!(Username::parse("   ").is_none());
}
