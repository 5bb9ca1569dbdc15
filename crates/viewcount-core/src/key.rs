use crate::slug::Slug;
use std::fmt::Display;

/// Namespace prepended to every slug before it reaches the store.
pub const KEY_PREFIX: &str = "blog:";

/// The store key holding the counter for one slug.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Slug> for StorageKey {
    fn from(slug: &Slug) -> Self {
        Self(format!("{}{}", KEY_PREFIX, slug.as_str()))
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_prefixed_slug() {
        let slug = Slug::parse("hello").unwrap();
        assert_eq!(StorageKey::from(&slug).as_str(), "blog:hello");
    }

    #[test]
    fn equivalent_inputs_share_a_key() {
        let a = StorageKey::from(&Slug::parse("/hello/").unwrap());
        let b = StorageKey::from(&Slug::parse("hello").unwrap());
        let c = StorageKey::from(&Slug::parse("  //hello  ").unwrap());
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
