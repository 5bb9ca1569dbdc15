use serde::Serialize;
use std::fmt::Display;

/// A normalized, non-empty identifier for a counted content item.
///
/// Normalization trims surrounding whitespace and strips every leading and
/// trailing `/`. Beyond being non-empty the slug is opaque: no charset or
/// length rules apply.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalizes `raw` and wraps it.
    ///
    /// Returns `None` when nothing is left after normalization.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        Some(Self(normalized.to_owned()))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strips surrounding whitespace and slashes.
///
/// Both are stripped in one pass so that whitespace uncovered by removing a
/// slash goes too, which keeps `normalize` idempotent.
pub fn normalize(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '/')
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
