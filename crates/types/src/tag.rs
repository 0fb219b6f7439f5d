use serde::{Deserialize, Serialize};

/// IdentityTag is an opaque, stable identifier for a bridge-visible value.
///
/// Tags come in two forms: a random form (fixed marker plus grouped hex of
/// sixteen random bytes) and a derived form (`{TypeLabel}_{disambiguator}`).
/// A tag is allocated on demand, never mutated, and never reclaimed; the
/// lifecycle is bounded by the process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityTag(String);

impl IdentityTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdentityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// DisplayHandle names an existing display slot that can be updated in
/// place by the display-sink collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayHandle(String);

impl DisplayHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
