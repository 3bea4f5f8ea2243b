use serde::{Deserialize, Serialize};

/// A resource container in the tenancy hierarchy.
///
/// Identity is the `id`; `name` is display-only and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compartment {
    pub id: String,
    pub name: String,
}

impl Compartment {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive sort key.
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}
