/// A product category, e.g. "Beverages".
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
/// [`impl ActorEntity for Category`](#impl-ActorEntity-for-Category).
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Placeholder for a product whose category has not been looked up yet.
    /// Real ids start at 1.
    pub const UNASSIGNED: CategoryId = CategoryId(0);
}

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Category names are compared case-insensitively and ignoring surrounding blanks.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// Payload for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Payload for editing a category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
