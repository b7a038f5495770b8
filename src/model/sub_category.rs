/// A sub-category nested under one [`Category`](crate::model::Category).
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor) whose context is the
/// category client, so the parent can be checked when the sub-category is created or
/// moved.
use crate::model::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for SubCategories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubCategoryId(pub u32);

impl From<u32> for SubCategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SubCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub_category_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: SubCategoryId,
    pub name: String,
    pub description: String,
    pub parent_category_id: CategoryId,
    /// Filled in from the parent category when the sub-category is stored.
    pub parent_category_name: String,
}

impl SubCategory {
    pub fn belongs_to(&self, category: &CategoryId) -> bool {
        &self.parent_category_id == category
    }
}

/// Payload for creating a sub-category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub parent_category_id: CategoryId,
}

impl SubCategoryCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parent_category_id: CategoryId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parent_category_id,
        }
    }
}

/// Payload for editing a sub-category. A new parent is re-checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubCategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_category_id: Option<CategoryId>,
}
