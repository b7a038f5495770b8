//! Error types for the SubCategory actor.

use crate::category_actor::CategoryError;
use crate::framework::FrameworkError;
use crate::model::CategoryId;
use thiserror::Error;

/// Errors that can occur during sub-category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubCategoryError {
    /// The requested sub-category was not found.
    #[error("Sub-category not found: {0}")]
    NotFound(String),

    /// The parent category does not exist.
    #[error("Parent category not found: {0}")]
    ParentNotFound(CategoryId),

    /// Products still use the sub-category.
    #[error("Sub-category {sub_category} is used by {products} products")]
    HasProducts { sub_category: String, products: usize },

    /// The sub-category data provided is invalid.
    #[error("Sub-category validation error: {0}")]
    ValidationError(String),

    /// Looking up the parent category failed.
    #[error(transparent)]
    Category(#[from] CategoryError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl SubCategoryError {
    /// Recovers the sub-category's own error from the actor reply when there is one.
    pub fn from_framework(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<SubCategoryError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => SubCategoryError::NotFound(id),
            other => SubCategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for SubCategoryError {
    fn from(msg: String) -> Self {
        SubCategoryError::ActorCommunicationError(msg)
    }
}
