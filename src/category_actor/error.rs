//! Error types for the Category actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// The requested category was not found.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// Another category already uses this name.
    #[error("Category already exists: {0}")]
    DuplicateName(String),

    /// Sub-categories or products still belong to the category.
    #[error("Category {category} still has {sub_categories} sub-categories and {products} products")]
    HasChildren {
        category: String,
        sub_categories: usize,
        products: usize,
    },

    /// The category data provided is invalid.
    #[error("Category validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CategoryError {
    /// Recovers the category's own error from the actor reply when there is one.
    pub fn from_framework(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<CategoryError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            other => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for CategoryError {
    fn from(msg: String) -> Self {
        CategoryError::ActorCommunicationError(msg)
    }
}
