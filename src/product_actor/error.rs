//! Error types for the Product actor.

use crate::category_actor::CategoryError;
use crate::framework::FrameworkError;
use crate::replenishment::InventoryError;
use crate::sub_category_actor::SubCategoryError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// `max_qty` is below `min_qty`.
    #[error("Malformed range: max_qty {max_qty} is below min_qty {min_qty}")]
    MalformedRange { min_qty: f64, max_qty: f64 },

    /// A quantity, rate or price is negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f64 },

    /// No category with this name exists.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The sub-category does not exist under the product's category.
    #[error("Unknown sub-category {sub_category} in category {category}")]
    UnknownSubCategory {
        sub_category: String,
        category: String,
    },

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    SubCategory(#[from] SubCategoryError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    /// Recovers the product's own error from the actor reply when there is one.
    pub fn from_framework(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<ProductError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<InventoryError> for ProductError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::MalformedRange { min_qty, max_qty } => {
                ProductError::MalformedRange { min_qty, max_qty }
            }
            other => ProductError::ValidationError(other.to_string()),
        }
    }
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
