//! # Product Actor
//!
//! Owns the product catalog. Products reference categories and sub-categories by
//! name, so the actor runs with a [`CategoryDirectory`] holding both clients.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation and field validation
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction::StockStatus`]
//! - [`new()`] - Factory that creates the actor and its client
//!
//! ```rust,ignore
//! let (actor, products) = product_actor::new(32);
//! tokio::spawn(actor.run(CategoryDirectory::new(categories, sub_categories)));
//!
//! let id = products.create_product(params).await?;
//! let status = products.stock_status(id).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CategoryClient, ProductClient, SubCategoryClient};
use crate::framework::ResourceActor;
use crate::model::Product;

/// Lookup dependencies for product validation.
#[derive(Clone)]
pub struct CategoryDirectory {
    pub categories: CategoryClient,
    pub sub_categories: SubCategoryClient,
}

impl CategoryDirectory {
    pub fn new(categories: CategoryClient, sub_categories: SubCategoryClient) -> Self {
        Self {
            categories,
            sub_categories,
        }
    }
}

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
