//! # Category Actor
//!
//! Owns the product categories. No dependencies and no custom actions.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Category`]
//! - [`error`] - [`CategoryError`]
//! - [`new()`] - Factory that creates the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CategoryClient;
use crate::framework::ResourceActor;
use crate::model::Category;

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CategoryClient::new(generic_client))
}
