//! # SubCategory Actor
//!
//! Owns the sub-categories. Depends on the category actor to resolve parents, so it
//! is started with a [`CategoryClient`](crate::clients::CategoryClient) as context.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SubCategoryClient;
use crate::framework::ResourceActor;
use crate::model::SubCategory;

/// Creates a new SubCategory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<SubCategory>, SubCategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SubCategoryClient::new(generic_client))
}
