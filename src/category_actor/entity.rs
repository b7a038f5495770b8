//! [`ActorEntity`] implementation for [`Category`].
//!
//! Categories have no dependencies (`Context = ()`). Name uniqueness needs the whole
//! collection, so it is checked by [`CategoryClient`](crate::clients::CategoryClient)
//! before the request reaches the actor.

use super::error::CategoryError;
use crate::framework::ActorEntity;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use async_trait::async_trait;

fn check_name(name: &str) -> Result<(), CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::ValidationError(
            "Category name is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        check_name(&params.name)?;
        Ok(Category::new(id, params.name.trim(), params.description))
    }

    /// # Fields Updated
    /// - `name`: must stay non-empty
    /// - `description`
    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), CategoryError> {
        if let Some(name) = update.name {
            check_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CategoryError> {
        Ok(())
    }
}
