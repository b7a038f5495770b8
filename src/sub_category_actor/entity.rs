//! [`ActorEntity`] implementation for [`SubCategory`].
//!
//! The context is the [`CategoryClient`]: the parent category is resolved on create
//! and again whenever an update moves the sub-category to another parent. The parent's
//! current name is copied onto the sub-category at that point.

use super::error::SubCategoryError;
use crate::clients::CategoryClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{CategoryId, SubCategory, SubCategoryCreate, SubCategoryId, SubCategoryUpdate};
use async_trait::async_trait;
use tracing::debug;

fn check_name(name: &str) -> Result<(), SubCategoryError> {
    if name.trim().is_empty() {
        return Err(SubCategoryError::ValidationError(
            "Sub-category name is required".to_string(),
        ));
    }
    Ok(())
}

async fn parent_name(
    categories: &CategoryClient,
    parent: &CategoryId,
) -> Result<String, SubCategoryError> {
    debug!(%parent, "Resolving parent category");
    match categories.get(parent.clone()).await? {
        Some(category) => Ok(category.name),
        None => Err(SubCategoryError::ParentNotFound(parent.clone())),
    }
}

#[async_trait]
impl ActorEntity for SubCategory {
    type Id = SubCategoryId;
    type Create = SubCategoryCreate;
    type Update = SubCategoryUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = CategoryClient;
    type Error = SubCategoryError;

    fn from_create_params(
        id: SubCategoryId,
        params: SubCategoryCreate,
    ) -> Result<Self, SubCategoryError> {
        check_name(&params.name)?;
        Ok(SubCategory {
            id,
            name: params.name.trim().to_string(),
            description: params.description,
            parent_category_id: params.parent_category_id,
            parent_category_name: String::new(),
        })
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), SubCategoryError> {
        self.parent_category_name = parent_name(categories, &self.parent_category_id).await?;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: SubCategoryUpdate,
        categories: &CategoryClient,
    ) -> Result<(), SubCategoryError> {
        if let Some(name) = update.name {
            check_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(parent) = update.parent_category_id {
            self.parent_category_name = parent_name(categories, &parent).await?;
            self.parent_category_id = parent;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _categories: &CategoryClient,
    ) -> Result<(), SubCategoryError> {
        Ok(())
    }
}
