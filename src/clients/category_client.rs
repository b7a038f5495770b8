//! # Category Client
//!
//! High-level API for the `Category` actor. Name uniqueness is enforced here since it
//! spans the whole collection.
use crate::category_actor::CategoryError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    async fn ensure_unique(
        &self,
        name: &str,
        except: Option<&CategoryId>,
    ) -> Result<(), CategoryError> {
        let taken = self
            .list()
            .await?
            .iter()
            .any(|c| c.has_name(name) && Some(&c.id) != except);
        if taken {
            warn!(category = name, "Duplicate category name");
            return Err(CategoryError::DuplicateName(name.trim().to_string()));
        }
        Ok(())
    }

    /// Creates a category after checking that no other category has the same name
    /// (case-insensitive).
    #[instrument(skip(self), fields(category = %params.name))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.ensure_unique(&params.name, None).await?;
        self.inner
            .create(params)
            .await
            .map_err(CategoryError::from_framework)
    }

    #[instrument(skip(self, update))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryError> {
        debug!(?update, "Sending request");
        if let Some(name) = &update.name {
            self.ensure_unique(name, Some(&id)).await?;
        }
        self.inner
            .update(id, update)
            .await
            .map_err(CategoryError::from_framework)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CategoryError::from_framework(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn duplicate_name_is_rejected_without_create() {
        let mut mock = MockClient::<Category>::new();
        mock.expect_list()
            .return_ok(vec![Category::new(CategoryId(1), "Beverages", "")]);
        let client = CategoryClient::new(mock.client());

        let result = client
            .create_category(CategoryCreate::new("  beverages ", "again"))
            .await;

        assert_eq!(result, Err(CategoryError::DuplicateName("beverages".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn renaming_to_own_name_is_allowed() {
        let dairy = Category::new(CategoryId(2), "Dairy", "");
        let mut mock = MockClient::<Category>::new();
        mock.expect_list().return_ok(vec![dairy.clone()]);
        mock.expect_update(CategoryId(2)).return_ok(Category::new(CategoryId(2), "DAIRY", ""));
        let client = CategoryClient::new(mock.client());

        let update = CategoryUpdate {
            name: Some("DAIRY".into()),
            description: None,
        };
        let updated = client.update_category(CategoryId(2), update).await.unwrap();

        assert_eq!(updated.name, "DAIRY");
        mock.verify();
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<Category>::new();
        mock.expect_list().return_ok(vec![]);
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            CategoryError::ValidationError("Category name is required".into()),
        )));
        let client = CategoryClient::new(mock.client());

        let result = client.create_category(CategoryCreate::new("", "")).await;

        assert!(matches!(result, Err(CategoryError::ValidationError(_))));
        mock.verify();
    }
}
