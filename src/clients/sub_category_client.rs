//! # SubCategory Client
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CategoryId, SubCategory, SubCategoryCreate, SubCategoryId, SubCategoryUpdate};
use crate::sub_category_actor::SubCategoryError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the SubCategory actor.
#[derive(Clone)]
pub struct SubCategoryClient {
    inner: ResourceClient<SubCategory>,
}

impl SubCategoryClient {
    pub fn new(inner: ResourceClient<SubCategory>) -> Self {
        Self { inner }
    }

    /// Creates a sub-category. The actor checks that the parent exists.
    #[instrument(skip(self), fields(sub_category = %params.name, parent = %params.parent_category_id))]
    pub async fn create_sub_category(
        &self,
        params: SubCategoryCreate,
    ) -> Result<SubCategoryId, SubCategoryError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(SubCategoryError::from_framework)
    }

    #[instrument(skip(self, update))]
    pub async fn update_sub_category(
        &self,
        id: SubCategoryId,
        update: SubCategoryUpdate,
    ) -> Result<SubCategory, SubCategoryError> {
        debug!(?update, "Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(SubCategoryError::from_framework)
    }

    /// Sub-categories under `category`, oldest first.
    #[instrument(skip(self))]
    pub async fn sub_categories_of(
        &self,
        category: CategoryId,
    ) -> Result<Vec<SubCategory>, SubCategoryError> {
        let all = self.list().await?;
        Ok(all.into_iter().filter(|s| s.belongs_to(&category)).collect())
    }
}

#[async_trait]
impl ActorClient<SubCategory> for SubCategoryClient {
    type Error = SubCategoryError;

    fn inner(&self) -> &ResourceClient<SubCategory> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SubCategoryError::from_framework(e)
    }
}
