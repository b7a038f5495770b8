use crate::category_actor::CategoryError;
use crate::clients::{CategoryClient, ProductClient, SubCategoryClient};
use crate::framework::ActorClient;
use crate::lifecycle::ConsoleConfig;
use crate::model::{
    Category, CategoryId, CategoryUpdate, Product, SubCategory, SubCategoryId, SubCategoryUpdate,
};
use crate::product_actor::{CategoryDirectory, ProductError};
use crate::replenishment::{compute_replenishment_with, summarize_dashboard, DashboardSummary, ReplenishmentReport};
use crate::sub_category_actor::SubCategoryError;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// Errors from operations that span more than one actor.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    SubCategory(#[from] SubCategoryError),
}

/// Starts and owns the console's actors.
///
/// Edits and deletes of categories and sub-categories go through this type so
/// that products and sub-categories never point at a renamed or missing parent.
///
/// Three actors run, with an acyclic dependency chain:
/// - **Category**: no dependencies
/// - **SubCategory**: resolves parents through a [`CategoryClient`]
/// - **Product**: validates category references through a [`CategoryDirectory`]
///
/// ```ignore
/// let system = InventorySystem::new();
/// let beverages = system.category_client.create_category(params).await?;
/// let report = system.replenishment_report().await?;
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    pub category_client: CategoryClient,
    pub sub_category_client: SubCategoryClient,
    pub product_client: ProductClient,
    config: ConsoleConfig,
    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the actors with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&ConsoleConfig::default())
    }

    pub fn with_config(config: &ConsoleConfig) -> Self {
        let buffer = config.actor_buffer_size;

        // 1. Create actors (no dependencies yet)
        let (category_actor, category_client) = crate::category_actor::new(buffer);
        let (sub_category_actor, sub_category_client) = crate::sub_category_actor::new(buffer);
        let (product_actor, product_client) = crate::product_actor::new(buffer);

        // 2. Start them with their context injected
        let category_handle = tokio::spawn(category_actor.run(()));
        let sub_category_handle = tokio::spawn(sub_category_actor.run(category_client.clone()));
        let product_handle = tokio::spawn(product_actor.run(CategoryDirectory::new(
            category_client.clone(),
            sub_category_client.clone(),
        )));

        info!(buffer, "Inventory system started");
        Self {
            category_client,
            sub_category_client,
            product_client,
            config: config.clone(),
            handles: vec![category_handle, sub_category_handle, product_handle],
        }
    }

    /// Fetches the current products and computes the replenishment report.
    ///
    /// If the fetch fails the error is returned and nothing is computed.
    #[instrument(skip(self))]
    pub async fn replenishment_report(&self) -> Result<ReplenishmentReport, ProductError> {
        let products = self.product_client.list_products().await?;
        Ok(compute_replenishment_with(&products, &self.config.replenishment))
    }

    /// Fetches products and categories and builds the dashboard figures.
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardSummary, ConsoleError> {
        let products = self.product_client.list_products().await?;
        let categories = self.category_client.list().await?;
        Ok(summarize_dashboard(
            &products,
            categories.len(),
            &self.config.replenishment,
            &self.config.dashboard_limits(),
        ))
    }

    /// Renames or re-describes a category. After a rename the copied names on its
    /// sub-categories and products are refreshed.
    #[instrument(skip(self, update))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, ConsoleError> {
        let renamed = update.name.is_some();
        let category = self.category_client.update_category(id.clone(), update).await?;
        if !renamed {
            return Ok(category);
        }

        for sub in self.sub_category_client.sub_categories_of(id.clone()).await? {
            debug!(sub_category = %sub.id, "Refreshing parent name");
            let refresh = SubCategoryUpdate {
                parent_category_id: Some(id.clone()),
                ..SubCategoryUpdate::default()
            };
            self.sub_category_client.update_sub_category(sub.id, refresh).await?;
        }
        for product in self.products_where(|p| p.category_id == id).await? {
            self.product_client.refresh_links(product.id).await?;
        }
        Ok(category)
    }

    /// Edits a sub-category. Moving it to another category is refused while
    /// products use it; a rename is copied onto those products.
    #[instrument(skip(self, update))]
    pub async fn update_sub_category(
        &self,
        id: SubCategoryId,
        update: SubCategoryUpdate,
    ) -> Result<SubCategory, ConsoleError> {
        let users = self
            .products_where(|p| p.sub_category_id.as_ref() == Some(&id))
            .await?;

        if let Some(parent) = &update.parent_category_id {
            let current = self
                .sub_category_client
                .get(id.clone())
                .await?
                .ok_or_else(|| SubCategoryError::NotFound(id.to_string()))?;
            if !current.belongs_to(parent) && !users.is_empty() {
                return Err(SubCategoryError::HasProducts {
                    sub_category: current.name,
                    products: users.len(),
                }
                .into());
            }
        }

        let renamed = update.name.is_some();
        let sub_category = self.sub_category_client.update_sub_category(id, update).await?;
        if renamed {
            for product in users {
                self.product_client.refresh_links(product.id).await?;
            }
        }
        Ok(sub_category)
    }

    /// Deletes a category that has no sub-categories and no products.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ConsoleError> {
        let sub_categories = self.sub_category_client.sub_categories_of(id.clone()).await?;
        let products = self.products_where(|p| p.category_id == id).await?;
        if !sub_categories.is_empty() || !products.is_empty() {
            return Err(CategoryError::HasChildren {
                category: id.to_string(),
                sub_categories: sub_categories.len(),
                products: products.len(),
            }
            .into());
        }
        self.category_client.delete(id).await?;
        Ok(())
    }

    /// Deletes a sub-category that no product uses.
    #[instrument(skip(self))]
    pub async fn delete_sub_category(&self, id: SubCategoryId) -> Result<(), ConsoleError> {
        let products = self
            .products_where(|p| p.sub_category_id.as_ref() == Some(&id))
            .await?;
        if !products.is_empty() {
            return Err(SubCategoryError::HasProducts {
                sub_category: id.to_string(),
                products: products.len(),
            }
            .into());
        }
        self.sub_category_client.delete(id).await?;
        Ok(())
    }

    async fn products_where(
        &self,
        keep: impl Fn(&Product) -> bool,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.product_client.list_products().await?;
        Ok(products.into_iter().filter(|p| keep(p)).collect())
    }

    /// Drops every client and waits for the actors to stop.
    ///
    /// The category actor only stops once the other two have released the clones in
    /// their contexts.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.product_client);
        drop(self.sub_category_client);
        drop(self.category_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}
