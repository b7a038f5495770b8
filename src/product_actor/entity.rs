//! [`ActorEntity`] implementation for [`Product`].
//!
//! Field checks (required text, non-negative numbers, `max_qty >= min_qty`) run
//! synchronously. Category and sub-category references are checked against the
//! other actors through the [`CategoryDirectory`] context, on create and whenever an
//! update touches them.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use super::CategoryDirectory;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{CategoryId, Product, ProductCreate, ProductId, ProductUpdate};
use crate::replenishment::check_range;
use async_trait::async_trait;
use tracing::debug;

impl Product {
    /// Checks the fields that do not need other actors.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::ValidationError("Product name is required".into()));
        }
        if self.sku.trim().is_empty() {
            return Err(ProductError::ValidationError("SKU is required".into()));
        }
        let numbers = [
            ("minQty", self.min_qty),
            ("maxQty", self.max_qty),
            ("qtyOnHand", self.qty_on_hand),
            ("avgDailySales", self.avg_daily_sales),
            ("leadTime", self.lead_time),
            ("unitPrice", self.unit_price),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ProductError::ValidationError(format!(
                    "{field} must be a finite number"
                )));
            }
            if value < 0.0 {
                return Err(ProductError::NegativeValue { field, value });
            }
        }
        check_range(self.min_qty, self.max_qty)?;
        Ok(())
    }

    /// Resolves the category and sub-category links and refreshes their
    /// display names.
    ///
    /// A resolved category is looked up by id, so a renamed category is followed.
    /// An unresolved one ([`CategoryId::UNASSIGNED`]) is matched by name,
    /// case-insensitively. The sub-category works the same way and must belong to
    /// the category.
    async fn resolve_links(&mut self, directory: &CategoryDirectory) -> Result<(), ProductError> {
        let category = if self.category_id == CategoryId::UNASSIGNED {
            debug!(category = %self.category, "Resolving category by name");
            directory
                .categories
                .list()
                .await?
                .into_iter()
                .find(|c| c.has_name(&self.category))
                .ok_or_else(|| ProductError::UnknownCategory(self.category.clone()))?
        } else {
            debug!(category_id = %self.category_id, "Refreshing category");
            directory
                .categories
                .get(self.category_id.clone())
                .await?
                .ok_or_else(|| ProductError::UnknownCategory(self.category_id.to_string()))?
        };
        self.category_id = category.id.clone();
        self.category = category.name.clone();

        let sub_category = match &self.sub_category_id {
            Some(id) => directory
                .sub_categories
                .get(id.clone())
                .await?
                .filter(|s| s.belongs_to(&category.id)),
            None if self.sub_category.trim().is_empty() => {
                self.sub_category.clear();
                return Ok(());
            }
            None => {
                let wanted = self.sub_category.trim();
                directory
                    .sub_categories
                    .list()
                    .await?
                    .into_iter()
                    .find(|s| s.belongs_to(&category.id) && s.name.eq_ignore_ascii_case(wanted))
            }
        };
        let sub_category = sub_category.ok_or_else(|| ProductError::UnknownSubCategory {
            sub_category: self.sub_category.clone(),
            category: category.name.clone(),
        })?;
        self.sub_category_id = Some(sub_category.id);
        self.sub_category = sub_category.name;
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = CategoryDirectory;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let product = Product::new(id, params);
        product.validate()?;
        Ok(product)
    }

    async fn on_create(&mut self, directory: &CategoryDirectory) -> Result<(), ProductError> {
        self.resolve_links(directory).await
    }

    /// Applies the update and re-validates. The category lookup runs only when
    /// the category or sub-category changed; it then also refreshes both names.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        directory: &CategoryDirectory,
    ) -> Result<(), ProductError> {
        let relinked = update.category.is_some() || update.sub_category.is_some();
        update.apply_to(self);
        self.validate()?;
        if relinked {
            self.resolve_links(directory).await?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        directory: &CategoryDirectory,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::StockStatus => Ok(ProductActionResult::StockStatus(self.stock_status())),
            ProductAction::RefreshLinks => {
                let mut draft = self.clone();
                draft.resolve_links(directory).await?;
                *self = draft;
                Ok(ProductActionResult::RefreshLinks(()))
            }
        }
    }
}
