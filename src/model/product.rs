/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use crate::model::{CategoryId, SubCategoryId};
use crate::replenishment::coerce::{coerce_number, NumericIssue};
use crate::replenishment::{classify_stock, StockStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// The category this product belongs to. [`CategoryId::UNASSIGNED`] until
    /// the product actor has resolved [`category`](Self::category).
    pub category_id: CategoryId,
    /// Display copy of the category's name, refreshed on every lookup.
    pub category: String,
    pub sub_category_id: Option<SubCategoryId>,
    /// Display copy of the sub-category's name; empty when there is none.
    pub sub_category: String,
    pub min_qty: f64,
    pub max_qty: f64,
    pub qty_on_hand: f64,
    pub avg_daily_sales: f64,
    /// Supplier lead time in days.
    pub lead_time: f64,
    pub unit_price: f64,
    pub supplier: Option<String>,
}

impl Product {
    /// Builds a stored product from its id and creation payload.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            sku: params.sku,
            category_id: CategoryId::UNASSIGNED,
            category: params.category,
            sub_category_id: None,
            sub_category: params.sub_category,
            min_qty: params.min_qty,
            max_qty: params.max_qty,
            qty_on_hand: params.qty_on_hand,
            avg_daily_sales: params.avg_daily_sales,
            lead_time: params.lead_time,
            unit_price: params.unit_price,
            supplier: params.supplier,
        }
    }

    /// Stock status of this product's on-hand quantity against its min/max band.
    pub fn stock_status(&self) -> StockStatus {
        classify_stock(self.qty_on_hand, self.min_qty, self.max_qty)
    }

    /// Value of the stock on hand at unit price.
    pub fn inventory_value(&self) -> f64 {
        self.qty_on_hand * self.unit_price
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    pub min_qty: f64,
    pub max_qty: f64,
    pub qty_on_hand: f64,
    pub avg_daily_sales: f64,
    pub lead_time: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub supplier: Option<String>,
}

/// Payload for editing a product. `None` leaves the field as it is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub min_qty: Option<f64>,
    pub max_qty: Option<f64>,
    pub qty_on_hand: Option<f64>,
    pub avg_daily_sales: Option<f64>,
    pub lead_time: Option<f64>,
    pub unit_price: Option<f64>,
    pub supplier: Option<String>,
}

impl ProductUpdate {
    /// Applies the present fields onto `product`.
    ///
    /// A new category or sub-category name drops the matching resolved id so the
    /// product actor looks it up again.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(sku) = self.sku {
            product.sku = sku;
        }
        if let Some(category) = self.category {
            product.category = category;
            product.category_id = CategoryId::UNASSIGNED;
            product.sub_category_id = None;
        }
        if let Some(sub_category) = self.sub_category {
            product.sub_category = sub_category;
            product.sub_category_id = None;
        }
        if let Some(v) = self.min_qty {
            product.min_qty = v;
        }
        if let Some(v) = self.max_qty {
            product.max_qty = v;
        }
        if let Some(v) = self.qty_on_hand {
            product.qty_on_hand = v;
        }
        if let Some(v) = self.avg_daily_sales {
            product.avg_daily_sales = v;
        }
        if let Some(v) = self.lead_time {
            product.lead_time = v;
        }
        if let Some(v) = self.unit_price {
            product.unit_price = v;
        }
        if let Some(supplier) = self.supplier {
            product.supplier = Some(supplier).filter(|s| !s.trim().is_empty());
        }
    }
}

/// A product record as the admin forms and the REST backend hand it over.
///
/// Numeric fields are kept as raw JSON because the forms post them as strings
/// (`"12"`), blanks (`""`) or omit them. [`RawProduct::normalize`] turns the record
/// into a typed [`ProductCreate`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProduct {
    pub id: Option<ProductId>,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub sub_category: String,
    pub min_qty: Option<Value>,
    pub max_qty: Option<Value>,
    pub qty_on_hand: Option<Value>,
    pub avg_daily_sales: Option<Value>,
    pub lead_time: Option<Value>,
    pub unit_price: Option<Value>,
    pub supplier: Option<String>,
}

/// Result of coercing a [`RawProduct`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProduct {
    pub params: ProductCreate,
    /// One entry per numeric field that fell back to `0`.
    pub issues: Vec<NumericIssue>,
}

impl RawProduct {
    /// Coerces every numeric field, substituting `0` for anything unparseable.
    pub fn normalize(&self) -> NormalizedProduct {
        let mut issues = Vec::new();
        let mut field = |name: &'static str, value: &Option<Value>| {
            let coerced = coerce_number(name, value.as_ref());
            if let Some(issue) = coerced.issue {
                issues.push(issue);
            }
            coerced.value
        };

        let min_qty = field("minQty", &self.min_qty);
        let max_qty = field("maxQty", &self.max_qty);
        let qty_on_hand = field("qtyOnHand", &self.qty_on_hand);
        let avg_daily_sales = field("avgDailySales", &self.avg_daily_sales);
        let lead_time = field("leadTime", &self.lead_time);
        let unit_price = field("unitPrice", &self.unit_price);

        NormalizedProduct {
            params: ProductCreate {
                name: self.name.clone(),
                sku: self.sku.clone(),
                category: self.category.clone(),
                sub_category: self.sub_category.clone(),
                min_qty,
                max_qty,
                qty_on_hand,
                avg_daily_sales,
                lead_time,
                unit_price,
                supplier: self.supplier.clone().filter(|s| !s.trim().is_empty()),
            },
            issues,
        }
    }

    /// Coerces the record into a [`Product`], using `fallback_id` when it carries none.
    pub fn into_product(&self, fallback_id: ProductId) -> Product {
        let id = self.id.clone().unwrap_or(fallback_id);
        Product::new(id, self.normalize().params)
    }
}
