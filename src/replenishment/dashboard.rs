//! Summary figures for the inventory dashboard.

use crate::model::{Product, ProductId};
use crate::replenishment::calculator::{compute_replenishment_with, ReplenishmentAlert, ReplenishmentReport};
use crate::replenishment::policy::ReplenishmentPolicy;
use crate::replenishment::stock::{StockStatus, CRITICAL_FRACTION};
use serde::{Deserialize, Serialize};

/// How many recent rows the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardLimits {
    pub recent_products: usize,
    pub recent_alerts: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            recent_products: 5,
            recent_alerts: 3,
        }
    }
}

/// A recently added product with its stock status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentProduct {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub qty_on_hand: f64,
    pub min_qty: f64,
    pub max_qty: f64,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_categories: usize,
    /// Products with stock below `min_qty`.
    pub low_stock_items: usize,
    /// Products with stock below half of `min_qty`.
    pub critical_stock_items: usize,
    pub total_inventory_value: f64,
    pub recent_products: Vec<RecentProduct>,
    pub recent_alerts: Vec<ReplenishmentAlert>,
    pub replenishment: ReplenishmentReport,
}

/// Builds the dashboard from one product snapshot.
///
/// The low and critical counters overlap: a critical product is also counted as low.
pub fn summarize_dashboard(
    products: &[Product],
    total_categories: usize,
    policy: &ReplenishmentPolicy,
    limits: &DashboardLimits,
) -> DashboardSummary {
    let replenishment = compute_replenishment_with(products, policy);

    let recent_products = products
        .iter()
        .rev()
        .take(limits.recent_products)
        .map(|p| RecentProduct {
            id: p.id.clone(),
            name: p.name.clone(),
            sku: p.sku.clone(),
            qty_on_hand: p.qty_on_hand,
            min_qty: p.min_qty,
            max_qty: p.max_qty,
            status: p.stock_status(),
        })
        .collect();

    DashboardSummary {
        total_products: products.len(),
        total_categories,
        low_stock_items: products.iter().filter(|p| p.qty_on_hand < p.min_qty).count(),
        critical_stock_items: products
            .iter()
            .filter(|p| p.qty_on_hand < p.min_qty * CRITICAL_FRACTION)
            .count(),
        total_inventory_value: products.iter().map(Product::inventory_value).sum(),
        recent_products,
        recent_alerts: replenishment
            .alerts
            .iter()
            .take(limits.recent_alerts)
            .cloned()
            .collect(),
        replenishment,
    }
}
