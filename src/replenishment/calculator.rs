//! Replenishment report: which products to reorder, how many, and at what cost.

use crate::model::{Product, ProductId, RawProduct};
use crate::replenishment::policy::ReplenishmentPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Severity of a restock alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Urgency {
    /// Stock is already below `min_qty`.
    High,
    /// Stock is above `min_qty` but will not cover the supplier lead time.
    Medium,
}

/// One product that needs restocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentAlert {
    pub product_id: ProductId,
    pub name: String,
    pub sku: String,
    pub current_qty: f64,
    pub threshold: f64,
    pub restock_qty: f64,
    pub cost: f64,
    pub urgency: Urgency,
}

/// Aggregate of all alerts for one product list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentReport {
    pub items_to_restock: usize,
    pub high_urgency: usize,
    pub total_restock_qty: f64,
    pub estimated_cost: f64,
    /// Newest product first.
    pub alerts: Vec<ReplenishmentAlert>,
}

/// Reorder point: the minimum plus the sales expected during the supplier lead time.
pub fn restock_threshold(product: &Product) -> f64 {
    product.min_qty + product.avg_daily_sales * product.lead_time
}

/// Builds the alert for `product`, or `None` when stock covers the threshold.
pub fn evaluate(product: &Product, policy: &ReplenishmentPolicy) -> Option<ReplenishmentAlert> {
    let threshold = restock_threshold(product);
    if product.qty_on_hand >= threshold {
        return None;
    }

    let urgency = if product.qty_on_hand < product.min_qty {
        Urgency::High
    } else {
        Urgency::Medium
    };

    let mut restock_qty = product.max_qty - product.qty_on_hand;
    if restock_qty < 0.0 && policy.clamp_negative_restock {
        debug!(product_id = %product.id, restock_qty, "Clamping negative restock quantity");
        restock_qty = 0.0;
    }

    Some(ReplenishmentAlert {
        product_id: product.id.clone(),
        name: product.name.clone(),
        sku: product.sku.clone(),
        current_qty: product.qty_on_hand,
        threshold,
        restock_qty,
        cost: restock_qty * product.unit_price,
        urgency,
    })
}

/// Computes the replenishment report with the default policy.
pub fn compute_replenishment(products: &[Product]) -> ReplenishmentReport {
    compute_replenishment_with(products, &ReplenishmentPolicy::default())
}

/// Computes the replenishment report.
///
/// Alerts are listed in reverse input order, so the most recently added product
/// comes first. The input is never modified and nothing is cached; call it again
/// whenever the product list changes.
#[instrument(skip_all, fields(products = products.len()))]
pub fn compute_replenishment_with(
    products: &[Product],
    policy: &ReplenishmentPolicy,
) -> ReplenishmentReport {
    let alerts: Vec<ReplenishmentAlert> = products
        .iter()
        .rev()
        .filter_map(|p| evaluate(p, policy))
        .collect();

    let report = ReplenishmentReport {
        items_to_restock: alerts.len(),
        high_urgency: alerts.iter().filter(|a| a.urgency == Urgency::High).count(),
        total_restock_qty: alerts.iter().map(|a| a.restock_qty).sum(),
        estimated_cost: alerts.iter().map(|a| a.cost).sum(),
        alerts,
    };
    debug!(
        items_to_restock = report.items_to_restock,
        high_urgency = report.high_urgency,
        "Replenishment computed"
    );
    report
}

/// Coerces loosely-typed records and computes the report.
///
/// Unreadable numeric fields count as `0`. Records without an id are numbered in
/// input order starting right above the largest explicit id, so a generated id
/// never collides with one carried by another record.
pub fn compute_replenishment_raw(
    records: &[RawProduct],
    policy: &ReplenishmentPolicy,
) -> ReplenishmentReport {
    let mut next_id = records
        .iter()
        .filter_map(|raw| raw.id.as_ref().map(|id| id.0))
        .max()
        .unwrap_or(0);
    let products: Vec<Product> = records
        .iter()
        .map(|raw| {
            let fallback = match &raw.id {
                Some(id) => id.clone(),
                None => {
                    next_id += 1;
                    ProductId(next_id)
                }
            };
            raw.into_product(fallback)
        })
        .collect();
    compute_replenishment_with(&products, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductCreate;

    fn product(id: u32, qty: f64, min: f64, max: f64, ads: f64, lead: f64, price: f64) -> Product {
        Product::new(
            ProductId(id),
            ProductCreate {
                name: format!("Item {id}"),
                sku: format!("SKU-{id}"),
                category: "General".into(),
                min_qty: min,
                max_qty: max,
                qty_on_hand: qty,
                avg_daily_sales: ads,
                lead_time: lead,
                unit_price: price,
                ..ProductCreate::default()
            },
        )
    }

    #[test]
    fn empty_list_gives_empty_report() {
        let report = compute_replenishment(&[]);
        assert_eq!(report, ReplenishmentReport::default());
        assert_eq!(report.items_to_restock, 0);
        assert_eq!(report.high_urgency, 0);
        assert_eq!(report.total_restock_qty, 0.0);
        assert_eq!(report.estimated_cost, 0.0);
        assert!(report.alerts.is_empty());
    }

    #[test]
    fn medium_alert_worked_example() {
        let p = product(1, 15.0, 10.0, 50.0, 2.0, 5.0, 3.0);
        let report = compute_replenishment(&[p]);

        assert_eq!(report.items_to_restock, 1);
        assert_eq!(report.high_urgency, 0);
        assert_eq!(report.total_restock_qty, 35.0);
        assert_eq!(report.estimated_cost, 105.0);

        let alert = &report.alerts[0];
        assert_eq!(alert.threshold, 20.0);
        assert_eq!(alert.urgency, Urgency::Medium);
        assert_eq!(alert.restock_qty, 35.0);
        assert_eq!(alert.cost, 105.0);
        assert_eq!(alert.current_qty, 15.0);
        assert_eq!(alert.sku, "SKU-1");
    }

    #[test]
    fn below_minimum_is_high_urgency() {
        let report = compute_replenishment(&[product(1, 4.0, 10.0, 30.0, 1.0, 2.0, 2.0)]);
        assert_eq!(report.high_urgency, 1);
        assert_eq!(report.alerts[0].urgency, Urgency::High);
        assert_eq!(report.alerts[0].restock_qty, 26.0);
        assert_eq!(report.alerts[0].cost, 52.0);
    }

    #[test]
    fn stock_at_threshold_is_not_alerted() {
        // threshold = 10 + 2 * 5 = 20
        let report = compute_replenishment(&[product(1, 20.0, 10.0, 50.0, 2.0, 5.0, 3.0)]);
        assert_eq!(report.items_to_restock, 0);
    }

    #[test]
    fn alerts_are_newest_first() {
        let products = vec![
            product(1, 1.0, 10.0, 20.0, 0.0, 0.0, 1.0),
            product(2, 50.0, 10.0, 80.0, 0.0, 0.0, 1.0),
            product(3, 2.0, 10.0, 20.0, 0.0, 0.0, 1.0),
            product(4, 3.0, 10.0, 20.0, 0.0, 0.0, 1.0),
        ];
        let ids: Vec<u32> = compute_replenishment(&products)
            .alerts
            .iter()
            .map(|a| a.product_id.0)
            .collect();
        assert_eq!(ids, vec![4, 3, 1]);
    }

    #[test]
    fn aggregates_sum_over_alerts() {
        let products = vec![
            product(1, 2.0, 10.0, 20.0, 1.0, 3.0, 2.5),  // high, restock 18, cost 45
            product(2, 12.0, 10.0, 30.0, 1.0, 5.0, 1.0), // medium, restock 18, cost 18
            product(3, 40.0, 10.0, 50.0, 1.0, 5.0, 9.0), // fine
        ];
        let report = compute_replenishment(&products);
        assert_eq!(report.items_to_restock, 2);
        assert_eq!(report.high_urgency, 1);
        assert_eq!(report.total_restock_qty, 36.0);
        assert_eq!(report.estimated_cost, 63.0);
    }

    #[test]
    fn negative_restock_is_clamped_by_default() {
        // threshold = 10 + 5 * 4 = 30 but max is 20; 25 on hand is over max yet under threshold
        let p = product(1, 25.0, 10.0, 20.0, 5.0, 4.0, 2.0);

        let clamped = compute_replenishment(std::slice::from_ref(&p));
        assert_eq!(clamped.alerts[0].restock_qty, 0.0);
        assert_eq!(clamped.alerts[0].cost, 0.0);
        assert_eq!(clamped.alerts[0].urgency, Urgency::Medium);

        let raw = compute_replenishment_with(&[p], &ReplenishmentPolicy::pass_through());
        assert_eq!(raw.alerts[0].restock_qty, -5.0);
        assert_eq!(raw.estimated_cost, -10.0);
    }

    #[test]
    fn malformed_range_is_deterministic() {
        // max < min: still alerted on threshold, restock clamps to zero
        let p = product(1, 8.0, 10.0, 5.0, 0.0, 0.0, 4.0);
        let report = compute_replenishment(&[p]);
        assert_eq!(report.alerts[0].urgency, Urgency::High);
        assert_eq!(report.alerts[0].restock_qty, 0.0);
    }

    #[test]
    fn records_without_id_do_not_reuse_explicit_ids() {
        let low = |id: Option<u32>| RawProduct {
            id: id.map(ProductId),
            name: "Loose".into(),
            sku: "LOOSE".into(),
            min_qty: Some(serde_json::json!(10)),
            max_qty: Some(serde_json::json!(20)),
            qty_on_hand: Some(serde_json::json!(1)),
            ..RawProduct::default()
        };
        let records = vec![low(None), low(Some(1)), low(None), low(Some(4))];

        let report = compute_replenishment_raw(&records, &ReplenishmentPolicy::default());

        let ids: Vec<u32> = report.alerts.iter().map(|a| a.product_id.0).collect();
        assert_eq!(ids, vec![4, 6, 1, 5]);
    }

    #[test]
    fn repeated_runs_are_bitwise_identical() {
        let products = vec![
            product(1, 2.0, 10.0, 20.0, 0.3, 7.0, 0.1),
            product(2, 12.0, 10.0, 30.0, 1.7, 5.0, 1.3),
        ];
        let first = compute_replenishment(&products);
        let second = compute_replenishment(&products);
        assert_eq!(first, second);
        assert_eq!(first.estimated_cost.to_bits(), second.estimated_cost.to_bits());
        assert_eq!(first.total_restock_qty.to_bits(), second.total_restock_qty.to_bits());
    }
}
