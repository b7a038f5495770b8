use inventory_console::model::{Product, ProductCreate, ProductId, RawProduct};
use inventory_console::replenishment::{
    classify_stock, compute_replenishment, compute_replenishment_raw, ReplenishmentPolicy,
    StockStatus, Urgency,
};
use serde_json::json;

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
fn classifier_reference_table() {
    let cases = [
        (0.0, StockStatus::OutOfStock),
        (4.0, StockStatus::Critical),
        (8.0, StockStatus::Low),
        (25.0, StockStatus::Surplus),
        (15.0, StockStatus::Optimal),
    ];
    for (qty, expected) in cases {
        assert_eq!(classify_stock(qty, 10.0, 20.0), expected, "qty={qty}");
    }
}

#[test]
fn every_alert_is_below_its_threshold_and_urgency_tracks_minimum() {
    let mut products = Vec::new();
    let mut id = 0;
    for qty in [0.0, 3.0, 9.0, 10.0, 14.0, 21.0, 40.0] {
        for (ads, lead) in [(0.0, 0.0), (1.0, 5.0), (2.5, 4.0)] {
            id += 1;
            products.push(product(id, qty, 10.0, 30.0, ads, lead, 1.5));
        }
    }

    let report = compute_replenishment(&products);
    for alert in &report.alerts {
        let p = products.iter().find(|p| p.id == alert.product_id).unwrap();
        assert!(p.qty_on_hand < alert.threshold);
        let expected = if p.qty_on_hand < p.min_qty {
            Urgency::High
        } else {
            Urgency::Medium
        };
        assert_eq!(alert.urgency, expected);
        assert_eq!(alert.cost, alert.restock_qty * p.unit_price);
    }

    let alerted = products
        .iter()
        .filter(|p| p.qty_on_hand < p.min_qty + p.avg_daily_sales * p.lead_time)
        .count();
    assert_eq!(report.items_to_restock, alerted);
    assert_eq!(
        report.high_urgency,
        report.alerts.iter().filter(|a| a.urgency == Urgency::High).count()
    );
}

#[test]
fn unreadable_quantity_counts_as_zero() {
    let records: Vec<RawProduct> = serde_json::from_value(json!([
        {
            "name": "Green Tea",
            "sku": "TEA-001",
            "category": "Beverages",
            "minQty": 10,
            "maxQty": 40,
            "qtyOnHand": "abc",
            "avgDailySales": "1",
            "leadTime": "3",
            "unitPrice": "2.5"
        }
    ]))
    .unwrap();

    let report = compute_replenishment_raw(&records, &ReplenishmentPolicy::default());

    assert_eq!(report.items_to_restock, 1);
    let alert = &report.alerts[0];
    assert_eq!(alert.current_qty, 0.0);
    assert!(alert.restock_qty.is_finite());
    assert_eq!(alert.restock_qty, 40.0);
    assert_eq!(alert.cost, 100.0);
    assert_eq!(alert.urgency, Urgency::High);
    assert_eq!(alert.product_id, ProductId(1));
}

#[test]
fn report_serializes_for_the_console() {
    let report = compute_replenishment(&[product(1, 15.0, 10.0, 50.0, 2.0, 5.0, 3.0)]);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["itemsToRestock"], 1);
    assert_eq!(value["estimatedCost"], 105.0);
    assert_eq!(value["alerts"][0]["urgency"], "MEDIUM");
    assert_eq!(value["alerts"][0]["restockQty"], 35.0);
}
