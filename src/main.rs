//! Demo: seeds a small catalog, then logs the dashboard and the replenishment report.

use inventory_console::lifecycle::{setup_tracing, ConsoleConfig, InventorySystem};
use inventory_console::model::{CategoryCreate, ProductCreate, SubCategoryCreate};
use tracing::{error, info, Instrument};

async fn seed(system: &InventorySystem) -> Result<(), String> {
    let beverages = system
        .category_client
        .create_category(CategoryCreate::new("Beverages", "Drinks and juices"))
        .await
        .map_err(|e| e.to_string())?;
    let snacks = system
        .category_client
        .create_category(CategoryCreate::new("Snacks", "Chips and biscuits"))
        .await
        .map_err(|e| e.to_string())?;

    system
        .sub_category_client
        .create_sub_category(SubCategoryCreate::new("Soft Drinks", "", beverages))
        .await
        .map_err(|e| e.to_string())?;
    system
        .sub_category_client
        .create_sub_category(SubCategoryCreate::new("Chips", "", snacks))
        .await
        .map_err(|e| e.to_string())?;

    let acme = Some("Acme Wholesale".to_string());
    let catalog = [
        ProductCreate {
            name: "Cola 330ml".into(),
            sku: "BEV-001".into(),
            category: "Beverages".into(),
            sub_category: "Soft Drinks".into(),
            min_qty: 10.0,
            max_qty: 50.0,
            qty_on_hand: 15.0,
            avg_daily_sales: 2.0,
            lead_time: 5.0,
            unit_price: 3.0,
            supplier: acme.clone(),
        },
        ProductCreate {
            name: "Orange Juice 1L".into(),
            sku: "BEV-002".into(),
            category: "Beverages".into(),
            min_qty: 20.0,
            max_qty: 80.0,
            qty_on_hand: 70.0,
            avg_daily_sales: 3.0,
            lead_time: 4.0,
            unit_price: 4.5,
            ..ProductCreate::default()
        },
        ProductCreate {
            name: "Sea Salt Chips".into(),
            sku: "SNK-001".into(),
            category: "Snacks".into(),
            sub_category: "Chips".into(),
            min_qty: 30.0,
            max_qty: 120.0,
            qty_on_hand: 12.0,
            avg_daily_sales: 6.0,
            lead_time: 3.0,
            unit_price: 1.8,
            supplier: acme.clone(),
        },
        ProductCreate {
            name: "Paprika Chips".into(),
            sku: "SNK-002".into(),
            category: "Snacks".into(),
            sub_category: "Chips".into(),
            min_qty: 30.0,
            max_qty: 120.0,
            avg_daily_sales: 4.0,
            lead_time: 3.0,
            unit_price: 1.8,
            supplier: acme,
            ..ProductCreate::default()
        },
        ProductCreate {
            name: "Trail Mix".into(),
            sku: "SNK-003".into(),
            category: "snacks".into(),
            min_qty: 5.0,
            max_qty: 20.0,
            qty_on_hand: 26.0,
            avg_daily_sales: 0.5,
            lead_time: 7.0,
            unit_price: 6.0,
            ..ProductCreate::default()
        },
    ];
    for params in catalog {
        system
            .product_client
            .create_product(params)
            .await
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ConsoleConfig::from_env().map_err(|e| e.to_string())?;
    let system = InventorySystem::with_config(&config);

    seed(&system)
        .instrument(tracing::info_span!("seed"))
        .await?;

    match system.dashboard().await {
        Ok(dashboard) => {
            let json = serde_json::to_string_pretty(&dashboard).map_err(|e| e.to_string())?;
            info!(
                products = dashboard.total_products,
                low = dashboard.low_stock_items,
                critical = dashboard.critical_stock_items,
                "Dashboard\n{json}"
            );
        }
        Err(e) => error!(error = %e, "Dashboard unavailable"),
    }

    let report = system
        .replenishment_report()
        .await
        .map_err(|e| e.to_string())?;
    for alert in &report.alerts {
        info!(
            sku = %alert.sku,
            urgency = ?alert.urgency,
            restock_qty = alert.restock_qty,
            cost = alert.cost,
            "Restock {}",
            alert.name
        );
    }
    info!(
        items = report.items_to_restock,
        high = report.high_urgency,
        total_qty = report.total_restock_qty,
        estimated_cost = report.estimated_cost,
        "Replenishment report"
    );

    system.shutdown().await
}
