use inventory_console::category_actor::CategoryError;
use inventory_console::framework::ActorClient;
use inventory_console::lifecycle::{ConsoleConfig, ConsoleError, InventorySystem};
use inventory_console::model::{
    CategoryCreate, CategoryUpdate, ProductCreate, ProductUpdate, SubCategoryCreate,
    SubCategoryUpdate,
};
use inventory_console::product_actor::ProductError;
use inventory_console::replenishment::{ReplenishmentPolicy, StockStatus, Urgency};
use inventory_console::sub_category_actor::SubCategoryError;

fn cola() -> ProductCreate {
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
        supplier: Some("Acme".into()),
    }
}

/// Full end-to-end test with all real actors.
#[tokio::test]
async fn test_full_inventory_system_integration() {
    let system = InventorySystem::new();

    let beverages = system
        .category_client
        .create_category(CategoryCreate::new("Beverages", "Drinks and juices"))
        .await
        .expect("Failed to create category");
    let soft_drinks = system
        .sub_category_client
        .create_sub_category(SubCategoryCreate::new("Soft Drinks", "", beverages.clone()))
        .await
        .expect("Failed to create sub-category");

    let sub = system
        .sub_category_client
        .get(soft_drinks)
        .await
        .expect("Failed to get sub-category")
        .expect("Sub-category not found");
    assert_eq!(sub.parent_category_name, "Beverages");

    let product_id = system
        .product_client
        .create_product(cola())
        .await
        .expect("Failed to create product");

    let status = system
        .product_client
        .stock_status(product_id.clone())
        .await
        .expect("Failed to classify stock");
    assert_eq!(status, StockStatus::Optimal);

    // threshold = 10 + 2 * 5 = 20, so 15 on hand needs 35 more
    let report = system.replenishment_report().await.expect("Report failed");
    assert_eq!(report.items_to_restock, 1);
    assert_eq!(report.high_urgency, 0);
    assert_eq!(report.total_restock_qty, 35.0);
    assert_eq!(report.estimated_cost, 105.0);
    assert_eq!(report.alerts[0].urgency, Urgency::Medium);
    assert_eq!(report.alerts[0].product_id, product_id);

    // Sell down below minimum: alert becomes high urgency
    let updated = system
        .product_client
        .update_product(
            product_id.clone(),
            ProductUpdate {
                qty_on_hand: Some(4.0),
                ..ProductUpdate::default()
            },
        )
        .await
        .expect("Failed to update product");
    assert_eq!(updated.stock_status(), StockStatus::Critical);

    let report = system.replenishment_report().await.expect("Report failed");
    assert_eq!(report.high_urgency, 1);
    assert_eq!(report.alerts[0].restock_qty, 46.0);

    let dashboard = system.dashboard().await.expect("Dashboard failed");
    assert_eq!(dashboard.total_products, 1);
    assert_eq!(dashboard.total_categories, 1);
    assert_eq!(dashboard.low_stock_items, 1);
    assert_eq!(dashboard.critical_stock_items, 1);
    assert_eq!(dashboard.total_inventory_value, 12.0);
    assert_eq!(dashboard.recent_products[0].status, StockStatus::Critical);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_products_list_in_creation_order_and_alerts_reverse_it() {
    let system = InventorySystem::new();
    system
        .category_client
        .create_category(CategoryCreate::new("Beverages", ""))
        .await
        .unwrap();

    let mut ids = Vec::new();
    for (i, qty) in [1.0, 60.0, 2.0, 3.0].into_iter().enumerate() {
        let params = ProductCreate {
            sku: format!("BEV-{i}"),
            sub_category: String::new(),
            qty_on_hand: qty,
            ..cola()
        };
        ids.push(system.product_client.create_product(params).await.unwrap());
    }

    let listed: Vec<_> = system
        .product_client
        .list_products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(listed, ids);

    let alerted: Vec<_> = system
        .replenishment_report()
        .await
        .unwrap()
        .alerts
        .into_iter()
        .map(|a| a.product_id)
        .collect();
    assert_eq!(alerted, vec![ids[3].clone(), ids[2].clone(), ids[0].clone()]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_validation_failures_leave_state_untouched() {
    let system = InventorySystem::new();
    let beverages = system
        .category_client
        .create_category(CategoryCreate::new("Beverages", ""))
        .await
        .unwrap();
    system
        .sub_category_client
        .create_sub_category(SubCategoryCreate::new("Soft Drinks", "", beverages))
        .await
        .unwrap();

    // Duplicate category (case-insensitive)
    let dup = system
        .category_client
        .create_category(CategoryCreate::new("BEVERAGES", ""))
        .await;
    assert_eq!(dup, Err(CategoryError::DuplicateName("BEVERAGES".into())));

    // Sub-category under a missing parent
    let orphan = system
        .sub_category_client
        .create_sub_category(SubCategoryCreate::new(
            "Chips",
            "",
            inventory_console::model::CategoryId(99),
        ))
        .await;
    assert!(matches!(orphan, Err(SubCategoryError::ParentNotFound(_))));

    // Unknown category
    let unknown = system
        .product_client
        .create_product(ProductCreate {
            category: "Frozen".into(),
            sub_category: String::new(),
            ..cola()
        })
        .await;
    assert_eq!(unknown, Err(ProductError::UnknownCategory("Frozen".into())));

    // Malformed range on create
    let malformed = system
        .product_client
        .create_product(ProductCreate {
            max_qty: 5.0,
            ..cola()
        })
        .await;
    assert!(matches!(malformed, Err(ProductError::MalformedRange { .. })));

    // None of the failures consumed an id
    let id = system.product_client.create_product(cola()).await.unwrap();
    assert_eq!(id.0, 1);

    // Malformed range on update is rejected and the stored product is kept
    let rejected = system
        .product_client
        .update_product(
            id.clone(),
            ProductUpdate {
                min_qty: Some(80.0),
                ..ProductUpdate::default()
            },
        )
        .await;
    assert!(matches!(rejected, Err(ProductError::MalformedRange { .. })));
    let stored = system.product_client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.min_qty, 10.0);

    // Deleting, then classifying, reports not found
    system.product_client.delete(id.clone()).await.unwrap();
    let gone = system.product_client.stock_status(id).await;
    assert!(matches!(gone, Err(ProductError::NotFound(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_policy_is_used_for_reports() {
    let config = ConsoleConfig {
        replenishment: ReplenishmentPolicy::pass_through(),
        ..ConsoleConfig::default()
    };
    let system = InventorySystem::with_config(&config);
    system
        .category_client
        .create_category(CategoryCreate::new("Beverages", ""))
        .await
        .unwrap();

    // threshold = 10 + 5 * 4 = 30 > max 20; 25 on hand is above max
    system
        .product_client
        .create_product(ProductCreate {
            sub_category: String::new(),
            max_qty: 20.0,
            qty_on_hand: 25.0,
            avg_daily_sales: 5.0,
            lead_time: 4.0,
            unit_price: 2.0,
            ..cola()
        })
        .await
        .unwrap();

    let report = system.replenishment_report().await.unwrap();
    assert_eq!(report.alerts[0].restock_qty, -5.0);
    assert_eq!(report.estimated_cost, -10.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_category_rename_follows_through_to_products() {
    let system = InventorySystem::new();
    let beverages = system
        .category_client
        .create_category(CategoryCreate::new("Beverages", ""))
        .await
        .unwrap();
    let soft_drinks = system
        .sub_category_client
        .create_sub_category(SubCategoryCreate::new("Soft Drinks", "", beverages.clone()))
        .await
        .unwrap();
    let id = system.product_client.create_product(cola()).await.unwrap();

    let product = system.product_client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(product.category_id, beverages);
    assert_eq!(product.sub_category_id, Some(soft_drinks.clone()));

    system
        .update_category(
            beverages.clone(),
            CategoryUpdate {
                name: Some("Drinks".into()),
                description: None,
            },
        )
        .await
        .expect("Rename failed");

    let sub = system
        .sub_category_client
        .get(soft_drinks.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sub.parent_category_name, "Drinks");
    let product = system.product_client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(product.category, "Drinks");

    // Editing the sub-category after the rename resolves through the category id
    let edited = system
        .product_client
        .update_product(
            id.clone(),
            ProductUpdate {
                sub_category: Some("soft drinks".into()),
                ..ProductUpdate::default()
            },
        )
        .await
        .expect("Edit after rename failed");
    assert_eq!(edited.category, "Drinks");
    assert_eq!(edited.sub_category, "Soft Drinks");
    assert_eq!(edited.sub_category_id, Some(soft_drinks.clone()));

    // A sub-category rename is copied onto the product too
    system
        .update_sub_category(
            soft_drinks,
            SubCategoryUpdate {
                name: Some("Sodas".into()),
                ..SubCategoryUpdate::default()
            },
        )
        .await
        .unwrap();
    let product = system.product_client.get(id).await.unwrap().unwrap();
    assert_eq!(product.sub_category, "Sodas");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_parents_with_children_cannot_be_deleted() {
    let system = InventorySystem::new();
    let beverages = system
        .category_client
        .create_category(CategoryCreate::new("Beverages", ""))
        .await
        .unwrap();
    let snacks = system
        .category_client
        .create_category(CategoryCreate::new("Snacks", ""))
        .await
        .unwrap();
    let soft_drinks = system
        .sub_category_client
        .create_sub_category(SubCategoryCreate::new("Soft Drinks", "", beverages.clone()))
        .await
        .unwrap();
    let id = system.product_client.create_product(cola()).await.unwrap();

    let blocked = system.delete_category(beverages.clone()).await;
    assert!(matches!(
        blocked,
        Err(ConsoleError::Category(CategoryError::HasChildren {
            sub_categories: 1,
            products: 1,
            ..
        }))
    ));
    let blocked = system.delete_sub_category(soft_drinks.clone()).await;
    assert!(matches!(
        blocked,
        Err(ConsoleError::SubCategory(SubCategoryError::HasProducts { products: 1, .. }))
    ));
    let moved = system
        .update_sub_category(
            soft_drinks.clone(),
            SubCategoryUpdate {
                parent_category_id: Some(snacks.clone()),
                ..SubCategoryUpdate::default()
            },
        )
        .await;
    assert!(matches!(
        moved,
        Err(ConsoleError::SubCategory(SubCategoryError::HasProducts { .. }))
    ));
    assert_eq!(system.sub_category_client.list().await.unwrap().len(), 1);

    // Children removed bottom-up, then the parent goes
    system.product_client.delete(id).await.unwrap();
    system.delete_sub_category(soft_drinks).await.unwrap();
    system.delete_category(beverages).await.unwrap();
    assert!(system.sub_category_client.list().await.unwrap().is_empty());
    assert_eq!(system.category_client.list().await.unwrap().len(), 1);

    // An empty category deletes straight away
    system.delete_category(snacks).await.unwrap();

    system.shutdown().await.unwrap();
}
