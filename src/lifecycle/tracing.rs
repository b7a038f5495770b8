//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # actor lifecycle, creates, updates
//! RUST_LOG=debug cargo run    # payloads, lookups, report counters
//! RUST_LOG=inventory_console::replenishment=debug cargo run
//! ```
//!
//! Actor events carry an `entity_type` field (`Product`, `Category`, `SubCategory`)
//! instead of the module path, so a create on the product actor reads:
//!
//! ```text
//! DEBUG create_product{sku="BEV-001"}: Sending request
//! DEBUG Resolving category category="Beverages" sub_category=""
//!  INFO Created entity_type="Product" id=product_1 size=1
//! ```
//!
//! Client methods are `#[instrument]`ed, so events raised while a request is in
//! flight nest under the client call's span.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Defaults to `info` when `RUST_LOG` is unset.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
