//! # Replenishment Engine
//!
//! Pure computations over a product snapshot:
//!
//! - [`classify_stock`] labels one product's on-hand quantity against its min/max band.
//! - [`compute_replenishment`] finds products whose stock will not cover the supplier
//!   lead time and totals what it costs to refill them to `max_qty`.
//! - [`summarize_dashboard`] adds the dashboard counters on top of the report.
//!
//! ```text
//! threshold   = min_qty + avg_daily_sales * lead_time
//! alert when  qty_on_hand < threshold
//! urgency     = HIGH if qty_on_hand < min_qty, else MEDIUM
//! restock_qty = max_qty - qty_on_hand
//! cost        = restock_qty * unit_price
//! ```
//!
//! None of these functions hold state or touch the actors. The caller fetches the
//! products (see [`ProductClient::list_products`](crate::clients::ProductClient::list_products))
//! and re-runs them after every fetch.

pub mod calculator;
pub mod coerce;
pub mod dashboard;
pub mod error;
pub mod policy;
pub mod stock;

pub use calculator::*;
pub use dashboard::*;
pub use error::*;
pub use policy::ReplenishmentPolicy;
pub use stock::*;
