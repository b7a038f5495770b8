//! # Inventory Console
//!
//! Core of an inventory admin console: resource actors for products, categories and
//! sub-categories, and the replenishment engine that turns a product snapshot into
//! stock statuses, restock alerts and dashboard figures.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`replenishment`])
//! Pure, synchronous functions over `&[Product]`:
//! [`classify_stock`](replenishment::classify_stock),
//! [`compute_replenishment`](replenishment::compute_replenishment) and
//! [`summarize_dashboard`](replenishment::summarize_dashboard). They hold no state,
//! so callers re-run them after every fetch.
//!
//! ### 2. The Actors ([`framework`], [`category_actor`], [`sub_category_actor`], [`product_actor`])
//! A generic [`ResourceActor`](framework::ResourceActor) owns each resource's store and
//! processes requests one at a time. The resources implement
//! [`ActorEntity`](framework::ActorEntity) to plug in validation and lookups.
//!
//! ### 3. The Interface ([`clients`])
//! Typed clients wrap the generic `ResourceClient` and return each resource's own
//! error enum.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`InventorySystem`](lifecycle::InventorySystem) spawns and wires the actors,
//! [`ConsoleConfig`](lifecycle::ConsoleConfig) holds the tunables, and
//! [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod category_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod replenishment;
pub mod sub_category_actor;
