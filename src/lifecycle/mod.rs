//! # System Lifecycle
//!
//! Starting, wiring and stopping the console's actors, plus configuration and
//! tracing setup.
//!
//! Actors are created without dependencies and get them at `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for Category    { type Context = (); }
//! impl ActorEntity for SubCategory { type Context = CategoryClient; }
//! impl ActorEntity for Product     { type Context = CategoryDirectory; }
//! ```
//!
//! Shutdown drops every client; each actor's receive loop then ends. The
//! dependency chain Product → SubCategory → Category has no cycle, so the clones
//! held in contexts are released as the dependents stop.

pub mod config;
pub mod inventory_system;
pub mod tracing;

pub use config::*;
pub use inventory_system::*;
pub use self::tracing::*;
