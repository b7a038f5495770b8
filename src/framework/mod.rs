//! Generic actor framework for the console's resources.
//!
//! Every resource screen (products, categories, sub-categories) talks to one
//! [`ResourceActor`] through a cloned [`ResourceClient`]. The entity types implement
//! [`ActorEntity`] and the actor supplies the CRUD + List + Action loop.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store
//! - [`ResourceClient`] - Typed handle for sending requests
//! - [`ActorClient`] - Shared `get`/`list`/`delete` for resource-specific clients
//! - [`FrameworkError`] - Plumbing errors, with entity errors boxed inside
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
