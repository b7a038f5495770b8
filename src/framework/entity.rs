//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every console resource (Product, Category,
//! SubCategory) implements to be managed by the generic `ResourceActor`. It names the
//! id, DTO, action, context and error types, and provides the lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`) the actor loop calls.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override them only when the resource needs validation or
//! lookups against other actors.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Ordering
/// Ids are generated from a monotonically increasing `u32` counter, and the actor keeps
/// its store ordered by id. `Ord` on the id therefore means "creation order", which is
/// what [`ResourceClient::list`](crate::framework::ResourceClient::list) returns.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`, which lets
/// the lifecycle layer wire dependencies after all actors exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32> + 'static;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `StockStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// The actor runs this on a copy and only stores it on `Ok`, so a rejected
    /// update leaves the stored entity untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
