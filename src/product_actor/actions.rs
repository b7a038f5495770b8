//! Custom actions for the Product actor.
//!
//! Handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! in [`entity`](super::entity).

use crate::replenishment::StockStatus;

/// Product operations beyond CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Classifies the current on-hand quantity. Read-only.
    StockStatus,
    /// Re-reads the linked category and sub-category by id and refreshes the
    /// copied names. Fails if either link no longer resolves.
    RefreshLinks,
}

/// Results from [`ProductAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockStatus(StockStatus),
    RefreshLinks(()),
}
