//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity-level failures are carried
//! through boxed in [`FrameworkError::EntityError`] so each resource keeps its own
//! error enum.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type if this is an `EntityError` carrying one.
    pub fn entity_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("bad sku")]
    struct BadSku;

    #[test]
    fn entity_error_downcasts_to_original_type() {
        let err = FrameworkError::EntityError(Box::new(BadSku));
        assert_eq!(err.entity_error::<BadSku>(), Some(&BadSku));
        assert_eq!(err.to_string(), "Entity error: bad sku");
    }

    #[test]
    fn non_entity_errors_do_not_downcast() {
        assert!(FrameworkError::ActorClosed.entity_error::<BadSku>().is_none());
        assert!(FrameworkError::NotFound("product_9".into())
            .entity_error::<BadSku>()
            .is_none());
    }
}
