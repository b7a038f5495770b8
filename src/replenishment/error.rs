//! Error types for the replenishment engine.

use thiserror::Error;

/// Input problems the engine can detect in product data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// A numeric field could not be read as a finite number.
    #[error("Invalid numeric input for {field}: {value}")]
    InvalidNumericInput { field: String, value: String },

    /// The configured maximum is below the minimum.
    #[error("Malformed stock range: maxQty {max_qty} is below minQty {min_qty}")]
    MalformedRange { min_qty: f64, max_qty: f64 },
}

/// Checks `min_qty <= max_qty`.
pub fn check_range(min_qty: f64, max_qty: f64) -> Result<(), InventoryError> {
    if max_qty < min_qty {
        return Err(InventoryError::MalformedRange { min_qty, max_qty });
    }
    Ok(())
}
