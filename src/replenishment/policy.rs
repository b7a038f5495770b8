//! Tunables for the replenishment calculation.

use serde::{Deserialize, Serialize};

/// How restock quantities are derived once a product is below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplenishmentPolicy {
    /// Clamp `max_qty - qty_on_hand` to zero when stock already exceeds `max_qty`
    /// but is still under the threshold (only possible when the threshold is above
    /// `max_qty`). When false the negative quantity and cost pass through.
    pub clamp_negative_restock: bool,
}

impl Default for ReplenishmentPolicy {
    fn default() -> Self {
        Self {
            clamp_negative_restock: true,
        }
    }
}

impl ReplenishmentPolicy {
    /// Reports `max_qty - qty_on_hand` as computed, negative or not.
    pub fn pass_through() -> Self {
        Self {
            clamp_negative_restock: false,
        }
    }
}
