//! Stock status classification.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where a product's on-hand quantity sits relative to its min/max band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    Critical,
    Low,
    Surplus,
    Optimal,
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StockStatus::OutOfStock => "OUT OF STOCK",
            StockStatus::Critical => "CRITICAL",
            StockStatus::Low => "LOW",
            StockStatus::Surplus => "SURPLUS",
            StockStatus::Optimal => "OPTIMAL",
        };
        f.write_str(label)
    }
}

/// Fraction of `min_qty` under which stock counts as critical.
pub const CRITICAL_FRACTION: f64 = 0.5;

/// Classifies an on-hand quantity. Rules are checked in order; the first match wins:
///
/// 1. `qty <= 0` is [`StockStatus::OutOfStock`]
/// 2. `qty < min * 0.5` is [`StockStatus::Critical`]
/// 3. `qty < min` is [`StockStatus::Low`]
/// 4. `qty > max` is [`StockStatus::Surplus`]
/// 5. anything else is [`StockStatus::Optimal`]
///
/// A `min_qty` of zero skips rules 2 and 3. The range is not validated here: with
/// `max < min` the rules still apply in the same order (products are rejected at
/// creation when their range is malformed).
pub fn classify_stock(qty_on_hand: f64, min_qty: f64, max_qty: f64) -> StockStatus {
    if qty_on_hand <= 0.0 {
        StockStatus::OutOfStock
    } else if qty_on_hand < min_qty * CRITICAL_FRACTION {
        StockStatus::Critical
    } else if qty_on_hand < min_qty {
        StockStatus::Low
    } else if qty_on_hand > max_qty {
        StockStatus::Surplus
    } else {
        StockStatus::Optimal
    }
}
