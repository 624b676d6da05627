//! Line item model for invoice-editor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billable row of the draft.
///
/// Numeric fields keep both the user's literal keystrokes and the
/// normalized value, so a half-typed "12." stays visible in the editable
/// field while computation sees 12.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price_text: String,
    pub unit_price: Decimal,
    pub quantity_text: String,
    pub quantity: u32,
}

impl LineItem {
    /// A fresh row: blank name, zero price, quantity 1.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            unit_price_text: String::new(),
            unit_price: Decimal::ZERO,
            quantity_text: "1".to_string(),
            quantity: 1,
        }
    }

    /// Row amount. Derived, never stored: unit price times quantity.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing; extreme input is
    /// still valid keystrokes and must never abort an edit.
    pub fn amount(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}
