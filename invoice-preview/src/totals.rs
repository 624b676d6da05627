//! Totals derivation for invoice-preview.

use invoice_editor::InvoiceSnapshot;
use once_cell::sync::Lazy;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Consumption tax rate applied to the subtotal.
static TAX_RATE: Lazy<Decimal> = Lazy::new(|| Decimal::new(10, 2)); // 0.10

/// Derived totals. Never stored; always recomputed from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl ComputedTotals {
    /// Pure derivation: the same snapshot always yields the same totals.
    ///
    /// The subtotal sums normalized row amounts, the tax rounds half-up to
    /// whole yen, and the total is never rounded on its own. All arithmetic
    /// saturates at `Decimal::MAX`; derivation runs inside the edit cycle
    /// and must never panic on extreme input.
    pub fn derive(snapshot: &InvoiceSnapshot) -> Self {
        let subtotal = snapshot
            .draft
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.amount()));
        let tax = subtotal
            .saturating_mul(*TAX_RATE)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self {
            subtotal,
            tax,
            total: subtotal.saturating_add(tax),
        }
    }
}
