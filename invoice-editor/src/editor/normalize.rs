//! Lenient text-to-number normalization.
//!
//! Mid-keystroke input ("", "12.", "abc") must never error; the model takes
//! the best-effort numeric reading and falls back to zero. The input layer
//! is expected to filter character classes; this layer only interprets.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Best-effort unit price: non-negative decimal, zero when unparseable.
pub(crate) fn unit_price(raw: &str) -> Decimal {
    parse_decimal(raw)
        .filter(|d| !d.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

/// Best-effort quantity: integer >= 0, fractional input truncates.
pub(crate) fn quantity(raw: &str) -> u32 {
    parse_decimal(raw)
        .filter(|d| !d.is_sign_negative())
        .and_then(|d| d.trunc().to_u32())
        .unwrap_or(0)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    if let Ok(d) = Decimal::from_str(text) {
        return Some(d);
    }
    // A trailing decimal point is a number still being typed.
    Decimal::from_str(text.trim_end_matches('.')).ok()
}
