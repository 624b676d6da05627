//! Invoice draft model for invoice-editor.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Recipient honorific suffix. Exactly one is always selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Honorific {
    /// "様" — addressed to a person.
    #[default]
    Personal,
    /// "御中" — addressed to an organization.
    Organizational,
}

impl Honorific {
    pub fn as_str(&self) -> &'static str {
        match self {
            Honorific::Personal => "様",
            Honorific::Organizational => "御中",
        }
    }
}

/// Issuer identity block. Free text, blank by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerInfo {
    pub name: String,
    pub address: String,
    pub tel: String,
}

/// The editable draft. Owned exclusively by the editor; consumers only
/// ever see it through `InvoiceSnapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Stored verbatim; defaulted to today at creation, never validated.
    pub date: String,
    pub recipient_name: String,
    pub honorific: Honorific,
    pub issuer: IssuerInfo,
    /// Ordered rows, never empty. Row identity is its position.
    pub items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// A new draft: today's date, one blank row, "様" selected.
    pub fn new() -> Self {
        Self {
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            recipient_name: String::new(),
            honorific: Honorific::default(),
            issuer: IssuerInfo::default(),
            items: vec![LineItem::blank()],
        }
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable copy of the draft handed to the consumer on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    /// Monotonically increasing; bumps exactly once per accepted edit.
    pub revision: u64,
    pub draft: InvoiceDraft,
}
