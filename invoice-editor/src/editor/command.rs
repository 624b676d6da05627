//! Edit command set for invoice-editor.

use serde::{Deserialize, Serialize};

use crate::models::Honorific;

/// Issuer block fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuerField {
    Name,
    Address,
    Tel,
}

/// Line item fields, each carrying the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Name(String),
    UnitPrice(String),
    Quantity(String),
}

/// The closed set of edits the editor accepts. Dispatched exhaustively by
/// `InvoiceEditor::apply`; there is no string-keyed field lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCommand {
    SetDate(String),
    SetRecipientName(String),
    SetHonorific(Honorific),
    SetIssuerField { field: IssuerField, value: String },
    SetItemField { index: usize, field: ItemField },
    AddItem,
}
