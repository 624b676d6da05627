//! Renderable document structure for invoice-preview.

use invoice_editor::InvoiceSnapshot;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::totals::ComputedTotals;

/// A piece of display text, with blank fields swapped for a dimmed hint.
///
/// The substitution is presentation-only: it never reaches the draft or the
/// totals, and the flag keeps a hint distinguishable from a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldText {
    pub text: String,
    pub is_placeholder: bool,
}

impl FieldText {
    fn from_value(value: &str, hint: &str) -> Self {
        if value.is_empty() {
            Self {
                text: hint.to_string(),
                is_placeholder: true,
            }
        } else {
            Self {
                text: value.to_string(),
                is_placeholder: false,
            }
        }
    }
}

/// Issuer block of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuerBlock {
    pub name: FieldText,
    pub address: FieldText,
    pub tel: FieldText,
}

/// One table row, all cells already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
    pub name: String,
    pub unit_price: String,
    pub quantity: String,
    pub amount: String,
}

/// One line of the totals block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsLine {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsBlock {
    pub subtotal: TotalsLine,
    pub tax: TotalsLine,
    pub total: TotalsLine,
}

/// Marker identifying presentation-only elements the exporter must
/// suppress. A named marker, not styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeMarker {
    PreviewBadge,
}

/// Editor-only chrome carried alongside the document proper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromeElement {
    pub marker: ChromeMarker,
    pub label: String,
}

/// Fully materialized document structure. Complete the moment `render`
/// returns; there is no deferred layout work for an exporter to wait on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub title: String,
    pub date: FieldText,
    pub recipient: FieldText,
    /// Honorific suffix rendered after the recipient name.
    pub honorific: String,
    pub issuer: IssuerBlock,
    pub columns: [&'static str; 4],
    pub rows: Vec<DocumentRow>,
    pub totals: TotalsBlock,
    pub chrome: Vec<ChromeElement>,
}

impl RenderedDocument {
    /// The document as the exporter should capture it: chrome stripped,
    /// everything else untouched.
    pub fn export_view(&self) -> Self {
        let mut doc = self.clone();
        doc.chrome.clear();
        doc
    }
}

/// Format a Decimal for display, trimming trailing zeros.
fn format_decimal(d: &Decimal) -> String {
    let s = d.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Produce the renderable document for a snapshot and its totals.
pub fn render(snapshot: &InvoiceSnapshot, totals: &ComputedTotals) -> RenderedDocument {
    let draft = &snapshot.draft;

    let rows = draft
        .items
        .iter()
        .map(|item| DocumentRow {
            name: item.name.clone(),
            unit_price: format_decimal(&item.unit_price),
            quantity: item.quantity.to_string(),
            amount: format_decimal(&item.amount()),
        })
        .collect();

    RenderedDocument {
        title: "請求書".to_string(),
        date: FieldText::from_value(&draft.date, "日付"),
        recipient: FieldText::from_value(&draft.recipient_name, "宛名"),
        honorific: draft.honorific.as_str().to_string(),
        issuer: IssuerBlock {
            name: FieldText::from_value(&draft.issuer.name, "名前"),
            address: FieldText::from_value(&draft.issuer.address, "住所"),
            tel: FieldText::from_value(&draft.issuer.tel, "電話番号"),
        },
        columns: ["品名", "単価", "数量", "金額"],
        rows,
        totals: TotalsBlock {
            subtotal: TotalsLine {
                label: "小計",
                value: format_decimal(&totals.subtotal),
                unit: "円",
            },
            tax: TotalsLine {
                label: "消費税(10%)",
                value: format_decimal(&totals.tax),
                unit: "円",
            },
            total: TotalsLine {
                label: "合計",
                value: format_decimal(&totals.total),
                unit: "円",
            },
        },
        chrome: vec![ChromeElement {
            marker: ChromeMarker::PreviewBadge,
            label: "プレビュー".to_string(),
        }],
    }
}
