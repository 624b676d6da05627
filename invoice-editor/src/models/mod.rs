//! Domain models for invoice-editor.

mod draft;
mod line_item;

pub use draft::{Honorific, InvoiceDraft, InvoiceSnapshot, IssuerInfo};
pub use line_item::LineItem;
