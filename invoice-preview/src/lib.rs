//! invoice-preview: pure derivation of invoice totals and the renderable
//! document handed to the exporter.
//!
//! Everything here is a function of a snapshot. The preview keeps no
//! mutable draft state of its own, so it can never disagree with the
//! editor that feeds it.

mod document;
mod preview;
mod totals;

pub use document::{
    render, ChromeElement, ChromeMarker, DocumentRow, FieldText, IssuerBlock, RenderedDocument,
    TotalsBlock, TotalsLine,
};
pub use preview::{InvoicePreview, PreviewFrame, PreviewHandle};
pub use totals::ComputedTotals;
