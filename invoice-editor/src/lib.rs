//! invoice-editor: draft ownership, input normalization, and snapshot
//! emission for the invoice drafting tool.
//!
//! The editor owns the one mutable draft. Edits arrive as a closed command
//! set, text input is normalized rather than rejected, and every accepted
//! edit hands a full immutable snapshot to the registered consumer.

pub mod editor;
pub mod error;
pub mod models;
pub mod observability;

pub use editor::{EditCommand, InvoiceEditor, IssuerField, ItemField, SnapshotSink};
pub use error::EditError;
pub use models::{Honorific, InvoiceDraft, InvoiceSnapshot, IssuerInfo, LineItem};
