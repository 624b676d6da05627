//! Draft ownership and edit dispatch for invoice-editor.

mod command;
mod normalize;

pub use command::{EditCommand, IssuerField, ItemField};

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::EditError;
use crate::models::{InvoiceDraft, InvoiceSnapshot, LineItem};

/// Consumer of snapshot emissions. Exactly one may be registered.
pub trait SnapshotSink {
    fn on_snapshot(&mut self, snapshot: &InvoiceSnapshot);
}

/// Owns the draft and applies edit commands.
///
/// Every accepted edit bumps the revision and synchronously hands a full
/// snapshot to the registered sink, so a consumer can never observe a
/// partially applied edit or a stale total.
pub struct InvoiceEditor {
    session_id: Uuid,
    draft: InvoiceDraft,
    revision: u64,
    sink: Option<Box<dyn SnapshotSink>>,
}

impl InvoiceEditor {
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(session_id = %session_id, "Editing session started");
        Self {
            session_id,
            draft: InvoiceDraft::new(),
            revision: 0,
            sink: None,
        }
    }

    /// Register the consumer, replacing any previous one.
    pub fn subscribe(&mut self, sink: Box<dyn SnapshotSink>) {
        self.sink = Some(sink);
    }

    /// Read access to the current draft.
    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the current state, without emitting it. Lets a consumer
    /// seed itself when it attaches between edits.
    pub fn snapshot(&self) -> InvoiceSnapshot {
        InvoiceSnapshot {
            revision: self.revision,
            draft: self.draft.clone(),
        }
    }

    /// Apply one edit command.
    ///
    /// On success the revision bumps and the sink is notified exactly once.
    /// On error the draft, revision, and sink are untouched.
    #[instrument(skip(self, command), fields(session_id = %self.session_id, revision = self.revision))]
    pub fn apply(&mut self, command: EditCommand) -> Result<InvoiceSnapshot, EditError> {
        match command {
            EditCommand::SetDate(value) => self.draft.date = value,
            EditCommand::SetRecipientName(value) => self.draft.recipient_name = value,
            EditCommand::SetHonorific(value) => self.draft.honorific = value,
            EditCommand::SetIssuerField { field, value } => match field {
                IssuerField::Name => self.draft.issuer.name = value,
                IssuerField::Address => self.draft.issuer.address = value,
                IssuerField::Tel => self.draft.issuer.tel = value,
            },
            EditCommand::SetItemField { index, field } => {
                let len = self.draft.items.len();
                let item = self.draft.items.get_mut(index).ok_or_else(|| {
                    warn!(index = index, rows = len, "Edit addressed a missing row");
                    EditError::ItemIndexOutOfRange { index, len }
                })?;
                match field {
                    ItemField::Name(value) => item.name = value,
                    ItemField::UnitPrice(raw) => {
                        item.unit_price = normalize::unit_price(&raw);
                        item.unit_price_text = raw;
                    }
                    ItemField::Quantity(raw) => {
                        item.quantity = normalize::quantity(&raw);
                        item.quantity_text = raw;
                    }
                }
            }
            EditCommand::AddItem => {
                self.draft.items.push(LineItem::blank());
                debug!(rows = self.draft.items.len(), "Row appended");
            }
        }

        self.revision += 1;
        let snapshot = InvoiceSnapshot {
            revision: self.revision,
            draft: self.draft.clone(),
        };
        if let Some(sink) = self.sink.as_mut() {
            sink.on_snapshot(&snapshot);
        }
        debug!(emitted = snapshot.revision, "Snapshot emitted");
        Ok(snapshot)
    }
}

impl Default for InvoiceEditor {
    fn default() -> Self {
        Self::new()
    }
}
