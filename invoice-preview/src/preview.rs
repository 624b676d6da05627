//! Snapshot consumer for invoice-preview.

use std::cell::RefCell;
use std::rc::Rc;

use invoice_editor::{InvoiceEditor, InvoiceSnapshot, SnapshotSink};
use tracing::debug;

use crate::document::{render, RenderedDocument};
use crate::totals::ComputedTotals;

/// One fully derived view of one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub snapshot: InvoiceSnapshot,
    pub totals: ComputedTotals,
    pub document: RenderedDocument,
}

impl PreviewFrame {
    fn derive(snapshot: &InvoiceSnapshot) -> Self {
        let totals = ComputedTotals::derive(snapshot);
        let document = render(snapshot, &totals);
        Self {
            snapshot: snapshot.clone(),
            totals,
            document,
        }
    }
}

/// The registered consumer: fully re-derives on every snapshot and keeps
/// only the latest frame, so what it shows is always the latest emission.
#[derive(Debug)]
pub struct InvoicePreview {
    latest: PreviewFrame,
}

impl InvoicePreview {
    /// A preview seeded from one snapshot.
    pub fn new(snapshot: &InvoiceSnapshot) -> Self {
        Self {
            latest: PreviewFrame::derive(snapshot),
        }
    }

    /// Wire a preview to an editor as its snapshot sink, seeded from the
    /// editor's current state so the two agree before the first edit.
    pub fn attach(editor: &mut InvoiceEditor) -> PreviewHandle {
        let shared = Rc::new(RefCell::new(InvoicePreview::new(&editor.snapshot())));
        editor.subscribe(Box::new(PreviewSink(Rc::clone(&shared))));
        PreviewHandle(shared)
    }

    /// The latest derived frame.
    pub fn frame(&self) -> &PreviewFrame {
        &self.latest
    }
}

impl SnapshotSink for InvoicePreview {
    fn on_snapshot(&mut self, snapshot: &InvoiceSnapshot) {
        self.latest = PreviewFrame::derive(snapshot);
        debug!(
            revision = snapshot.revision,
            subtotal = %self.latest.totals.subtotal,
            total = %self.latest.totals.total,
            "Preview refreshed"
        );
    }
}

struct PreviewSink(Rc<RefCell<InvoicePreview>>);

impl SnapshotSink for PreviewSink {
    fn on_snapshot(&mut self, snapshot: &InvoiceSnapshot) {
        self.0.borrow_mut().on_snapshot(snapshot);
    }
}

/// Shared read access to the latest frame of an attached preview.
#[derive(Clone)]
pub struct PreviewHandle(Rc<RefCell<InvoicePreview>>);

impl PreviewHandle {
    /// Revision of the snapshot the current frame was derived from.
    pub fn revision(&self) -> u64 {
        self.0.borrow().latest.snapshot.revision
    }

    pub fn totals(&self) -> ComputedTotals {
        self.0.borrow().latest.totals
    }

    pub fn document(&self) -> RenderedDocument {
        self.0.borrow().latest.document.clone()
    }

    pub fn frame(&self) -> PreviewFrame {
        self.0.borrow().latest.clone()
    }
}
