//! Shared helpers for invoice-editor tests.

use std::cell::RefCell;
use std::rc::Rc;

use invoice_editor::{EditCommand, InvoiceEditor, InvoiceSnapshot, ItemField, SnapshotSink};

/// Sink that records every emission for later inspection.
pub struct RecordingSink(Rc<RefCell<Vec<InvoiceSnapshot>>>);

impl SnapshotSink for RecordingSink {
    fn on_snapshot(&mut self, snapshot: &InvoiceSnapshot) {
        self.0.borrow_mut().push(snapshot.clone());
    }
}

/// Editor wired to a recording sink, plus the shared emission record.
pub fn recording_editor() -> (InvoiceEditor, Rc<RefCell<Vec<InvoiceSnapshot>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut editor = InvoiceEditor::new();
    editor.subscribe(Box::new(RecordingSink(Rc::clone(&seen))));
    (editor, seen)
}

/// Fill row `index` with a name, unit price, and quantity.
pub fn fill_item(editor: &mut InvoiceEditor, index: usize, name: &str, price: &str, qty: &str) {
    editor
        .apply(EditCommand::SetItemField {
            index,
            field: ItemField::Name(name.to_string()),
        })
        .expect("Failed to set item name");
    editor
        .apply(EditCommand::SetItemField {
            index,
            field: ItemField::UnitPrice(price.to_string()),
        })
        .expect("Failed to set unit price");
    editor
        .apply(EditCommand::SetItemField {
            index,
            field: ItemField::Quantity(qty.to_string()),
        })
        .expect("Failed to set quantity");
}
