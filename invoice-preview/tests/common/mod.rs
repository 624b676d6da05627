//! Shared helpers for invoice-preview tests.

use invoice_editor::{EditCommand, InvoiceEditor, InvoiceSnapshot, ItemField};

/// Build a snapshot whose rows carry the given (name, unit price, quantity)
/// values, entered through the editor the way a user would.
pub fn snapshot_with_items(items: &[(&str, &str, &str)]) -> InvoiceSnapshot {
    let mut editor = InvoiceEditor::new();
    for (index, (name, price, qty)) in items.iter().enumerate() {
        if index > 0 {
            editor.apply(EditCommand::AddItem).expect("Failed to add row");
        }
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
    editor.snapshot()
}
