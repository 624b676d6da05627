//! Walks one editing session end to end: edits flow into the editor, every
//! accepted edit emits a snapshot, and the attached preview re-derives
//! totals and the renderable document.

use invoice_editor::observability::init_logging;
use invoice_editor::{EditCommand, EditError, Honorific, InvoiceEditor, IssuerField, ItemField};
use invoice_preview::InvoicePreview;

fn main() -> Result<(), EditError> {
    init_logging("info");

    let mut editor = InvoiceEditor::new();
    let preview = InvoicePreview::attach(&mut editor);

    editor.apply(EditCommand::SetRecipientName("山田商事".to_string()))?;
    editor.apply(EditCommand::SetHonorific(Honorific::Organizational))?;
    editor.apply(EditCommand::SetIssuerField {
        field: IssuerField::Name,
        value: "佐藤設計".to_string(),
    })?;

    editor.apply(EditCommand::SetItemField {
        index: 0,
        field: ItemField::Name("設計料".to_string()),
    })?;
    editor.apply(EditCommand::SetItemField {
        index: 0,
        field: ItemField::UnitPrice("120000".to_string()),
    })?;
    editor.apply(EditCommand::SetItemField {
        index: 0,
        field: ItemField::Quantity("1".to_string()),
    })?;

    editor.apply(EditCommand::AddItem)?;
    editor.apply(EditCommand::SetItemField {
        index: 1,
        field: ItemField::Name("打ち合わせ".to_string()),
    })?;
    editor.apply(EditCommand::SetItemField {
        index: 1,
        field: ItemField::UnitPrice("15000".to_string()),
    })?;
    editor.apply(EditCommand::SetItemField {
        index: 1,
        field: ItemField::Quantity("2".to_string()),
    })?;

    let doc = preview.document();
    println!("{} ({})", doc.title, doc.date.text);
    println!("{} {}", doc.recipient.text, doc.honorific);
    for row in &doc.rows {
        println!(
            "  {:<12} {:>8} x {:>3} = {:>8}",
            row.name, row.unit_price, row.quantity, row.amount
        );
    }
    for line in [&doc.totals.subtotal, &doc.totals.tax, &doc.totals.total] {
        println!("  {}: {} {}", line.label, line.value, line.unit);
    }

    // what an exporter would capture: same document, chrome stripped
    let export = doc.export_view();
    assert!(export.chrome.is_empty());

    Ok(())
}
