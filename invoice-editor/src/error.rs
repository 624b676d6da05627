use thiserror::Error;

/// Errors an edit can produce.
///
/// Malformed text never errors here (it normalizes to zero/blank), so the
/// only failure left is addressing a row that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("line item index {index} out of range ({len} rows)")]
    ItemIndexOutOfRange { index: usize, len: usize },
}
