use std::path::PathBuf;

/// Errors from inventory store and file operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file does not exist.
    #[error("inventory file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A field cannot be written without breaking the line format.
    #[error("cannot store {field} of {code:?}: text contains a comma or line break")]
    Unencodable { code: String, field: &'static str },

    /// No record at the requested position.
    #[error("no record at position {position} (inventory holds {len})")]
    NoSuchPosition { position: usize, len: usize },

    /// Restocking would overflow the quantity field.
    #[error("restocking {code:?} by {amount} overflows its quantity")]
    QuantityOverflow { code: String, amount: u64 },

    /// I/O error from the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
