//! Shoe inventory storage for Stockroom.
//!
//! The [`Inventory`] is the single source of truth while the program runs:
//! an insertion-ordered list of [`ShoeRecord`](stockroom_types::ShoeRecord)s
//! with no secondary indices. [`InventoryFile`] keeps a flat text snapshot of
//! it on disk.
//!
//! # File Format
//!
//! ```text
//! Country,Code,Product,Cost,Quantity
//! UK,SC01,Boot,50.0,2
//! US,SC02,Sandal,20.0,10
//! ```
//!
//! One header line, then one comma-separated line per record. Fields are not
//! quoted, so text containing a comma cannot be stored.
//!
//! # Design Rules
//!
//! 1. All queries are linear scans in insertion order; ties go to the first record.
//! 2. The file is rewritten whole on every save, never appended to.
//! 3. Saves go through a temporary file and an atomic rename.
//! 4. A malformed data line is reported and skipped; loading continues.

pub mod codec;
pub mod error;
pub mod file;
pub mod inventory;

pub use codec::{decode_line, encode_line, HEADER};
pub use error::{StoreError, StoreResult};
pub use file::{InventoryFile, LoadReport, SkippedLine};
pub use inventory::{Inventory, ItemValue};
