//! Line encoding for the inventory file.

use stockroom_types::{format_decimal, ShoeRecord, TypeError};

use crate::error::{StoreError, StoreResult};

/// First line of every inventory file.
pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";

const DELIMITER: char = ',';

/// Encode a record as one file line (without the trailing newline).
pub fn encode_line(record: &ShoeRecord) -> StoreResult<String> {
    for (field, text) in [
        ("country", record.country()),
        ("code", record.code()),
        ("product", record.product()),
    ] {
        if !is_encodable(text) {
            return Err(StoreError::Unencodable {
                code: record.code().to_string(),
                field,
            });
        }
    }
    Ok(format!(
        "{},{},{},{},{}",
        record.country(),
        record.code(),
        record.product(),
        format_decimal(record.cost()),
        record.quantity()
    ))
}

/// Decode one data line.
///
/// Whitespace around the whole line (including a trailing `\r`) is dropped
/// before splitting; whitespace between fields is kept.
pub fn decode_line(line: &str) -> Result<ShoeRecord, TypeError> {
    let line = line.trim();
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    ShoeRecord::from_fields(&fields)
}

/// Returns `true` if `text` can be written as a field unchanged.
pub fn is_encodable(text: &str) -> bool {
    !text.contains([DELIMITER, '\n', '\r'])
}
