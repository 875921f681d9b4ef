use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use stockroom_types::TypeError;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::codec::{decode_line, encode_line, HEADER};
use crate::error::{StoreError, StoreResult};
use crate::inventory::Inventory;

/// A data line that could not be turned into a record.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the file (the header is line 1).
    pub line_number: usize,
    pub content: String,
    pub error: TypeError,
}

/// Outcome of loading the inventory file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    pub inventory: Inventory,
    pub skipped: Vec<SkippedLine>,
}

/// Flat-file snapshot of an [`Inventory`].
///
/// The file only reflects the inventory as of the last [`save`](Self::save);
/// in-memory changes made since then are not visible on disk.
#[derive(Clone, Debug)]
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the file, in file order.
    ///
    /// The first line is the header and is not inspected. Blank lines are
    /// ignored. Lines that are not valid UTF-8, have the wrong number of
    /// fields, or carry a non-numeric cost or quantity are logged, collected
    /// into [`LoadReport::skipped`], and otherwise ignored.
    pub fn load(&self) -> StoreResult<LoadReport> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::MissingFile(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut report = LoadReport::default();
        for (index, raw) in contents.split(|byte| *byte == b'\n').enumerate().skip(1) {
            if raw.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            let decoded = std::str::from_utf8(raw)
                .map_err(|e| TypeError::InvalidEncoding(e.to_string()))
                .and_then(decode_line);
            match decoded {
                Ok(record) => {
                    report.inventory.add(record);
                }
                Err(error) => {
                    let line_number = index + 1;
                    warn!(path = %self.path.display(), line_number, %error, "skipping malformed line");
                    report.skipped.push(SkippedLine {
                        line_number,
                        content: String::from_utf8_lossy(raw).trim_end().to_string(),
                        error,
                    });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            records = report.inventory.len(),
            skipped = report.skipped.len(),
            "inventory loaded"
        );
        Ok(report)
    }

    /// Replace the file with the header followed by every record.
    ///
    /// All lines are encoded before anything touches the disk. The new
    /// contents are written to a temporary file next to the target and renamed
    /// into place, so a failed save leaves the previous file intact.
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let lines = inventory
            .iter()
            .map(encode_line)
            .collect::<StoreResult<Vec<_>>>()?;

        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            writeln!(writer, "{HEADER}")?;
            for line in &lines {
                writeln!(writer, "{line}")?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        info!(path = %self.path.display(), records = lines.len(), "inventory saved");
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
