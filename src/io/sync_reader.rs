//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over operation records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Record errors are `ParseError`s carrying the line number of the row

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{OperationRecord, WalletError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
///
/// ```no_run
/// use rust_wallet_engine::io::SyncReader;
/// use std::path::Path;
///
/// let reader = SyncReader::new(Path::new("operations.csv")).unwrap();
/// let records: Vec<_> = reader.filter_map(Result::ok).collect();
/// println!("Successfully parsed {} records", records.len());
/// ```
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Open a CSV file for streaming iteration
    ///
    /// Whitespace is trimmed from every field and rows may be shorter than
    /// the header.
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the path does not exist, `IoError` for any other
    /// failure to open it.
    pub fn new(path: &Path) -> Result<Self, WalletError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WalletError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => WalletError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<OperationRecord, WalletError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let next = deserializer.next()?;
        self.line_num += 1;
        // +1 for the header row
        let line = self.line_num + 1;

        Some(match next {
            Ok(csv_record) => convert_csv_record(csv_record).map_err(|e| e.at_line(line)),
            Err(e) => Err(WalletError::from(e)),
        })
    }
}
