//! Operation script reader with iterator interface
//!
//! Provides a streaming iterator over operations from a CSV script.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use bank_console::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::open(Path::new("session.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("Operation: {:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()`
//! - Individual record errors are yielded as Err variants carrying the line number
//! - Read failures of the underlying source are yielded as `BankError::Io`

use crate::io::csv_format::{convert_script_record, ScriptRecord};
use crate::types::{BankError, Operation};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Streaming reader of script operations
#[derive(Debug)]
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| BankError::Io {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Read a script from any byte source
    ///
    /// The CSV reader trims whitespace around fields and accepts rows with
    /// missing trailing columns.
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Operation, BankError>;

    /// Get the next operation
    ///
    /// Line numbers are physical lines of the source, counting the header as
    /// line 1. A record spanning several lines reports the line it starts on.
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(csv_error(e, None))),
        }

        let line = self.record.position().map(|pos| pos.line());
        let headers = match self.reader.headers() {
            Ok(headers) => headers,
            Err(e) => return Some(Err(csv_error(e, line))),
        };

        Some(match self.record.deserialize::<ScriptRecord>(Some(headers)) {
            Ok(script_record) => convert_script_record(script_record).map_err(|e| match e {
                BankError::Parse { message, .. } => BankError::Parse { line, message },
                other => other,
            }),
            Err(e) => Err(csv_error(e, line)),
        })
    }
}

fn csv_error(error: csv::Error, line: Option<u64>) -> BankError {
    if error.is_io_error() {
        return BankError::Io {
            message: error.to_string(),
        };
    }
    let line = error.position().map(|pos| pos.line()).or(line);
    BankError::parse(line, format!("CSV parse error: {}", error))
}
