//! CSV row source for release tables.
//!
//! Reads a headered CSV and yields one raw row at a time: the
//! header-declared column names paired with their raw values, in file
//! order, together with the 1-based line number the record starts on
//! (counting the header line). Rows are surfaced strictly in file order so
//! downstream diagnostics can cite the reader's cursor position.

use crate::error::{GuardError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One raw row of a release table.
#[derive(Debug, Clone)]
pub struct RawRow {
    /// 1-based line number the record starts on, header included.
    pub line: u64,
    /// Column name/value pairs in header order.
    pub fields: Vec<(String, String)>,
}

/// A streaming reader over a headered release CSV.
#[derive(Debug)]
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    origin: String,
}

impl CsvSource<File> {
    /// Opens the file at `path` and reads its header row.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| GuardError::io(path, source))?;
        Self::from_reader(file, path.display().to_string())
    }
}

impl<R: Read> CsvSource<R> {
    /// Wraps any reader; `origin` names the input in errors and diagnostics.
    pub fn from_reader(input: R, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        // Flexible: short rows mean absent trailing columns, which is the
        // validator's finding to make, not a read error.
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
        let headers = reader
            .headers()
            .map_err(|source| GuardError::csv(origin.clone(), source))?
            .iter()
            .map(str::to_string)
            .collect();
        Ok(Self {
            reader,
            headers,
            origin,
        })
    }

    /// The input name used in diagnostics.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The header row, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Reads the next row, or `None` at end of input.
    ///
    /// Fields beyond the header are dropped; a short row simply yields
    /// fewer pairs, leaving the remaining columns absent.
    pub fn next_row(&mut self) -> Result<Option<RawRow>> {
        let mut record = csv::StringRecord::new();
        let more = self
            .reader
            .read_record(&mut record)
            .map_err(|source| GuardError::csv(self.origin.clone(), source))?;
        if !more {
            return Ok(None);
        }
        let line = record.position().map_or(0, |position| position.line());
        let fields = self
            .headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        Ok(Some(RawRow { line, fields }))
    }
}
