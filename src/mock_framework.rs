//! # Mock Framework
//!
//! Test doubles for the processor's collaborators.
//!
//! `RecordStore` and `ExternalLookup` are mocked with `mockall`
//! ([`MockRecordStore`], [`MockExternalLookup`]). The export sink is a
//! recording fake instead: tests want to assert on the rows that reached a
//! stream, not on call expectations.

use std::sync::{Arc, Mutex};

use crate::clients::{ExportMode, ExportSink, ExportStream};
use crate::error::ExportError;

pub use crate::clients::{MockExternalLookup, MockRecordStore};

/// Everything that happened to one stream opened on a [`RecordingExportSink`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRecord {
    pub name: String,
    pub mode: Option<ExportMode>,
    pub rows: Vec<Vec<String>>,
    pub closed: bool,
}

/// Export sink that keeps every row in memory.
///
/// Clones share the same record list, so a test can hand one clone to the
/// processor and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingExportSink {
    records: Arc<Mutex<Vec<ExportRecord>>>,
    attempts: Arc<Mutex<Vec<String>>>,
    fail_open: bool,
    fail_write: bool,
}

impl RecordingExportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose `open` always fails.
    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// A sink that opens fine but rejects every row.
    pub fn failing_write() -> Self {
        Self {
            fail_write: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<ExportRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Names passed to `open`, whether or not it succeeded.
    pub fn open_attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

impl ExportSink for RecordingExportSink {
    fn open(&self, name: &str, mode: ExportMode) -> Result<Box<dyn ExportStream>, ExportError> {
        self.attempts.lock().unwrap().push(name.to_string());
        if self.fail_open {
            return Err(ExportError::Open {
                name: name.to_string(),
                reason: "permission denied".to_string(),
            });
        }

        let mut records = self.records.lock().unwrap();
        records.push(ExportRecord {
            name: name.to_string(),
            mode: Some(mode),
            ..ExportRecord::default()
        });
        Ok(Box::new(RecordingStream {
            records: Arc::clone(&self.records),
            slot: records.len() - 1,
            fail_write: self.fail_write,
        }))
    }
}

struct RecordingStream {
    records: Arc<Mutex<Vec<ExportRecord>>>,
    slot: usize,
    fail_write: bool,
}

impl ExportStream for RecordingStream {
    fn write_row(&mut self, fields: &[&str]) -> Result<(), ExportError> {
        if self.fail_write {
            return Err(ExportError::Write("disk full".to_string()));
        }
        let row = fields.iter().map(|field| field.to_string()).collect();
        self.records.lock().unwrap()[self.slot].rows.push(row);
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<(), ExportError> {
        self.records.lock().unwrap()[self.slot].closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_shares_state_between_clones() {
        let sink = RecordingExportSink::new();
        let handle = sink.clone();

        let mut stream = sink.open("a.csv", ExportMode::Write).unwrap();
        stream.write_row(&["x", "y"]).unwrap();
        stream.close().unwrap();

        let records = handle.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rows, vec![vec!["x".to_string(), "y".to_string()]]);
        assert!(records[0].closed);
    }

    #[test]
    fn test_failing_open_records_the_attempt_only() {
        let sink = RecordingExportSink::failing_open();
        assert!(sink.open("a.csv", ExportMode::Write).is_err());
        assert_eq!(sink.open_attempts(), vec!["a.csv".to_string()]);
        assert!(sink.records().is_empty());
    }
}
