use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use tracing::{debug, instrument};

use super::{ExportMode, ExportSink, ExportStream};
use crate::error::ExportError;

/// Writes each export as a CSV file inside a directory.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    directory: PathBuf,
}

impl FileExportSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }
}

impl ExportSink for FileExportSink {
    #[instrument(skip(self))]
    fn open(&self, name: &str, mode: ExportMode) -> Result<Box<dyn ExportStream>, ExportError> {
        let path = self.path_for(name);
        let mut options = OpenOptions::new();
        match mode {
            ExportMode::Write => options.write(true).create(true).truncate(true),
            ExportMode::Append => options.append(true).create(true),
        };
        let file = options.open(&path).map_err(|e| ExportError::Open {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        debug!(path = %path.display(), "Export file opened");
        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(file);
        Ok(Box::new(CsvFileStream { writer }))
    }
}

struct CsvFileStream {
    writer: csv::Writer<File>,
}

impl ExportStream for CsvFileStream {
    fn write_row(&mut self, fields: &[&str]) -> Result<(), ExportError> {
        self.writer
            .write_record(fields)
            .map_err(|e| ExportError::Write(e.to_string()))
    }

    fn close(mut self: Box<Self>) -> Result<(), ExportError> {
        self.writer
            .flush()
            .map_err(|e| ExportError::Close(e.to_string()))
    }
}
