//! CSV-backed export file system.

use std::fs::File;
use std::path::PathBuf;

use tracing::warn;

use orderflow_orders::{ExportFileSystem, FileError, OpenMode};

/// Writes export artifacts as CSV files under a root directory.
#[derive(Debug, Clone)]
pub struct CsvExportFileSystem {
    root: PathBuf,
}

/// Open CSV artifact. Rows are buffered until `close`.
#[derive(Debug)]
pub struct CsvExportHandle {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl CsvExportFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ExportFileSystem for CsvExportFileSystem {
    type Handle = CsvExportHandle;

    fn open(&self, name: &str, mode: OpenMode) -> Option<Self::Handle> {
        let path = self.path_for(name);
        let file = match mode {
            OpenMode::Write => File::create(&path),
        };

        match file {
            Ok(file) => {
                let writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .from_writer(file);
                Some(CsvExportHandle { path, writer })
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open export file");
                None
            }
        }
    }

    fn write_row(&self, handle: &mut Self::Handle, fields: &[String]) -> Result<(), FileError> {
        handle
            .writer
            .write_record(fields)
            .map_err(|e| FileError::Write(format!("{}: {e}", handle.path.display())))
    }

    fn close(&self, mut handle: Self::Handle) -> Result<(), FileError> {
        handle.writer.flush()?;
        Ok(())
    }
}
