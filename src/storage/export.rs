//! CSV export of the record store
//!
//! The file starts with a UTF-8 byte-order mark so spreadsheet and
//! statistics tools detect the encoding, followed by an ASCII-only header.
//! Every export rewrites the destination from scratch.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use super::store::RecordStore;

/// Column names, kept free of accents for downstream readers
pub const HEADER: [&str; 4] = ["Cultura", "Area_m2", "Insumo", "Quantidade"];

/// Default destination, relative to the working directory
pub const DEFAULT_EXPORT_FILE: &str = "dados_culturas.csv";

const BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export. Register a crop first.")]
    NoData,

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    fn io(path: &Path, source: io::Error) -> Self {
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// Data rows written, header excluded
    pub rows: usize,
}

/// Writes a [`RecordStore`] as comma-separated text with a BOM
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Creates an exporter for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Exports the store, fully replacing the destination file.
    ///
    /// An empty store fails with [`ExportError::NoData`] and leaves any
    /// existing file alone.
    pub fn export(&self, store: &RecordStore) -> Result<ExportSummary, ExportError> {
        if store.is_empty() {
            return Err(ExportError::NoData);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
            }
        }

        let temp_path = self.temp_path();
        let rows = self
            .write_temp(&temp_path, store)
            .and_then(|rows| {
                fs::rename(&temp_path, &self.path).map_err(|e| ExportError::io(&self.path, e))?;
                Ok(rows)
            })
            .inspect_err(|_| {
                // The temp file may not exist if opening it failed
                let _ = fs::remove_file(&temp_path);
            })?;

        Ok(ExportSummary {
            path: self.path.clone(),
            rows,
        })
    }

    fn write_temp(&self, temp_path: &Path, store: &RecordStore) -> Result<usize, ExportError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .map_err(|e| ExportError::io(temp_path, e))?;

        file.lock_exclusive()
            .map_err(|e| ExportError::io(temp_path, e))?;

        self.write_to(BufWriter::new(&file), store)
    }

    /// Encodes the store into `writer` and returns the number of data rows.
    ///
    /// Unlike [`CsvExporter::export`] this does not refuse an empty store;
    /// the header is always written.
    pub fn write_to<W: Write>(&self, mut writer: W, store: &RecordStore) -> Result<usize, ExportError> {
        writer
            .write_all(BOM)
            .map_err(|e| ExportError::io(&self.path, e))?;

        let mut csv = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .has_headers(false)
            .from_writer(writer);

        csv.write_record(HEADER)?;
        for record in store {
            csv.serialize((
                record.crop(),
                record.area_m2(),
                record.input_name(),
                record.input_quantity(),
            ))?;
        }

        csv.flush().map_err(|e| ExportError::io(&self.path, e))?;
        Ok(store.len())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
