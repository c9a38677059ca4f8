//! # Storage Layer
//!
//! Record keeping and persistence for FarmTech.
//!
//! ## What lives where
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Records | In memory, for the life of the process | [`RecordStore`] |
//! | Export | CSV, UTF-8 with BOM | `dados_culturas.csv` (configurable) |
//! | Config | TOML | `./farmtech.toml` or `~/.config/farmtech/config.toml` |
//!
//! ## Write Safety
//!
//! - Exports are written to a temp file under an exclusive lock (`fs2`)
//!   and renamed over the destination
//! - An empty store never touches the destination
//!
//! ## Key Types
//!
//! - [`RecordStore`] - Ordered, index-addressable records
//! - [`CsvExporter`] - Writes the store as delimited text
//! - [`Config`] - Export and display settings

mod config;
mod export;
mod store;

pub use config::{Config, ConfigError, DisplayConfig, ExportConfig, LOCAL_CONFIG_FILE};
pub use export::{CsvExporter, ExportError, ExportSummary, DEFAULT_EXPORT_FILE, HEADER};
pub use store::RecordStore;
