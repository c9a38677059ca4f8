//! FarmTech - interactive record keeping for agricultural fields
//!
//! Each record ties a crop to its computed plot area and the total amount
//! of an input (fertilizer, pesticide) needed for it. Records live in
//! memory for the length of a session and can be exported to CSV.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{CropVariant, InputTotal, Record, RecordError};
pub use storage::{CsvExporter, RecordStore};
