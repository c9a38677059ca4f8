//! Domain models for FarmTech
//!
//! Contains the record model and the area/input formulas without any I/O
//! concerns.

mod crop;
mod error;
mod input;
mod record;

pub use crop::{parse_dimension, CropVariant, Dimension, PlotShape, LENGTH, PI, RADIUS, WIDTH};
pub use error::RecordError;
pub use input::{parse_input_name, parse_rate, parse_row_count, InputPlan, InputTotal};
pub use record::Record;
