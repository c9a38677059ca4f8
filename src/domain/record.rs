//! Field record model

use serde::Serialize;

use super::error::RecordError;
use super::input::InputTotal;

/// One committed crop/area/input/quantity tuple.
///
/// Fields are private so that a record can only come out of [`Record::new`],
/// which refuses zero areas and missing inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    crop: String,
    area_m2: f64,
    input_name: String,
    input_quantity: f64,
}

impl Record {
    /// Builds a record from a computed area and input.
    ///
    /// `crop` is kept as the user typed it.
    pub fn new(crop: impl Into<String>, area_m2: f64, input: InputTotal) -> Result<Self, RecordError> {
        if !area_m2.is_finite() || area_m2 <= 0.0 {
            return Err(RecordError::NonPositiveArea(area_m2));
        }
        if input.name.trim().is_empty() {
            return Err(RecordError::EmptyInputName);
        }
        if !input.quantity.is_finite() || input.quantity < 0.0 {
            return Err(RecordError::invalid("quantity", &input.quantity.to_string()));
        }

        Ok(Self {
            crop: crop.into(),
            area_m2,
            input_name: input.name,
            input_quantity: input.quantity,
        })
    }

    pub fn crop(&self) -> &str {
        &self.crop
    }

    /// Plot area in square meters
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Input total in Liters or Kilograms
    pub fn input_quantity(&self) -> f64 {
        self.input_quantity
    }
}
