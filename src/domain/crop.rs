//! Crop variants and plot geometry
//!
//! Each recognized crop has a canonical plot shape: corn is planted in
//! rectangular plots, soybean under a circular center pivot. The variant
//! decides which dimensions are asked for and which formula applies.

use std::fmt;

use super::error::RecordError;

/// Value of pi used for pivot areas
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

/// A named plot dimension, in meters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub field: &'static str,
    pub prompt: &'static str,
}

pub const WIDTH: Dimension = Dimension {
    field: "width",
    prompt: "Plot width (meters): ",
};

pub const LENGTH: Dimension = Dimension {
    field: "length",
    prompt: "Plot length (meters): ",
};

pub const RADIUS: Dimension = Dimension {
    field: "radius",
    prompt: "Soybean pivot radius (meters): ",
};

/// Crop type driving the area formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropVariant {
    Corn,
    Soybean,
    /// Anything else the user typed, kept verbatim for the error message
    Unrecognized(String),
}

impl CropVariant {
    /// Classifies raw crop text, ignoring case and surrounding whitespace
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "corn" | "milho" => CropVariant::Corn,
            "soybean" | "soy" | "soja" => CropVariant::Soybean,
            _ => CropVariant::Unrecognized(raw.trim().to_string()),
        }
    }

    /// Builds the plot shape, pulling each dimension from `read`.
    ///
    /// Stops at the first failed read. Unrecognized crops fail before any
    /// dimension is requested.
    pub fn measure<E>(&self, mut read: impl FnMut(Dimension) -> Result<f64, E>) -> Result<PlotShape, E>
    where
        E: From<RecordError>,
    {
        match self {
            CropVariant::Corn => {
                let width = read(WIDTH)?;
                let length = read(LENGTH)?;
                Ok(PlotShape::Rectangle { width, length })
            }
            CropVariant::Soybean => Ok(PlotShape::Pivot {
                radius: read(RADIUS)?,
            }),
            CropVariant::Unrecognized(raw) => Err(RecordError::UnregisteredCrop(raw.clone()).into()),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            CropVariant::Corn => "corn",
            CropVariant::Soybean => "soybean",
            CropVariant::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for CropVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measured plot geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotShape {
    Rectangle { width: f64, length: f64 },
    Pivot { radius: f64 },
}

impl PlotShape {
    /// Area in square meters
    pub fn area(&self) -> f64 {
        match *self {
            PlotShape::Rectangle { width, length } => width * length,
            PlotShape::Pivot { radius } => PI * radius.powi(2),
        }
    }
}

/// Parses a dimension in meters. Must be a finite, non-negative number.
pub fn parse_dimension(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RecordError::invalid(field, raw))?;

    if !value.is_finite() || value < 0.0 {
        return Err(RecordError::invalid(field, raw));
    }

    Ok(value)
}
