//! Input (fertilizer, pesticide) quantity planning
//!
//! Doses are given per meter of row in milliliters or grams, so the total
//! over all rows is divided by 1000 to land in Liters or Kilograms.

use super::error::RecordError;

/// Application plan for one input over a plot
#[derive(Debug, Clone, PartialEq)]
pub struct InputPlan {
    pub name: String,
    /// mL or g applied per meter of row
    pub dose_per_meter: f64,
    pub rows: u32,
    /// Meters
    pub row_length: f64,
}

impl InputPlan {
    /// Total quantity needed in Liters or Kilograms
    pub fn total(&self) -> f64 {
        (f64::from(self.rows) * self.row_length * self.dose_per_meter) / 1000.0
    }

    /// Consumes the plan, keeping only what a record stores
    pub fn into_total(self) -> InputTotal {
        let quantity = self.total();
        InputTotal {
            name: self.name,
            quantity,
        }
    }
}

/// A successfully computed input: name plus total in Liters/Kilograms
#[derive(Debug, Clone, PartialEq)]
pub struct InputTotal {
    pub name: String,
    pub quantity: f64,
}

/// Validates an input name. Surrounding whitespace is dropped.
pub fn parse_input_name(raw: &str) -> Result<String, RecordError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RecordError::EmptyInputName);
    }
    Ok(name.to_string())
}

/// Parses a finite, non-negative rate or length
pub fn parse_rate(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(RecordError::invalid(field, raw)),
    }
}

/// Parses a whole, non-negative row count
pub fn parse_row_count(raw: &str) -> Result<u32, RecordError> {
    raw.trim()
        .parse()
        .map_err(|_| RecordError::invalid("rows", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(dose: f64, rows: u32, row_length: f64) -> InputPlan {
        InputPlan {
            name: "NPK".to_string(),
            dose_per_meter: dose,
            rows,
            row_length,
        }
    }

    #[test]
    fn total_converts_to_liters() {
        assert!((plan(2.0, 4, 50.0).total() - 0.4).abs() < 1e-12);
        assert!((plan(1.0, 2, 50.0).total() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn zero_dose_is_a_valid_plan() {
        let total = plan(0.0, 10, 100.0).into_total();
        assert_eq!(total.name, "NPK");
        assert_eq!(total.quantity, 0.0);
    }

    #[test]
    fn input_name_must_not_be_blank() {
        assert_eq!(parse_input_name("  Urea "), Ok("Urea".to_string()));
        assert_eq!(parse_input_name("   "), Err(RecordError::EmptyInputName));
        assert_eq!(parse_input_name(""), Err(RecordError::EmptyInputName));
    }

    #[test]
    fn row_count_must_be_an_integer() {
        assert_eq!(parse_row_count("4"), Ok(4));
        assert!(parse_row_count("4.5").is_err());
        assert!(parse_row_count("-1").is_err());
        assert!(parse_row_count("four").is_err());
    }

    #[test]
    fn rate_rejects_negative_and_non_finite() {
        assert_eq!(parse_rate("dose", "2.5"), Ok(2.5));
        assert_eq!(parse_rate("dose", "-2"), Err(RecordError::invalid("dose", "-2")));
        assert!(parse_rate("dose", "inf").is_err());
        assert!(parse_rate("dose", "x").is_err());
    }
}
