//! Interactive area and input-quantity calculators
//!
//! Both calculators read their parameters through a [`Prompt`] and stop at
//! the first value that fails to parse.

use thiserror::Error;

use super::prompt::{Prompt, PromptError};
use crate::domain::{
    parse_dimension, parse_input_name, parse_rate, parse_row_count, CropVariant, InputPlan,
    InputTotal, RecordError,
};

#[derive(Debug, Error)]
pub enum CalcError {
    /// Bad user input; reported and the command is abandoned
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The prompt itself failed or was closed
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Asks for the plot dimensions of `crop` and returns the area in m².
///
/// Unregistered crops fail without asking anything. Dimensions whose
/// product overflows to infinity are rejected as an invalid area.
pub fn compute_area(crop: &CropVariant, prompt: &mut dyn Prompt) -> Result<f64, CalcError> {
    let shape = crop.measure(|dimension| -> Result<f64, CalcError> {
        let raw = prompt.ask(dimension.prompt)?;
        Ok(parse_dimension(dimension.field, &raw)?)
    })?;

    let area = shape.area();
    if !area.is_finite() {
        return Err(RecordError::invalid("area", &area.to_string()).into());
    }
    Ok(area)
}

/// Asks for the input name and application rate and returns the total
pub fn compute_input_quantity(prompt: &mut dyn Prompt) -> Result<InputTotal, CalcError> {
    let name = parse_input_name(&prompt.ask("Input name: ")?)?;
    let dose_per_meter = parse_rate("dose", &prompt.ask("Dose applied per meter (mL or g/m): ")?)?;
    let rows = parse_row_count(&prompt.ask("Number of rows: ")?)?;
    let row_length = parse_rate("row length", &prompt.ask("Length of each row (meters): ")?)?;

    let plan = InputPlan {
        name,
        dose_per_meter,
        rows,
        row_length,
    };

    Ok(plan.into_total())
}
