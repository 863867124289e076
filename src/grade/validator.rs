use crate::grade::error::InputError;
use crate::grade::parser::parse_real;

/// Parse an exam weight and check it lies in (0, 1].
pub fn validate_weight(weight: &str) -> Result<f64, InputError> {
    let value = parse_real(weight).ok_or_else(|| InputError::InvalidWeight(weight.to_string()))?;

    if !is_weight_in_range(value) {
        return Err(InputError::WeightOutOfRange(value));
    }

    Ok(value)
}

pub fn is_weight_in_range(weight: f64) -> bool {
    weight > 0.0 && weight <= 1.0
}
