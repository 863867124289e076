use crate::grade::error::InputError;
use crate::grade::scale::GradeScale;

/// Parse user-typed text as a finite real number.
/// Surrounding whitespace is ignored; `NaN` and infinities are rejected.
pub fn parse_real(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Resolve the desired grade to its numeric target.
///
/// Without a scale the text must be a number. With a scale it must be one of
/// the scale's letter tokens.
pub fn resolve_target(desired: &str, scale: Option<&GradeScale>) -> Result<f64, InputError> {
    match scale {
        None => parse_real(desired).ok_or_else(|| InputError::InvalidDesired(desired.to_string())),
        Some(scale) => scale
            .threshold(desired.trim())
            .ok_or_else(|| InputError::UnknownGrade(desired.to_string())),
    }
}
