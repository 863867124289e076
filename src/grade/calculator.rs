use crate::grade::detector::looks_like_letter_grade;
use crate::grade::error::InputError;
use crate::grade::parser::{parse_real, resolve_target};
use crate::grade::scale::GradeScale;
use crate::grade::types::{CalculationResult, RawInputs, TargetMode};
use crate::grade::validator::validate_weight;

/// Computes the exam score needed to reach a target final grade.
///
/// Holds only the optional scale used to resolve letter targets, so a single
/// calculator can be reused for any number of inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeRequirementCalculator<'a> {
    scale: Option<&'a GradeScale>,
}

impl<'a> GradeRequirementCalculator<'a> {
    /// Desired grades are read as numbers
    pub fn numeric() -> Self {
        Self { scale: None }
    }

    /// Desired grades are letter tokens resolved through `scale`
    pub fn with_scale(scale: &'a GradeScale) -> Self {
        Self { scale: Some(scale) }
    }

    pub fn scale(&self) -> Option<&'a GradeScale> {
        self.scale
    }

    pub fn compute(&self, inputs: &RawInputs) -> CalculationResult {
        compute_required_score(
            &inputs.current_grade,
            &inputs.desired_grade,
            &inputs.exam_weight,
            self.scale,
        )
    }

    pub fn try_compute(&self, inputs: &RawInputs) -> Result<f64, InputError> {
        try_compute_required_score(
            &inputs.current_grade,
            &inputs.desired_grade,
            &inputs.exam_weight,
            self.scale,
        )
    }
}

impl GradeRequirementCalculator<'static> {
    /// Pick numeric or standard-letter resolution for `desired` under `mode`.
    pub fn for_mode(mode: TargetMode, desired: &str) -> Self {
        match mode {
            TargetMode::Numeric => Self::numeric(),
            TargetMode::Letter => Self::with_scale(GradeScale::standard()),
            TargetMode::Auto if looks_like_letter_grade(desired) => {
                Self::with_scale(GradeScale::standard())
            }
            TargetMode::Auto => Self::numeric(),
        }
    }
}

/// `(desired - current * (1 - weight)) / weight`, unrounded and unclamped.
pub fn required_score(current: f64, desired: f64, weight: f64) -> f64 {
    (desired - current * (1.0 - weight)) / weight
}

/// Required exam score for the raw inputs, or `Invalid` on any bad input.
pub fn compute_required_score(
    current: &str,
    desired: &str,
    weight: &str,
    scale: Option<&GradeScale>,
) -> CalculationResult {
    try_compute_required_score(current, desired, weight, scale).into()
}

/// Like [`compute_required_score`] but keeps the rejection cause.
///
/// Checks run weight, current, desired; the first failure is returned.
pub fn try_compute_required_score(
    current: &str,
    desired: &str,
    weight: &str,
    scale: Option<&GradeScale>,
) -> Result<f64, InputError> {
    let result = validate_inputs(current, desired, weight, scale)
        .and_then(|(current, desired, weight)| finite_score(current, desired, weight));

    match &result {
        Ok(score) => tracing::trace!(score = *score, "computed required exam score"),
        Err(e) => tracing::debug!(reason = %e, "rejected grade inputs"),
    }

    result
}

fn validate_inputs(
    current: &str,
    desired: &str,
    weight: &str,
    scale: Option<&GradeScale>,
) -> Result<(f64, f64, f64), InputError> {
    let weight = validate_weight(weight)?;
    let current = parse_current(current)?;
    let desired = resolve_target(desired, scale)?;
    Ok((current, desired, weight))
}

// Extreme finite inputs can still overflow the formula
fn finite_score(current: f64, desired: f64, weight: f64) -> Result<f64, InputError> {
    let score = required_score(current, desired, weight);
    if score.is_finite() {
        Ok(score)
    } else {
        Err(InputError::ScoreOutOfRange(score))
    }
}

fn parse_current(current: &str) -> Result<f64, InputError> {
    parse_real(current).ok_or_else(|| InputError::InvalidCurrent(current.to_string()))
}

/// Required score to reach one letter of a scale
#[derive(Debug, Clone, PartialEq)]
pub struct LetterRequirement {
    pub letter: String,
    pub threshold: f64,
    pub score: f64,
}

/// Required score for every letter of `scale`, highest threshold first.
pub fn required_scores_for_scale(
    current: &str,
    weight: &str,
    scale: &GradeScale,
) -> Result<Vec<LetterRequirement>, InputError> {
    let weight = validate_weight(weight)?;
    let current = parse_current(current)?;

    scale
        .entries()
        .into_iter()
        .map(|(letter, threshold)| -> Result<LetterRequirement, InputError> {
            Ok(LetterRequirement {
                letter: letter.to_string(),
                threshold,
                score: finite_score(current, threshold, weight)?,
            })
        })
        .collect()
}
