use thiserror::Error;

/// Why a set of raw inputs was rejected.
///
/// The calculation boundary collapses every variant to
/// [`CalculationResult::Invalid`](crate::grade::CalculationResult::Invalid);
/// the cause is only visible through
/// [`try_compute_required_score`](crate::grade::try_compute_required_score).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("exam weight is not a number: '{0}'")]
    InvalidWeight(String),

    #[error("exam weight {0} is outside (0, 1]")]
    WeightOutOfRange(f64),

    #[error("current grade is not a number: '{0}'")]
    InvalidCurrent(String),

    #[error("desired grade is not a number: '{0}'")]
    InvalidDesired(String),

    #[error("unknown letter grade: '{0}'")]
    UnknownGrade(String),

    #[error("required score {0} is not a finite number")]
    ScoreOutOfRange(f64),
}
