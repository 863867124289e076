use serde::Serialize;

use crate::grade::error::InputError;

/// The three strings collected from the user, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub current_grade: String,
    pub desired_grade: String,
    pub exam_weight: String,
}

impl RawInputs {
    pub fn new(
        current_grade: impl Into<String>,
        desired_grade: impl Into<String>,
        exam_weight: impl Into<String>,
    ) -> Self {
        Self {
            current_grade: current_grade.into(),
            desired_grade: desired_grade.into(),
            exam_weight: exam_weight.into(),
        }
    }
}

/// Outcome of a calculation: a finite required score, or invalid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationResult {
    Valid(f64),
    Invalid,
}

impl CalculationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, CalculationResult::Valid(_))
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            CalculationResult::Valid(score) => Some(*score),
            CalculationResult::Invalid => None,
        }
    }

    /// Classify a valid score against `max_score`. `None` for invalid results.
    pub fn standing(&self, max_score: f64) -> Option<Standing> {
        self.score().map(|score| Standing::classify(score, max_score))
    }
}

impl From<Result<f64, InputError>> for CalculationResult {
    fn from(result: Result<f64, InputError>) -> Self {
        match result {
            Ok(score) => CalculationResult::Valid(score),
            Err(_) => CalculationResult::Invalid,
        }
    }
}

/// Where a valid required score sits relative to ordinary scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Zero or less: the target is met regardless of the exam.
    AlreadySecured,
    Attainable,
    /// Above the maximum score: extra credit needed.
    ExceedsMaximum,
}

impl Standing {
    pub fn classify(score: f64, max_score: f64) -> Self {
        if score > max_score {
            Standing::ExceedsMaximum
        } else if score <= 0.0 {
            Standing::AlreadySecured
        } else {
            Standing::Attainable
        }
    }
}

/// How the desired grade string should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetMode {
    /// Letter token if the text looks like one, number otherwise
    #[default]
    Auto,
    Numeric,
    Letter,
}

impl std::str::FromStr for TargetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(TargetMode::Auto),
            "numeric" => Ok(TargetMode::Numeric),
            "letter" => Ok(TargetMode::Letter),
            other => Err(format!("Unknown target mode: {}", other)),
        }
    }
}
