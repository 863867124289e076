use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::grade::{CalculationResult, GradeScale, LetterRequirement, Standing};
use crate::report::config::{DisplayConfig, OutputFormat};

const INVALID_MESSAGE: &str = "Invalid input: enter numeric grades and an exam weight between 0 and 1";

/// Serialized shape of a single calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultReport {
    Valid {
        score: f64,
        display: String,
        standing: Standing,
    },
    Invalid,
}

/// Serialized shape of one sweep row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub letter: String,
    pub threshold: f64,
    pub score: f64,
    pub display: String,
    pub standing: Standing,
}

/// Renders calculation results for people (text) or programs (JSON)
#[derive(Debug, Clone)]
pub struct ResultFormatter {
    precision: usize,
    max_score: f64,
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

impl ResultFormatter {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            precision: display.precision,
            max_score: display.max_score,
        }
    }

    pub fn format_score(&self, score: f64) -> String {
        format!("{:.*}", self.precision, score)
    }

    pub fn report(&self, result: &CalculationResult) -> ResultReport {
        match result {
            CalculationResult::Valid(score) => ResultReport::Valid {
                score: *score,
                display: self.format_score(*score),
                standing: Standing::classify(*score, self.max_score),
            },
            CalculationResult::Invalid => ResultReport::Invalid,
        }
    }

    pub fn format_text(&self, result: &CalculationResult) -> String {
        match self.report(result) {
            ResultReport::Valid {
                display, standing, ..
            } => {
                let sentence = format!("You need to score: {} on your exam", display);
                match standing {
                    Standing::Attainable => sentence,
                    Standing::ExceedsMaximum => format!(
                        "{} (extra credit needed, above {})",
                        sentence,
                        self.format_score(self.max_score)
                    ),
                    Standing::AlreadySecured => format!("{} (target already secured)", sentence),
                }
            }
            ResultReport::Invalid => INVALID_MESSAGE.to_string(),
        }
    }

    pub fn to_json(&self, result: &CalculationResult) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self.report(result))
    }

    pub fn sweep_rows(&self, requirements: &[LetterRequirement]) -> Vec<SweepRow> {
        requirements
            .iter()
            .map(|req| SweepRow {
                letter: req.letter.clone(),
                threshold: req.threshold,
                score: req.score,
                display: self.format_score(req.score),
                standing: Standing::classify(req.score, self.max_score),
            })
            .collect()
    }

    pub fn format_sweep_text(&self, requirements: &[LetterRequirement]) -> String {
        let mut out = String::new();
        for row in self.sweep_rows(requirements) {
            let note = match row.standing {
                Standing::Attainable => "",
                Standing::ExceedsMaximum => "  (extra credit needed)",
                Standing::AlreadySecured => "  (already secured)",
            };
            out.push_str(&format!(
                "{} ({}): {}{}\n",
                row.letter,
                self.format_score(row.threshold),
                row.display,
                note
            ));
        }
        out
    }

    /// Render a single result in the requested format
    pub fn render(
        &self,
        result: &CalculationResult,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.format_text(result)),
            OutputFormat::Json => serde_json::to_string_pretty(&self.to_json(result)?),
        }
    }

    pub fn render_sweep(
        &self,
        requirements: &[LetterRequirement],
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.format_sweep_text(requirements).trim_end().to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(&self.sweep_rows(requirements)),
        }
    }
}

pub fn format_scale_text(scale: &GradeScale) -> String {
    scale
        .entries()
        .into_iter()
        .map(|(letter, threshold)| format!("{} -> {}", letter, threshold))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn scale_to_json(scale: &GradeScale) -> JsonValue {
    JsonValue::Array(
        scale
            .entries()
            .into_iter()
            .map(|(letter, threshold)| serde_json::json!({ "letter": letter, "threshold": threshold }))
            .collect(),
    )
}
