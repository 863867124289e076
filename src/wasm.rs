// WebAssembly bindings for a browser or mobile web view
use crate::grade::{self, GradeRequirementCalculator, GradeScale, RawInputs, TargetMode};
use crate::report::{self, DisplayConfig, ResultFormatter};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct GradeCalculatorWasm {
    formatter: ResultFormatter,
}

impl Default for GradeCalculatorWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GradeCalculatorWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            formatter: ResultFormatter::default(),
        }
    }

    /// Use custom display settings (TOML with a [display] table)
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<GradeCalculatorWasm, JsValue> {
        let config = report::Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self::from_display(&config.display))
    }

    /// Compute the required exam score
    /// mode: "auto" (default), "numeric" or "letter"
    /// Returns JSON: {"status":"valid","score":..,"display":"..","standing":".."} or {"status":"invalid"}
    #[wasm_bindgen]
    pub fn compute(
        &self,
        current: &str,
        desired: &str,
        weight: &str,
        mode: Option<String>,
    ) -> Result<String, JsValue> {
        let mode = match mode {
            Some(mode) => mode.parse::<TargetMode>().map_err(|e| JsValue::from_str(&e))?,
            None => TargetMode::Auto,
        };

        let inputs = RawInputs::new(current, desired, weight);
        let result = GradeRequirementCalculator::for_mode(mode, desired).compute(&inputs);

        let json = self
            .formatter
            .to_json(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))?;

        Ok(json.to_string())
    }

    /// Required score for each letter of the standard scale
    /// Returns a JSON array of rows, or {"status":"invalid"} for bad inputs
    #[wasm_bindgen]
    pub fn sweep(&self, current: &str, weight: &str) -> Result<String, JsValue> {
        let json = match grade::required_scores_for_scale(current, weight, GradeScale::standard()) {
            Ok(requirements) => serde_json::to_string(&self.formatter.sweep_rows(&requirements)),
            Err(_) => serde_json::to_string(&report::ResultReport::Invalid),
        };

        json.map_err(|e| JsValue::from_str(&format!("Failed to serialize sweep: {}", e)))
    }

    /// The standard letter scale as a JSON array
    #[wasm_bindgen]
    pub fn scale(&self) -> Result<String, JsValue> {
        serde_json::to_string(&report::scale_to_json(GradeScale::standard()))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize scale: {}", e)))
    }
}

impl GradeCalculatorWasm {
    fn from_display(display: &DisplayConfig) -> Self {
        Self {
            formatter: ResultFormatter::new(display),
        }
    }
}
