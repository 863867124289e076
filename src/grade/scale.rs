use lazy_static::lazy_static;
use std::collections::HashMap;

/// Letter thresholds of the standard scale
const STANDARD_THRESHOLDS: [(&str, f64); 4] = [("A", 90.0), ("B", 80.0), ("C", 70.0), ("D", 60.0)];

lazy_static! {
    static ref STANDARD_SCALE: GradeScale = GradeScale::new(STANDARD_THRESHOLDS);
}

/// Read-only mapping from letter token to numeric threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale {
    thresholds: HashMap<String, f64>,
}

impl GradeScale {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            thresholds: entries
                .into_iter()
                .map(|(letter, threshold)| (letter.into(), threshold))
                .collect(),
        }
    }

    /// A→90, B→80, C→70, D→60
    pub fn standard() -> &'static GradeScale {
        &STANDARD_SCALE
    }

    pub fn threshold(&self, letter: &str) -> Option<f64> {
        self.thresholds.get(letter).copied()
    }

    pub fn contains(&self, letter: &str) -> bool {
        self.thresholds.contains_key(letter)
    }

    /// Entries ordered from the highest threshold down; ties by letter.
    pub fn entries(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .thresholds
            .iter()
            .map(|(letter, threshold)| (letter.as_str(), *threshold))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_thresholds() {
        let scale = GradeScale::standard();
        assert_eq!(scale.threshold("A"), Some(90.0));
        assert_eq!(scale.threshold("B"), Some(80.0));
        assert_eq!(scale.threshold("C"), Some(70.0));
        assert_eq!(scale.threshold("D"), Some(60.0));
        assert_eq!(scale.len(), 4);
    }

    #[test]
    fn test_unknown_letters() {
        let scale = GradeScale::standard();
        assert_eq!(scale.threshold("F"), None);
        assert_eq!(scale.threshold("a"), None);
        assert_eq!(scale.threshold("A+"), None);
        assert!(!scale.contains(""));
    }

    #[test]
    fn test_entries_descending() {
        let letters: Vec<&str> = GradeScale::standard()
            .entries()
            .into_iter()
            .map(|(letter, _)| letter)
            .collect();
        assert_eq!(letters, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_custom_scale() {
        let scale = GradeScale::new([("Pass", 50.0), ("Merit", 65.0), ("Distinction", 75.0)]);
        assert_eq!(scale.threshold("Merit"), Some(65.0));
        assert_eq!(scale.entries()[0], ("Distinction", 75.0));
        assert!(!scale.is_empty());
    }
}
