use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single letter with an optional +/- modifier
    /// Examples: "A", "b", "C+", "D-"
    static ref LETTER_PATTERN: Regex = Regex::new(r"^[A-Za-z][+-]?$").unwrap();
}

/// Check if a desired-grade string is a letter token rather than a number.
///
/// Detection is looser than scale lookup: "a", "C+" and "F" are detected as
/// letters and then rejected as unknown grades by the standard scale.
pub fn looks_like_letter_grade(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    LETTER_PATTERN.is_match(trimmed)
}
