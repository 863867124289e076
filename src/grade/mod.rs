// Required exam score calculation: input parsing, validation, letter scales
// and the weighted-average inversion.

pub mod calculator;
pub mod detector;
pub mod error;
pub mod parser;
pub mod scale;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;

pub use calculator::*;
pub use detector::looks_like_letter_grade;
pub use error::InputError;
pub use scale::GradeScale;
pub use types::*;
