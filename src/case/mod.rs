pub mod formatter;
pub mod tokenizer;

pub use formatter::format;
pub use tokenizer::tokenize;

use crate::error::InvalidInputError;
use crate::input::{validate, RawInput};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output style for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseConvention {
    #[default]
    Camel,
    Kebab,
    Dot,
}

impl CaseConvention {
    pub const ALL: [CaseConvention; 3] = [
        CaseConvention::Camel,
        CaseConvention::Kebab,
        CaseConvention::Dot,
    ];
}

impl FromStr for CaseConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseConvention::Camel),
            "kebab" | "kebab-case" => Ok(CaseConvention::Kebab),
            "dot" | "dot.case" => Ok(CaseConvention::Dot),
            _ => Err(format!("Unknown case: {}", s)),
        }
    }
}

impl fmt::Display for CaseConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseConvention::Camel => write!(f, "camel"),
            CaseConvention::Kebab => write!(f, "kebab"),
            CaseConvention::Dot => write!(f, "dot"),
        }
    }
}

/// Validate, tokenize and format `input` in one go.
pub fn convert<'a>(
    input: impl Into<RawInput<'a>>,
    convention: CaseConvention,
) -> Result<String, InvalidInputError> {
    let text = validate(input.into())?;
    Ok(format(&tokenize(text), convention))
}

/// Convert many inputs on the rayon pool. Results line up with `inputs`.
pub fn convert_batch(
    inputs: &[RawInput<'_>],
    convention: CaseConvention,
) -> Vec<Result<String, InvalidInputError>> {
    tracing::debug!(count = inputs.len(), %convention, "converting batch");
    inputs
        .par_iter()
        .map(|input| convert(*input, convention))
        .collect()
}

/// ```
/// assert_eq!(caseconv::to_camel_case("user_id_123").unwrap(), "userId123");
/// assert!(caseconv::to_camel_case(42_i32).is_err());
/// ```
pub fn to_camel_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, InvalidInputError> {
    convert(input, CaseConvention::Camel)
}

/// ```
/// assert_eq!(caseconv::to_kebab_case("XMLHttpRequest").unwrap(), "xml-http-request");
/// ```
pub fn to_kebab_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, InvalidInputError> {
    convert(input, CaseConvention::Kebab)
}

/// ```
/// assert_eq!(caseconv::to_dot_case("firstName").unwrap(), "first.name");
/// ```
pub fn to_dot_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, InvalidInputError> {
    convert(input, CaseConvention::Dot)
}
