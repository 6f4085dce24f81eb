pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;

pub use case::{convert, convert_batch, to_camel_case, to_dot_case, to_kebab_case, CaseConvention};
pub use config::Config;
pub use error::{InputKind, InvalidInputError};
pub use input::RawInput;

use serde::Serialize;

/// Outcome of converting one input under one convention.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub input: String,
    pub case: CaseConvention,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conversion {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub converted_count: usize,
    pub invalid_count: usize,
    pub conversions: Vec<Conversion>,
}
