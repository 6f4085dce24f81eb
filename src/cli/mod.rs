pub mod demo;
pub mod output;

use crate::case::{convert_batch, tokenize, CaseConvention};
use crate::input::{validate, RawInput};
use crate::{Config, Conversion, RunResult};
use anyhow::{Context, Result};
use serde_json::Value;

/// Turn command-line arguments into input values. With `json_input` each
/// argument is parsed as a JSON literal, so `null` or `42` reach the
/// validator as what they are.
pub fn parse_inputs(args: &[String], json_input: bool) -> Result<Vec<Value>> {
    if !json_input {
        return Ok(args.iter().cloned().map(Value::String).collect());
    }

    args.iter()
        .map(|arg| {
            serde_json::from_str(arg).with_context(|| format!("Invalid JSON input: {}", arg))
        })
        .collect()
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert every value under every convention, grouped by input.
pub fn convert_values(
    values: &[Value],
    conventions: &[CaseConvention],
    show_tokens: bool,
) -> Vec<Conversion> {
    let raws: Vec<RawInput<'_>> = values.iter().map(RawInput::from).collect();
    let per_convention: Vec<_> = conventions
        .iter()
        .map(|&convention| convert_batch(&raws, convention))
        .collect();

    let mut conversions = Vec::with_capacity(values.len() * conventions.len());
    for (i, (value, raw)) in values.iter().zip(&raws).enumerate() {
        let tokens = if show_tokens {
            validate(*raw).ok().map(tokenize)
        } else {
            None
        };

        for (results, &convention) in per_convention.iter().zip(conventions) {
            let result = &results[i];
            conversions.push(Conversion {
                input: label(value),
                case: convention,
                output: result.as_ref().ok().cloned(),
                tokens: tokens.clone(),
                error: result.as_ref().err().map(ToString::to_string),
            });
        }
    }

    conversions
}

pub fn run(values: &[Value], config: &Config) -> RunResult {
    let conversions = convert_values(values, &config.conventions(), config.show_tokens);
    let invalid_count = conversions.iter().filter(|c| !c.is_valid()).count();

    RunResult {
        converted_count: conversions.len() - invalid_count,
        invalid_count,
        conversions,
    }
}
