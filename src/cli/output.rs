use crate::{Conversion, RunResult};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    total: usize,
    invalid: usize,
    conversions: &'a [Conversion],
}

pub fn print_conversions(result: &RunResult, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_conversions(&result.conversions, colored_output),
        OutputFormat::Json => print_json_conversions(result),
    }
}

pub fn print_text_conversions(conversions: &[Conversion], colored_output: bool) {
    for conversion in conversions {
        println!("{}", format_conversion(conversion, colored_output));

        if let Some(tokens) = &conversion.tokens {
            let tokens = format!("[{}]", tokens.join(", "));
            if colored_output {
                println!("    {} {}", "tokens".dimmed(), tokens.dimmed());
            } else {
                println!("    tokens {}", tokens);
            }
        }
    }
}

fn format_conversion(conversion: &Conversion, colored_output: bool) -> String {
    let tag = format!("{:>5}", conversion.case.to_string());
    let input = format!("{:?}", conversion.input);

    match (&conversion.output, &conversion.error) {
        (Some(output), _) if colored_output => format!(
            "  {} {} {} {}",
            tag.blue().bold(),
            input,
            "→".dimmed(),
            format!("{:?}", output).green()
        ),
        (Some(output), _) => format!("  {} {} → {:?}", tag, input, output),
        (None, error) => {
            let message = error.as_deref().unwrap_or_default();
            if colored_output {
                format!(
                    "  {} {} {} {}",
                    tag.blue().bold(),
                    input,
                    "✗".red().bold(),
                    message.red()
                )
            } else {
                format!("  {} {} ✗ {}", tag, input, message)
            }
        }
    }
}

fn print_json_conversions(result: &RunResult) {
    let output = JsonOutput {
        total: result.conversions.len(),
        invalid: result.invalid_count,
        conversions: &result.conversions,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "failed to serialize conversions"),
    }
}

pub fn print_summary(result: &RunResult, colored: bool) {
    println!();
    if result.invalid_count == 0 {
        let conversion_word = if result.converted_count == 1 { "conversion" } else { "conversions" };
        if colored {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                result.converted_count.to_string().green().bold(),
                conversion_word
            );
        } else {
            println!("✓ {} {}", result.converted_count, conversion_word);
        }
    } else {
        let input_word = if result.invalid_count == 1 { "input" } else { "inputs" };
        if colored {
            println!(
                "{} {} invalid {} ({} converted)",
                "✗".red().bold(),
                result.invalid_count.to_string().red().bold(),
                input_word,
                result.converted_count
            );
        } else {
            println!(
                "✗ {} invalid {} ({} converted)",
                result.invalid_count, input_word, result.converted_count
            );
        }
    }
}

pub fn print_section(title: &str, colored: bool) {
    if colored {
        println!("\n{}", title.bold().underline());
    } else {
        println!("\n{}", title);
    }
}
