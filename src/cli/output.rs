//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpamlensArgs};
use crate::error::Result;
use crate::features::{FeatureColumn, FeatureVector};

/// Result structure for feature extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub sources: usize,
    pub rows_read: usize,
    pub records_written: usize,
    pub spam: usize,
    pub ham: usize,
    pub outputs: Vec<String>,
    pub duration_ms: u64,
}

/// Result structure for a single inspected comment.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectionResult {
    pub input: String,
    pub comment: String,
    pub features: FeatureVector,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SpamlensArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SpamlensArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in format_human_lines(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &SpamlensArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Render a JSON value as indented `key: value` lines.
fn format_human_lines(value: &serde_json::Value, indent: usize) -> Vec<String> {
    let pad = "  ".repeat(indent);
    match value {
        serde_json::Value::Object(obj) => {
            let mut lines = Vec::new();
            for (key, val) in obj {
                if val.is_object() {
                    lines.push(format!("{pad}{key}:"));
                    lines.extend(format_human_lines(val, indent + 1));
                } else {
                    lines.push(format!("{pad}{key}: {}", format_value(val)));
                }
            }
            lines
        }
        _ => vec![format!("{pad}{}", format_value(value))],
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Feature values as a fixed-width table row, in column order.
pub fn format_feature_table(features: &FeatureVector) -> String {
    let mut header = String::new();
    let mut row = String::new();
    for column in FeatureColumn::ALL {
        let name = column.column_name();
        let width = name.len().max(6);
        header.push_str(&format!("{name:>width$} "));
        row.push_str(&format!("{:>width$.3} ", features.get(column)));
    }
    format!("{}\n{}", header.trim_end(), row.trim_end())
}
