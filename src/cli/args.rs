//! Command line argument parsing for the Spamlens CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Spamlens - heuristic spam features for comment classifiers
#[derive(Parser, Debug, Clone)]
#[command(name = "spamlens")]
#[command(about = "Turn raw comments into spam/ham feature tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpamlensArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPAMLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpamlensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the training pipeline over labelled CSV files
    Extract(ExtractArgs),

    /// Show the cleaned comment and features for a single text
    Inspect(InspectArgs),

    /// Print the effective pipeline configuration
    Config,
}

/// Arguments for feature extraction
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Labelled CSV sources, concatenated in order
    #[arg(value_name = "CSV_FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file (.csv or .jsonl); CSV on stdout when omitted
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Balance labels by random oversampling
    #[arg(long)]
    pub oversample: bool,

    /// Write train and test partitions next to the output file
    #[arg(long, requires = "output")]
    pub split: bool,

    /// Also write the named model inputs as a JSON object
    #[arg(long, value_name = "TENSORS_FILE")]
    pub tensors: Option<PathBuf>,

    /// Header of the comment column
    #[arg(long, default_value = "Comment")]
    pub comment_column: String,

    /// Header of the label column
    #[arg(long, default_value = "Spam")]
    pub label_column: String,

    /// CSV delimiter
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,
}

/// Arguments for inspecting a single comment
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Comment text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity() {
        let args = SpamlensArgs::try_parse_from(["spamlens", "config"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = SpamlensArgs::try_parse_from(["spamlens", "-vv", "config"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = SpamlensArgs::try_parse_from(["spamlens", "--quiet", "config"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = SpamlensArgs::try_parse_from(["spamlens", "--format", "json", "config"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_extract_args() {
        let args = SpamlensArgs::try_parse_from([
            "spamlens",
            "extract",
            "sms.csv",
            "yt.csv",
            "-o",
            "features.csv",
            "--oversample",
            "--split",
        ])
        .unwrap();

        if let Command::Extract(extract) = args.command {
            assert_eq!(extract.inputs.len(), 2);
            assert!(extract.oversample);
            assert!(extract.split);
            assert_eq!(extract.comment_column, "Comment");
            assert_eq!(extract.delimiter, ',');
        } else {
            panic!("Expected Extract command");
        }
    }

    #[test]
    fn test_split_requires_output() {
        let result = SpamlensArgs::try_parse_from(["spamlens", "extract", "a.csv", "--split"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_requires_input() {
        assert!(SpamlensArgs::try_parse_from(["spamlens", "extract"]).is_err());
    }

    #[test]
    fn test_inspect_args() {
        let args = SpamlensArgs::try_parse_from(["spamlens", "inspect", "Win $500 now"]).unwrap();
        if let Command::Inspect(inspect) = args.command {
            assert_eq!(inspect.text, "Win $500 now");
        } else {
            panic!("Expected Inspect command");
        }
    }
}
