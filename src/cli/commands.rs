//! Command implementations for the Spamlens CLI.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::dataset::csv::{CsvColumns, read_labelled_csvs, write_batch_file, write_csv};
use crate::dataset::Batch;
use crate::error::Result;
use crate::export::FeatureTensors;
use crate::pipeline::{FeaturePipeline, train_test_split};

/// Execute a CLI command.
pub fn execute_command(args: SpamlensArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Command::Extract(extract_args) => extract(extract_args.clone(), &config, &args),
        Command::Inspect(inspect_args) => inspect(inspect_args, &config, &args),
        Command::Config => show_config(&config),
    }
}

/// Load the configuration file if one was given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            PipelineConfig::from_json_file(path)
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Run the training pipeline over labelled CSV sources.
fn extract(args: ExtractArgs, config: &PipelineConfig, cli_args: &SpamlensArgs) -> Result<()> {
    let start = Instant::now();

    let columns =
        CsvColumns::new(&args.comment_column, &args.label_column).with_delimiter(args.delimiter)?;
    let raw = read_labelled_csvs(&args.inputs, &columns)?;
    let rows_read = raw.len();

    let mut pipeline = FeaturePipeline::training(config);
    if args.oversample {
        pipeline = pipeline.with_oversampling();
    }
    let batch = pipeline.run(raw);

    let mut outputs = Vec::new();
    match &args.output {
        Some(output) if args.split => {
            let (train, test) = train_test_split(batch.clone(), &config.split);
            for (partition, name) in [(&train, "train"), (&test, "test")] {
                let path = partition_path(output, name);
                write_batch_file(partition, &path)?;
                outputs.push(path.display().to_string());
            }
        }
        Some(output) => {
            write_batch_file(&batch, output)?;
            outputs.push(output.display().to_string());
        }
        None => write_csv(&batch, io::stdout().lock())?,
    }

    if let Some(tensors_path) = &args.tensors {
        let file = std::fs::File::create(tensors_path)?;
        FeatureTensors::from_batch(&batch).write_json(file)?;
        outputs.push(tensors_path.display().to_string());
    }

    // The feature table itself went to stdout.
    if args.output.is_none() {
        return Ok(());
    }

    let (spam, ham) = count_labels(&batch);
    output_result(
        "Feature extraction completed",
        &ExtractionResult {
            sources: args.inputs.len(),
            rows_read,
            records_written: batch.len(),
            spam,
            ham,
            outputs,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Show the processed form of a single comment.
fn inspect(args: &InspectArgs, config: &PipelineConfig, cli_args: &SpamlensArgs) -> Result<()> {
    let pipeline = FeaturePipeline::inference(config);
    let record = pipeline.process_comment(&args.text);

    if cli_args.output_format == OutputFormat::Human {
        println!("input:   {}", args.text);
        println!("comment: {}", record.comment);
        println!();
        println!("{}", format_feature_table(&record.features));
        return Ok(());
    }

    output_result(
        "Comment inspected",
        &InspectionResult {
            input: args.text.clone(),
            comment: record.comment,
            features: record.features,
        },
        cli_args,
    )
}

fn show_config(config: &PipelineConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

/// `out/features.csv` with `train` becomes `out/features.train.csv`.
pub fn partition_path(output: &Path, partition: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "features".to_string());
    let file_name = match output.extension() {
        Some(ext) => format!("{stem}.{partition}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{partition}"),
    };
    output.with_file_name(file_name)
}

fn count_labels(batch: &Batch) -> (usize, usize) {
    let spam = batch.iter().filter(|r| r.label == Some(true)).count();
    let ham = batch.iter().filter(|r| r.label == Some(false)).count();
    (spam, ham)
}
