//! CSV and JSONL dataset I/O.
//!
//! Source tables carry a comment column and a label column, e.g.:
//! ```csv
//! Comment,Spam
//! Win a free cruise now,1
//! see you at lunch,0
//! ```
//! Other columns are ignored. Comment cells are kept as text; label cells
//! are type-inferred and coerced later by the dedup stage.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::batch::{Batch, RawBatch};
use crate::dataset::field_value::FieldValue;
use crate::dataset::record::{RawRecord, Record};
use crate::error::{Result, SpamlensError};
use crate::features::FeatureColumn;

/// Header names of the comment and label columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvColumns {
    pub comment: String,
    pub label: String,
    /// CSV delimiter character (default: ',')
    pub delimiter: u8,
}

impl Default for CsvColumns {
    fn default() -> Self {
        CsvColumns {
            comment: "Comment".to_string(),
            label: "Spam".to_string(),
            delimiter: b',',
        }
    }
}

impl CsvColumns {
    pub fn new<C: Into<String>, L: Into<String>>(comment: C, label: L) -> Self {
        CsvColumns {
            comment: comment.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set a custom delimiter character. Only single-byte ASCII delimiters are supported.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(SpamlensError::invalid_argument(format!(
                "Delimiter must be a single ASCII character, got '{delimiter}'"
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }
}

/// Read a labelled CSV file.
pub fn read_labelled_csv<P: AsRef<Path>>(path: P, columns: &CsvColumns) -> Result<RawBatch> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let batch = read_labelled_csv_from_reader(file, columns)?;
    debug!("Read {} rows from {}", batch.len(), path.display());
    Ok(batch)
}

/// Read labelled CSV data from any reader.
///
/// Short rows are accepted; their missing cells become [`FieldValue::Null`]
/// and are dropped during coercion.
pub fn read_labelled_csv_from_reader<R: Read>(reader: R, columns: &CsvColumns) -> Result<RawBatch> {
    let mut reader = ReaderBuilder::new()
        .delimiter(columns.delimiter)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            SpamlensError::invalid_argument(format!(
                "CSV header has no '{name}' column (found: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })
    };
    let comment_idx = find(&columns.comment)?;
    let label_idx = find(&columns.label)?;

    let mut batch = RawBatch::default();
    for row in reader.records() {
        let row = row?;
        let comment = row
            .get(comment_idx)
            .map_or(FieldValue::Null, FieldValue::text_or_null);
        let label = row
            .get(label_idx)
            .map_or(FieldValue::Null, |cell| FieldValue::infer(cell.trim()));
        batch.push(RawRecord { comment, label });
    }

    Ok(batch)
}

/// Read and concatenate several labelled CSV files in order.
pub fn read_labelled_csvs<I, P>(paths: I, columns: &CsvColumns) -> Result<RawBatch>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let batches = paths
        .into_iter()
        .map(|path| read_labelled_csv(path, columns))
        .collect::<Result<Vec<_>>>()?;
    Ok(RawBatch::concat(batches))
}

/// Output header: comment, the seven feature columns, label.
pub fn output_header() -> Vec<&'static str> {
    let mut header = vec!["comment"];
    header.extend(FeatureColumn::ALL.iter().map(|c| c.column_name()));
    header.push("label");
    header
}

fn record_row(record: &Record) -> Vec<String> {
    let mut row = Vec::with_capacity(FeatureColumn::ALL.len() + 2);
    row.push(record.comment.clone());
    row.extend(record.features.to_array().iter().map(|v| v.to_string()));
    row.push(record.label.map(|l| l.to_string()).unwrap_or_default());
    row
}

/// Write a processed batch as CSV.
pub fn write_csv<W: Write>(batch: &Batch, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(output_header())?;
    for record in batch {
        writer.write_record(record_row(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a processed batch as JSON lines, one record per line.
pub fn write_jsonl<W: Write>(batch: &Batch, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for record in batch {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a processed batch to a file, as JSONL when the extension is
/// `jsonl` and CSV otherwise.
pub fn write_batch_file<P: AsRef<Path>>(batch: &Batch, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") => write_jsonl(batch, file)?,
        _ => write_csv(batch, file)?,
    }
    debug!("Wrote {} records to {}", batch.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic() {
        let data = "Comment,Spam,Extra\nWin now,1,x\nhi there,False,y\n";
        let batch = read_labelled_csv_from_reader(data.as_bytes(), &CsvColumns::default()).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[0].comment, FieldValue::from("Win now"));
        assert_eq!(batch.records()[0].label, FieldValue::Integer(1));
        assert_eq!(batch.records()[1].label, FieldValue::Boolean(false));
    }

    #[test]
    fn test_comment_cells_are_not_inferred() {
        let data = "Comment,Spam\n1.50,0\n";
        let batch = read_labelled_csv_from_reader(data.as_bytes(), &CsvColumns::default()).unwrap();
        assert_eq!(batch.records()[0].comment, FieldValue::from("1.50"));
    }

    #[test]
    fn test_missing_cells_are_null() {
        let data = "Comment,Spam\n,1\nonly comment\n";
        let batch = read_labelled_csv_from_reader(data.as_bytes(), &CsvColumns::default()).unwrap();
        assert_eq!(batch.records()[0].comment, FieldValue::Null);
        assert_eq!(batch.records()[1].label, FieldValue::Null);
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let data = "CONTENT;CLASS\nhello;0\n";
        let columns = CsvColumns::new("CONTENT", "CLASS")
            .with_delimiter(';')
            .unwrap();
        let batch = read_labelled_csv_from_reader(data.as_bytes(), &columns).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        let err = CsvColumns::default().with_delimiter('€').unwrap_err();
        assert!(matches!(err, SpamlensError::InvalidArgument(_)));
        assert!(CsvColumns::default().with_delimiter('\t').is_ok());
    }

    #[test]
    fn test_missing_header_is_error() {
        let data = "text,label\nhello,0\n";
        let result = read_labelled_csv_from_reader(data.as_bytes(), &CsvColumns::default());
        assert!(matches!(result, Err(SpamlensError::InvalidArgument(_))));
    }

    #[test]
    fn test_write_csv() {
        let mut record = Record::labelled("win call", true);
        record.features.length = 0.16;
        record.features.currency = 0.5;
        let batch = Batch::new(vec![record, Record::unlabelled("hi")]);

        let mut out = Vec::new();
        write_csv(&batch, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "comment,length,currency,spam_word,emoji,contain,email,phone,label"
        );
        assert_eq!(lines[1], "win call,0.16,0.5,0,0,0,0,0,true");
        assert_eq!(lines[2], "hi,0,0,0,0,0,0,0,");
    }

    #[test]
    fn test_write_jsonl() {
        let batch = Batch::new(vec![Record::labelled("a", false), Record::unlabelled("b")]);
        let mut out = Vec::new();
        write_jsonl(&batch, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["comment"], "a");
        assert_eq!(first["label"], false);
        assert_eq!(first["spam_word"], 0.0);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second["label"].is_null());
    }
}
