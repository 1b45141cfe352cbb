//! Deduplication and type coercion.
//!
//! Raw rows are coerced into [`Record`]s: the comment becomes text and the
//! label a boolean. Rows that cannot be coerced (missing comment, missing or
//! unreadable label) are dropped with a log line. Duplicates are detected on
//! the coerced `(comment, label)` pair and only the first occurrence is kept,
//! so running the stage again changes nothing.

use std::collections::HashSet;

use log::{debug, warn};

use crate::dataset::{Batch, RawBatch, RawRecord, Record};
use crate::error::{Result, SpamlensError};
use crate::pipeline::stage::Stage;

#[derive(Debug, Clone, Copy, Default)]
pub struct Deduplicate;

impl Deduplicate {
    pub fn new() -> Self {
        Deduplicate
    }

    /// Coerce a raw row into a labelled record.
    pub fn coerce_record(row: usize, raw: &RawRecord) -> Result<Record> {
        let comment = raw
            .comment
            .to_comment()
            .ok_or_else(|| SpamlensError::malformed(row, "missing comment"))?;
        let label = raw.label.to_label().ok_or_else(|| {
            if raw.label.is_null() {
                SpamlensError::malformed(row, "missing label")
            } else {
                SpamlensError::malformed(row, format!("unreadable label '{}'", raw.label))
            }
        })?;
        Ok(Record::labelled(comment, label))
    }

    /// Coerce every row, drop malformed ones, then remove duplicates.
    pub fn coerce(&self, raw: RawBatch) -> Batch {
        let total = raw.len();
        let mut records = Vec::with_capacity(total);
        for (row, raw_record) in raw.records().iter().enumerate() {
            match Self::coerce_record(row, raw_record) {
                Ok(record) => records.push(record),
                Err(e) if e.is_recoverable_by_drop() => debug!("Dropping row: {e}"),
                Err(e) => warn!("Unexpected coercion failure, dropping row: {e}"),
            }
        }

        let dropped = total - records.len();
        if dropped > 0 {
            warn!("Dropped {dropped} of {total} rows with missing or unreadable fields");
        }

        self.apply(Batch::new(records))
    }
}

impl Stage for Deduplicate {
    fn apply(&self, batch: Batch) -> Batch {
        let before = batch.len();
        let mut seen = HashSet::with_capacity(before);
        let batch: Batch = batch
            .into_iter()
            .filter(|record| seen.insert((record.comment.clone(), record.label)))
            .collect();

        debug!("Removed {} duplicate rows", before - batch.len());
        batch
    }

    fn name(&self) -> &'static str {
        "dedup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FieldValue;

    fn raw(rows: Vec<(FieldValue, FieldValue)>) -> RawBatch {
        rows.into_iter()
            .map(|(comment, label)| RawRecord { comment, label })
            .collect()
    }

    #[test]
    fn test_coerce_and_dedup() {
        let batch = Deduplicate::new().coerce(raw(vec![
            ("win".into(), FieldValue::Integer(1)),
            ("win".into(), FieldValue::Boolean(true)),
            ("win".into(), FieldValue::Integer(0)),
            ("hi".into(), "ham".into()),
        ]));

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].label, Some(true));
        assert_eq!(batch[1].label, Some(false));
        assert_eq!(batch[2].comment, "hi");
    }

    #[test]
    fn test_drops_malformed_rows() {
        let batch = Deduplicate::new().coerce(raw(vec![
            (FieldValue::Null, FieldValue::Integer(1)),
            ("no label".into(), FieldValue::Null),
            ("bad label".into(), "perhaps".into()),
            ("nan label".into(), FieldValue::Float(f64::NAN)),
            (FieldValue::Integer(7), FieldValue::Integer(0)),
        ]));

        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].comment, "7");
    }

    #[test]
    fn test_malformed_error() {
        let err = Deduplicate::coerce_record(4, &RawRecord::new("x", "perhaps")).unwrap_err();
        assert!(err.is_recoverable_by_drop());
        assert!(err.to_string().contains("row 4"));
        assert!(err.to_string().contains("perhaps"));
    }

    #[test]
    fn test_idempotent() {
        let dedup = Deduplicate::new();
        let once = dedup.coerce(raw(vec![
            ("a".into(), FieldValue::Integer(1)),
            ("a".into(), FieldValue::Integer(1)),
            ("b".into(), FieldValue::Integer(0)),
        ]));
        let twice = dedup.apply(once.clone());
        assert_eq!(once, twice);
    }
}
