//! Ordered collections of records.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::dataset::record::{RawRecord, Record};

/// Rows as loaded from the sources, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBatch {
    records: Vec<RawRecord>,
}

impl RawBatch {
    pub fn new(records: Vec<RawRecord>) -> Self {
        RawBatch { records }
    }

    /// Concatenate several sources, preserving source and row order.
    pub fn concat<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = RawBatch>,
    {
        let records = batches.into_iter().flat_map(|b| b.records).collect();
        RawBatch { records }
    }

    pub fn push(&mut self, record: RawRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RawRecord> {
        self.records
    }
}

impl FromIterator<RawRecord> for RawBatch {
    fn from_iter<T: IntoIterator<Item = RawRecord>>(iter: T) -> Self {
        RawBatch::new(iter.into_iter().collect())
    }
}

/// A batch of coerced records sharing the same schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    records: Vec<Record>,
}

impl Batch {
    pub fn new(records: Vec<Record>) -> Self {
        Batch { records }
    }

    /// Build an unlabelled batch for inference.
    pub fn from_comments<I, S>(comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        comments.into_iter().map(Record::unlabelled).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records per label; unlabelled records are keyed `None`.
    pub fn label_counts(&self) -> BTreeMap<Option<bool>, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.label).or_insert(0) += 1;
        }
        counts
    }
}

impl Index<usize> for Batch {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl FromIterator<Record> for Batch {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Batch::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Batch {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
