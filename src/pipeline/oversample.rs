//! Random oversampling of the minority label.
//!
//! Minority rows are drawn with replacement until every label has as many
//! rows as the majority. Drawn rows are appended after the originals, so
//! the output contains only copies of input rows.

use std::collections::BTreeMap;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::OversampleConfig;
use crate::dataset::Batch;
use crate::pipeline::stage::Stage;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOversampler {
    config: OversampleConfig,
}

impl RandomOversampler {
    pub fn new(config: OversampleConfig) -> Self {
        RandomOversampler { config }
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }
}

impl Stage for RandomOversampler {
    fn apply(&self, batch: Batch) -> Batch {
        let mut indices_by_label: BTreeMap<bool, Vec<usize>> = BTreeMap::new();
        for (i, record) in batch.iter().enumerate() {
            if let Some(label) = record.label {
                indices_by_label.entry(label).or_default().push(i);
            }
        }

        if indices_by_label.len() < 2 {
            warn!(
                "Oversampling skipped: {} label class(es) present",
                indices_by_label.len()
            );
            return batch;
        }

        let target = indices_by_label.values().map(Vec::len).max().unwrap_or(0);
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let mut drawn = Vec::new();
        for indices in indices_by_label.values() {
            for _ in indices.len()..target {
                let pick = indices[rng.random_range(0..indices.len())];
                drawn.push(batch[pick].clone());
            }
        }

        info!(
            "Oversampled {} rows to balance {} labelled rows per class",
            drawn.len(),
            target
        );

        let mut records = batch.into_records();
        records.extend(drawn);
        Batch::new(records)
    }

    fn name(&self) -> &'static str {
        "oversample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    fn imbalanced() -> Batch {
        let mut records: Vec<Record> = (0..7)
            .map(|i| Record::labelled(format!("ham {i}"), false))
            .collect();
        records.push(Record::labelled("spam a", true));
        records.push(Record::labelled("spam b", true));
        Batch::new(records)
    }

    #[test]
    fn test_balances_labels() {
        let batch = RandomOversampler::default().apply(imbalanced());
        let counts = batch.label_counts();
        assert_eq!(counts[&Some(true)], 7);
        assert_eq!(counts[&Some(false)], 7);
        assert_eq!(batch.len(), 14);
    }

    #[test]
    fn test_only_copies_input_rows() {
        let input = imbalanced();
        let output = RandomOversampler::default().apply(input.clone());
        assert_eq!(&output.records()[..input.len()], input.records());
        assert!(output.iter().all(|r| input.records().contains(r)));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let oversampler = RandomOversampler::new(OversampleConfig { seed: 11 });
        assert_eq!(oversampler.apply(imbalanced()), oversampler.apply(imbalanced()));
        assert_eq!(oversampler.seed(), 11);
    }

    #[test]
    fn test_single_class_unchanged() {
        let batch = Batch::new(vec![Record::labelled("a", true), Record::labelled("b", true)]);
        let output = RandomOversampler::default().apply(batch.clone());
        assert_eq!(output, batch);
    }

    #[test]
    fn test_unlabelled_rows_pass_through() {
        let mut records = imbalanced().into_records();
        records.push(Record::unlabelled("unknown"));
        let output = RandomOversampler::default().apply(Batch::new(records));
        assert_eq!(output.label_counts()[&None], 1);
        assert_eq!(output.label_counts()[&Some(true)], 7);
    }
}
