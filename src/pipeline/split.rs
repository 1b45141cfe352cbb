//! Seeded train/test partitioning.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::SplitConfig;
use crate::dataset::{Batch, Record};

/// Shuffle a batch with a seeded permutation and split it.
///
/// The training partition holds `floor(n * train_fraction)` records; the
/// test partition takes the rest, drawn from the front of the permutation.
pub fn train_test_split(batch: Batch, config: &SplitConfig) -> (Batch, Batch) {
    let n = batch.len();
    let n_train = ((n as f64) * config.train_fraction).floor() as usize;
    let n_test = n - n_train.min(n);

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    order.shuffle(&mut rng);

    let mut slots: Vec<Option<Record>> = batch.into_iter().map(Some).collect();
    let mut take = |indices: &[usize]| -> Batch {
        indices.iter().filter_map(|&i| slots[i].take()).collect()
    };

    let test = take(&order[..n_test]);
    let train = take(&order[n_test..]);

    debug!("Split {n} records into {} train / {} test", train.len(), test.len());
    (train, test)
}
