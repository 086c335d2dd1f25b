use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Dataset;
use crate::error::{Error, Result};

/// Shuffles the rows of `dataset` and splits them into `(train, test)`.
///
/// The test set receives `round(test_size * len)` rows; every other row goes
/// to the training set. No row lands in both.
pub fn train_test_split<R: Rng + ?Sized>(
    dataset: &Dataset,
    test_size: f64,
    rng: &mut R,
) -> Result<(Dataset, Dataset)> {
    if !(0.0..=1.0).contains(&test_size) {
        return Err(Error::InvalidTestSize(test_size));
    }

    let total = dataset.len();
    let mut indices: Vec<usize> = (0..total).collect();
    indices.shuffle(rng);

    let test_len = ((total as f64) * test_size).round() as usize;
    let (test, train) = indices.split_at(test_len.min(total));

    tracing::info!(
        "split {} sessions into {} training and {} testing",
        total,
        train.len(),
        test.len()
    );
    Ok((dataset.select(train), dataset.select(test)))
}
