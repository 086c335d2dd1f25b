use std::path::PathBuf;

use clap::Parser;
use rand::Rng;

pub mod data;
pub mod error;
pub mod evaluate;
pub mod knn;
pub mod split;

pub use data::{Dataset, FeatureVector, Label};
pub use error::{Class, Error, Result};
pub use evaluate::{evaluate, Evaluation, Report};
pub use knn::NearestNeighbor;
pub use split::train_test_split;

/// Fraction of sessions held out for testing.
pub const TEST_SIZE: f64 = 0.4;

#[derive(Debug, Parser)]
#[command(
    name = "shopping",
    version,
    about = "Predict purchase intent of shopping sessions with a nearest-neighbor classifier."
)]
pub struct Config {
    /// CSV file of labeled shopping sessions
    #[arg(allow_hyphen_values = true)]
    pub data: PathBuf,
}

pub fn run(config: &Config) -> Result<Report> {
    run_with_rng(config, &mut rand::thread_rng())
}

/// Loads the data, holds out `TEST_SIZE` of it, fits on the rest and scores
/// the predictions on the held-out rows.
pub fn run_with_rng<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Report> {
    let dataset = Dataset::load(&config.data)?;
    let (train, test) = train_test_split(&dataset, TEST_SIZE, rng)?;

    let model = NearestNeighbor::fit(&train)?;
    let predictions = model.predict(test.evidence());

    Report::new(test.labels(), &predictions)
}
