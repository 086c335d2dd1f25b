use crate::data::{Dataset, FeatureVector, Label};
use crate::error::{Error, Result};

/// One-nearest-neighbor classifier over raw, unscaled features.
///
/// Fitting only stores the training rows. Each prediction scans all of them
/// and returns the label of the closest one by Euclidean distance; on equal
/// distance the earliest training row wins.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    training: Dataset,
}

impl NearestNeighbor {
    pub fn fit(training: &Dataset) -> Result<Self> {
        if training.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        tracing::debug!("fitted 1-nn model on {} sessions", training.len());
        Ok(NearestNeighbor {
            training: training.clone(),
        })
    }

    pub fn predict(&self, queries: &[FeatureVector]) -> Vec<Label> {
        queries.iter().map(|q| self.predict_one(q)).collect()
    }

    pub fn predict_one(&self, query: &FeatureVector) -> Label {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;

        for (i, row) in self.training.evidence().iter().enumerate() {
            let d = distance_sqr(row, query);
            if d < best_distance {
                best = i;
                best_distance = d;
            }
        }

        self.training.labels()[best]
    }
}

// Squared distance orders neighbors the same as Euclidean distance.
fn distance_sqr(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}
