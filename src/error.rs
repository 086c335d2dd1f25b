use std::fmt;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The two outcome classes a rate is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Positive,
    Negative,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Class::Positive => write!(f, "positive"),
            Class::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read data file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{column}'")]
    Schema { column: &'static str },

    #[error("row {row}: cannot parse {column} value '{value}'")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: unknown {column} value '{value}'")]
    UnknownCategory {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("test size must be between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    #[error("expected {expected} labels, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("cannot fit a model on an empty training set")]
    EmptyTrainingSet,

    #[error("rate is undefined: test set has no {0} examples")]
    UndefinedMetric(Class),
}
