use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;

use crate::error::{Error, Result};

/// Number of values in one encoded session.
pub const FEATURES: usize = 17;

pub type FeatureVector = [f64; FEATURES];

/// 1 when the session ended in a purchase, 0 otherwise.
pub type Label = u8;

const MONTHS: [(&str, u8); 12] = [
    ("Jan", 0),
    ("Feb", 1),
    ("Mar", 2),
    ("Apr", 3),
    ("May", 4),
    ("June", 5),
    ("Jul", 6),
    ("Aug", 7),
    ("Sep", 8),
    ("Oct", 9),
    ("Nov", 10),
    ("Dec", 11),
];

const VISITOR_TYPES: [(&str, u8); 3] = [
    ("Returning_Visitor", 1),
    ("New_Visitor", 0),
    ("Other", 0),
];

#[derive(Debug, Clone, Copy)]
enum Kind {
    Int,
    Float,
    Month,
    VisitorType,
    Bool,
}

/// Feature columns in the order they appear in a `FeatureVector`.
const COLUMNS: [(&str, Kind); FEATURES] = [
    ("Administrative", Kind::Int),
    ("Administrative_Duration", Kind::Float),
    ("Informational", Kind::Int),
    ("Informational_Duration", Kind::Float),
    ("ProductRelated", Kind::Int),
    ("ProductRelated_Duration", Kind::Float),
    ("BounceRates", Kind::Float),
    ("ExitRates", Kind::Float),
    ("PageValues", Kind::Float),
    ("SpecialDay", Kind::Float),
    ("Month", Kind::Month),
    ("OperatingSystems", Kind::Int),
    ("Browser", Kind::Int),
    ("Region", Kind::Int),
    ("TrafficType", Kind::Int),
    ("VisitorType", Kind::VisitorType),
    ("Weekend", Kind::Bool),
];

const REVENUE: &str = "Revenue";

pub fn month_code(month: &str) -> Option<u8> {
    lookup(&MONTHS, month)
}

pub fn visitor_code(visitor: &str) -> Option<u8> {
    lookup(&VISITOR_TYPES, visitor)
}

fn lookup(table: &[(&str, u8)], literal: &str) -> Option<u8> {
    table
        .iter()
        .find(|(name, _)| *name == literal)
        .map(|&(_, code)| code)
}

/// Session feature vectors and their purchase labels, index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    evidence: Vec<FeatureVector>,
    labels: Vec<Label>,
}

impl Dataset {
    pub fn new(evidence: Vec<FeatureVector>, labels: Vec<Label>) -> Result<Self> {
        if evidence.len() != labels.len() {
            return Err(Error::LengthMismatch {
                expected: evidence.len(),
                found: labels.len(),
            });
        }

        Ok(Dataset { evidence, labels })
    }

    /// Reads and encodes every row of the CSV file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            "loaded {} sessions from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let positions = Self::locate_columns(&headers)?;
        let revenue = column_position(&headers, REVENUE)?;

        let mut evidence = Vec::new();
        let mut labels = Vec::new();

        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let row = i + 1;

            let mut vector = [0.0; FEATURES];
            for (slot, (&(column, kind), &pos)) in
                vector.iter_mut().zip(COLUMNS.iter().zip(positions.iter()))
            {
                *slot = encode(&record, row, column, kind, pos)?;
            }

            evidence.push(vector);
            labels.push(parse_bool(field(&record, revenue), row, REVENUE)?);
        }

        tracing::debug!(
            "encoded {} rows, {} positive",
            labels.len(),
            labels.iter().filter(|&&l| l == 1).count()
        );
        Self::new(evidence, labels)
    }

    fn locate_columns(headers: &StringRecord) -> Result<[usize; FEATURES]> {
        let mut positions = [0; FEATURES];
        for (pos, &(column, _)) in positions.iter_mut().zip(COLUMNS.iter()) {
            *pos = column_position(headers, column)?;
        }
        Ok(positions)
    }

    /// Rows at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Dataset {
            evidence: indices.iter().map(|&i| self.evidence[i]).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    pub fn evidence(&self) -> &[FeatureVector] {
        &self.evidence
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn column_position(headers: &StringRecord, column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(Error::Schema { column })
}

// Short records are rejected by the csv reader, so every position is present.
fn field(record: &StringRecord, pos: usize) -> &str {
    record.get(pos).unwrap_or("")
}

fn encode(
    record: &StringRecord,
    row: usize,
    column: &'static str,
    kind: Kind,
    pos: usize,
) -> Result<f64> {
    let value = field(record, pos);
    let unknown = || Error::UnknownCategory {
        row,
        column,
        value: value.to_string(),
    };

    match kind {
        Kind::Int => value
            .trim()
            .parse::<i64>()
            .map(|v| v as f64)
            .map_err(|_| parse_error(row, column, value)),
        Kind::Float => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| parse_error(row, column, value)),
        Kind::Month => month_code(value).map(f64::from).ok_or_else(unknown),
        Kind::VisitorType => visitor_code(value).map(f64::from).ok_or_else(unknown),
        Kind::Bool => parse_bool(value, row, column).map(f64::from),
    }
}

fn parse_bool(value: &str, row: usize, column: &'static str) -> Result<Label> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(1)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(0)
    } else {
        Err(parse_error(row, column, value))
    }
}

fn parse_error(row: usize, column: &'static str, value: &str) -> Error {
    Error::Parse {
        row,
        column,
        value: value.to_string(),
    }
}
