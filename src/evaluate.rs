use std::fmt;

use crate::data::Label;
use crate::error::{Class, Error, Result};

/// True positive and true negative rates over a test set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub sensitivity: f64,
    pub specificity: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Counts {
    positives: usize,
    true_positives: usize,
    negatives: usize,
    true_negatives: usize,
}

impl Counts {
    fn update(&mut self, actual: Label, predicted: Label) {
        if actual == 1 {
            self.positives += 1;
            if predicted == 1 {
                self.true_positives += 1;
            }
        } else {
            self.negatives += 1;
            if predicted == 0 {
                self.true_negatives += 1;
            }
        }
    }
}

/// Compares actual against predicted labels.
///
/// Fails with `UndefinedMetric` when the actual labels contain no positives
/// or no negatives, since the matching rate would divide by zero.
pub fn evaluate(labels: &[Label], predictions: &[Label]) -> Result<Evaluation> {
    if labels.len() != predictions.len() {
        return Err(Error::LengthMismatch {
            expected: labels.len(),
            found: predictions.len(),
        });
    }

    let mut counts = Counts::default();
    for (&actual, &predicted) in labels.iter().zip(predictions) {
        counts.update(actual, predicted);
    }
    tracing::debug!("{:?}", counts);

    if counts.positives == 0 {
        return Err(Error::UndefinedMetric(Class::Positive));
    }
    if counts.negatives == 0 {
        return Err(Error::UndefinedMetric(Class::Negative));
    }

    Ok(Evaluation {
        sensitivity: counts.true_positives as f64 / counts.positives as f64,
        specificity: counts.true_negatives as f64 / counts.negatives as f64,
    })
}

/// Outcome of one train/test run, printed as four lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub correct: usize,
    pub incorrect: usize,
    pub evaluation: Evaluation,
}

impl Report {
    pub fn new(labels: &[Label], predictions: &[Label]) -> Result<Self> {
        let evaluation = evaluate(labels, predictions)?;
        let correct = labels
            .iter()
            .zip(predictions)
            .filter(|(actual, predicted)| actual == predicted)
            .count();

        Ok(Report {
            correct,
            incorrect: labels.len() - correct,
            evaluation,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Correct: {}\nIncorrect: {}\nTrue Positive Rate: {:.2}%\nTrue Negative Rate: {:.2}%",
            self.correct,
            self.incorrect,
            100.0 * self.evaluation.sensitivity,
            100.0 * self.evaluation.specificity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_right_each_way() {
        let e = evaluate(&[1, 1, 0, 0], &[1, 0, 0, 1]).unwrap();
        assert_eq!(e.sensitivity, 0.5);
        assert_eq!(e.specificity, 0.5);
    }

    #[test]
    fn perfect_predictions() {
        let e = evaluate(&[0, 1, 0, 1, 1], &[0, 1, 0, 1, 1]).unwrap();
        assert_eq!(e.sensitivity, 1.0);
        assert_eq!(e.specificity, 1.0);
    }

    #[test]
    fn rates_are_independent() {
        let e = evaluate(&[1, 1, 1, 1, 0, 0], &[1, 1, 1, 0, 1, 1]).unwrap();
        assert_eq!(e.sensitivity, 0.75);
        assert_eq!(e.specificity, 0.0);
    }

    #[test]
    fn no_negatives_is_undefined() {
        assert!(matches!(
            evaluate(&[1, 1, 1], &[1, 1, 1]),
            Err(Error::UndefinedMetric(Class::Negative))
        ));
    }

    #[test]
    fn no_positives_is_undefined() {
        assert!(matches!(
            evaluate(&[0, 0], &[1, 0]),
            Err(Error::UndefinedMetric(Class::Positive))
        ));
        assert!(matches!(
            evaluate(&[], &[]),
            Err(Error::UndefinedMetric(Class::Positive))
        ));
    }

    #[test]
    fn length_mismatch() {
        assert!(matches!(
            evaluate(&[1, 0], &[1]),
            Err(Error::LengthMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn report_counts_and_format() {
        let report = Report::new(&[1, 1, 1, 0, 0, 0], &[1, 1, 0, 0, 0, 1]).unwrap();
        assert_eq!(report.correct, 4);
        assert_eq!(report.incorrect, 2);
        assert_eq!(
            report.to_string(),
            "Correct: 4\nIncorrect: 2\nTrue Positive Rate: 66.67%\nTrue Negative Rate: 66.67%"
        );
    }
}
