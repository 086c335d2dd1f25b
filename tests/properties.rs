use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shopping::data::FEATURES;
use shopping::{evaluate, train_test_split, Dataset, Error, NearestNeighbor};

/// Rows whose first feature is their index, with arbitrary labels.
fn numbered(labels: Vec<u8>) -> Dataset {
    let evidence = (0..labels.len())
        .map(|i| {
            let mut v = [0.0; FEATURES];
            v[0] = i as f64;
            v
        })
        .collect();
    Dataset::new(evidence, labels).unwrap()
}

fn ids(dataset: &Dataset) -> Vec<usize> {
    dataset.evidence().iter().map(|v| v[0] as usize).collect()
}

fn label_pair(len: std::ops::Range<usize>) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    len.prop_flat_map(|l| (vec(0..2u8, l), vec(0..2u8, l)))
}

proptest! {
    #[test]
    fn split_is_a_partition(
        labels in vec(0..2u8, 0..200),
        test_size in 0.0..=1.0f64,
        seed in any::<u64>(),
    ) {
        let data = numbered(labels);
        let total = data.len();
        let (train, test) =
            train_test_split(&data, test_size, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(train.len() + test.len(), total);
        prop_assert_eq!(test.len(), ((total as f64) * test_size).round() as usize);

        let mut all = ids(&train);
        all.extend(ids(&test));
        all.sort_unstable();
        prop_assert_eq!(all, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn rates_are_bounded((labels, predictions) in label_pair(0..100)) {
        match evaluate(&labels, &predictions) {
            Ok(e) => {
                prop_assert!((0.0..=1.0).contains(&e.sensitivity));
                prop_assert!((0.0..=1.0).contains(&e.specificity));
            }
            Err(Error::UndefinedMetric(_)) => {
                prop_assert!(labels.iter().all(|&l| l == 1) || labels.iter().all(|&l| l == 0));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn training_rows_predict_their_own_label(labels in vec(0..2u8, 1..50)) {
        let data = numbered(labels);
        let model = NearestNeighbor::fit(&data).unwrap();
        prop_assert_eq!(model.predict(data.evidence()), data.labels().to_vec());
    }
}
