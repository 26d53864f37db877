//! Property-based tests for ED-PELT
//!
//! These check structural guarantees of the segmentation that hold for
//! every input, independent of what the data looks like.

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use robust_changepoint::*;
    use robust_core::Error;

    fn values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-100.0f64..100.0, 0..max_len)
    }

    /// Small-integer data with plenty of ties, widened to f64
    fn tied_values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-20i32..20, 3..max_len)
            .prop_map(|v| v.into_iter().map(f64::from).collect())
    }

    proptest! {
        // Property: positions are strictly increasing, interior, and leave
        // every segment at least `min_distance` long
        #[test]
        fn prop_changepoints_are_well_formed(
            data in values(150),
            min_distance in 1usize..6,
        ) {
            prop_assume!(data.len() >= min_distance);
            let detector = EdPeltDetector::new().with_min_distance(min_distance);

            match detector.detect_simple(&data) {
                Ok(result) => {
                    let n = data.len();
                    let cps = result.changepoints();
                    prop_assert!(cps.windows(2).all(|w| w[0] < w[1]));
                    prop_assert!(cps.iter().all(|&c| c > 0 && c < n));
                    for segment in result.segments() {
                        prop_assert!(segment.len() >= min_distance, "{:?} in {:?}", segment, cps);
                    }
                    prop_assert_eq!(result.sample_size(), n);
                }
                Err(Error::EmptyInput) => prop_assert!(data.is_empty()),
                Err(err) => prop_assert!(false, "unexpected error: {}", err),
            }
        }

        // Property: detection is a pure function of its input
        #[test]
        fn prop_detection_is_idempotent(data in values(120)) {
            prop_assume!(!data.is_empty());
            let detector = EdPeltDetector::new();
            let first = detector.detect_simple(&data).unwrap();
            let second = detector.detect_simple(&data).unwrap();
            prop_assert_eq!(first, second);
        }

        // Property: sequences of length one or two never contain a changepoint
        #[test]
        fn prop_short_sequences_are_unsegmented(data in prop::collection::vec(any::<f64>(), 1..=2)) {
            let result = EdPeltDetector::new().detect_simple(&data).unwrap();
            prop_assert!(!result.has_changepoints());
        }

        // Property: a constant sequence is a single segment
        #[test]
        fn prop_constant_sequence_is_unsegmented(value in -1e6f64..1e6, n in 1usize..300) {
            let result = EdPeltDetector::new().detect_simple(&vec![value; n]).unwrap();
            prop_assert!(!result.has_changepoints());
        }

        // Property: pruning never changes the segmentation
        #[test]
        fn prop_pruning_is_exact(data in tied_values(120), min_distance in 1usize..4) {
            let pruned = EdPeltDetector::new()
                .with_min_distance(min_distance)
                .detect_simple(&data)
                .unwrap();
            let exhaustive = EdPeltDetector::new()
                .with_min_distance(min_distance)
                .with_pruning(false)
                .detect_simple(&data)
                .unwrap();
            prop_assert_eq!(pruned.changepoints(), exhaustive.changepoints());
        }

        // Property: only the ordering of the observations matters, so a
        // strictly increasing transform leaves the segmentation unchanged
        #[test]
        fn prop_invariant_under_monotone_transform(data in tied_values(120)) {
            let transformed: Vec<f64> = data.iter().map(|&x| x * x * x + 5.0 * x).collect();
            let detector = EdPeltDetector::new();
            let plain = detector.detect_simple(&data).unwrap();
            let warped = detector.detect_simple(&transformed).unwrap();
            prop_assert_eq!(plain.changepoints(), warped.changepoints());
        }

        // Property: the nullable boundary agrees with the detector
        #[test]
        fn prop_nullable_matches_detector(data in values(80)) {
            let wrapped: Vec<Option<f64>> = data.iter().copied().map(Some).collect();
            let via_adapter = detect_nullable(Some(&wrapped[..])).unwrap();
            if data.is_empty() {
                prop_assert_eq!(via_adapter, None);
            } else {
                let direct = EdPeltDetector::new().detect_simple(&data).unwrap();
                prop_assert_eq!(via_adapter, Some(direct.into_changepoints()));
            }
        }
    }
}
