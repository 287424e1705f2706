//! Property-based tests for classification and transition detection
//!
//! Verifies the detector's invariants over arbitrary mean-intensity
//! sequences using proptest for input generation and shrinking.

use camprobe::{Classification, TransitionDetector};
use proptest::prelude::*;

proptest! {
    /// INVARIANT: classification is Black exactly when mean < threshold
    #[test]
    fn classification_matches_strict_threshold(
        mean in 0.0f64..255.0,
        threshold in 0.0f64..255.0,
    ) {
        let classification = Classification::from_mean(mean, threshold);
        prop_assert_eq!(classification.is_black(), mean < threshold);
    }

    /// INVARIANT: a report is emitted iff the classification changed from
    /// the previous frame's, starting from the initial black state
    #[test]
    fn reports_emitted_exactly_on_classification_change(
        means in prop::collection::vec(0.0f64..255.0, 1..200),
    ) {
        let threshold = 60.0;
        let mut detector = TransitionDetector::new(threshold, 0.0);
        let mut previous = Classification::Black;

        for (i, &mean) in means.iter().enumerate() {
            let sequence = (i + 1) as u64;
            let current = Classification::from_mean(mean, threshold);
            let report = detector.observe(mean, sequence as f64 * 0.033, sequence);

            prop_assert_eq!(report.is_some(), current != previous);
            if let Some(transition) = report {
                prop_assert_eq!(transition.state, current);
            }
            previous = current;
        }
    }

    /// INVARIANT: elapsed frames are positive and elapsed seconds
    /// non-negative for every report under a non-decreasing clock
    #[test]
    fn elapsed_values_are_well_formed(
        means in prop::collection::vec(0.0f64..255.0, 1..200),
        step in 0.001f64..0.2,
    ) {
        let mut detector = TransitionDetector::new(60.0, 0.0);

        for (i, &mean) in means.iter().enumerate() {
            let sequence = (i + 1) as u64;
            if let Some(transition) = detector.observe(mean, sequence as f64 * step, sequence) {
                prop_assert!(transition.elapsed_frames >= 1);
                prop_assert!(transition.elapsed_seconds >= 0.0);
            }
        }
    }

    /// INVARIANT: flip-to-flip frame deltas sum to the sequence number of
    /// the last flip
    #[test]
    fn frame_deltas_partition_the_sequence(
        means in prop::collection::vec(0.0f64..255.0, 1..200),
    ) {
        let mut detector = TransitionDetector::new(60.0, 0.0);
        let mut delta_sum = 0u64;
        let mut last_flip_sequence = 0u64;

        for (i, &mean) in means.iter().enumerate() {
            let sequence = (i + 1) as u64;
            if let Some(transition) = detector.observe(mean, sequence as f64, sequence) {
                delta_sum += transition.elapsed_frames;
                last_flip_sequence = sequence;
            }
        }

        prop_assert_eq!(delta_sum, last_flip_sequence);
    }
}
