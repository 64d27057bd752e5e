//! RAG classification rules.

use crate::domain::foundation::{RagStatus, RagThresholds};

/// Share of red indicators at which a key result turns red.
const RED_MAJORITY: f64 = 0.5;

/// Share of red indicators at which a key result turns amber.
const RED_WARNING: f64 = 0.3;

/// Share of amber indicators at which a key result turns amber.
const AMBER_MAJORITY: f64 = 0.5;

/// Classifies a progress percentage against a threshold table.
///
/// `None` means "no measured data" and maps to [`RagStatus::NotSet`];
/// it is never folded into the red band.
pub fn progress_to_rag(percentage: Option<f64>, thresholds: &RagThresholds) -> RagStatus {
    let value = match percentage {
        Some(value) => value,
        None => return RagStatus::NotSet,
    };

    if value >= thresholds.green_min {
        RagStatus::Green
    } else if value >= thresholds.amber_min {
        RagStatus::Amber
    } else {
        RagStatus::Red
    }
}

/// Classifies a progress percentage with the default threshold table.
pub fn score_to_rag(percentage: Option<f64>) -> RagStatus {
    progress_to_rag(percentage, &RagThresholds::default())
}

/// Classifies a key result from the proportion of its indicators'
/// statuses rather than from the blended percentage.
///
/// Red when at least half of the classified indicators are red; amber
/// when at least 30% are red or at least half are amber; green
/// otherwise. Unclassified (`NotSet`) indicators are excluded from the
/// proportions; if nothing is classified the result is `NotSet`.
pub fn classify_indicator_mix(statuses: &[RagStatus]) -> RagStatus {
    let scored: Vec<RagStatus> = statuses.iter().copied().filter(|s| s.is_scored()).collect();
    if scored.is_empty() {
        return RagStatus::NotSet;
    }

    let total = scored.len() as f64;
    let red = scored.iter().filter(|s| **s == RagStatus::Red).count() as f64 / total;
    let amber = scored.iter().filter(|s| **s == RagStatus::Amber).count() as f64 / total;

    if red >= RED_MAJORITY {
        RagStatus::Red
    } else if red >= RED_WARNING || amber >= AMBER_MAJORITY {
        RagStatus::Amber
    } else {
        RagStatus::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_band_edges() {
        assert_eq!(score_to_rag(Some(76.0)), RagStatus::Green);
        assert_eq!(score_to_rag(Some(75.0)), RagStatus::Amber);
        assert_eq!(score_to_rag(Some(51.0)), RagStatus::Amber);
        assert_eq!(score_to_rag(Some(50.0)), RagStatus::Red);
        assert_eq!(score_to_rag(Some(0.0)), RagStatus::Red);
    }

    #[test]
    fn missing_data_is_not_set() {
        assert_eq!(score_to_rag(None), RagStatus::NotSet);
    }

    #[test]
    fn overshoot_is_green() {
        assert_eq!(score_to_rag(Some(140.0)), RagStatus::Green);
    }

    #[test]
    fn custom_thresholds_shift_the_bands() {
        let strict = RagThresholds::try_new(90.0, 70.0).unwrap();
        assert_eq!(progress_to_rag(Some(85.0), &strict), RagStatus::Amber);
        assert_eq!(progress_to_rag(Some(90.0), &strict), RagStatus::Green);
        assert_eq!(progress_to_rag(Some(69.9), &strict), RagStatus::Red);
    }

    #[test]
    fn indicator_mix_red_majority_is_red() {
        // 2 red of 3 classified = 67% red.
        let statuses = [RagStatus::Red, RagStatus::Red, RagStatus::Green];
        assert_eq!(classify_indicator_mix(&statuses), RagStatus::Red);
    }

    #[test]
    fn indicator_mix_below_both_warnings_is_green() {
        // 1 red + 1 amber of 4 = 25% red, 25% amber; neither threshold met.
        let statuses = [
            RagStatus::Red,
            RagStatus::Amber,
            RagStatus::Green,
            RagStatus::Green,
        ];
        assert_eq!(classify_indicator_mix(&statuses), RagStatus::Green);
    }

    #[test]
    fn indicator_mix_red_warning_is_amber() {
        // 1 red of 3 = 33% red.
        let statuses = [RagStatus::Red, RagStatus::Green, RagStatus::Green];
        assert_eq!(classify_indicator_mix(&statuses), RagStatus::Amber);
    }

    #[test]
    fn indicator_mix_amber_majority_is_amber() {
        let statuses = [RagStatus::Amber, RagStatus::Amber, RagStatus::Green, RagStatus::Green];
        assert_eq!(classify_indicator_mix(&statuses), RagStatus::Amber);
    }

    #[test]
    fn indicator_mix_excludes_not_set_from_proportions() {
        // 1 red of 2 classified = 50% red, even with two unclassified.
        let statuses = [
            RagStatus::Red,
            RagStatus::Green,
            RagStatus::NotSet,
            RagStatus::NotSet,
        ];
        assert_eq!(classify_indicator_mix(&statuses), RagStatus::Red);
    }

    #[test]
    fn indicator_mix_all_not_set_is_not_set() {
        let statuses = [RagStatus::NotSet, RagStatus::NotSet];
        assert_eq!(classify_indicator_mix(&statuses), RagStatus::NotSet);
    }

    #[test]
    fn indicator_mix_empty_is_not_set() {
        assert_eq!(classify_indicator_mix(&[]), RagStatus::NotSet);
    }

    #[test]
    fn the_two_modes_can_disagree() {
        // One far-behind indicator among strong performers: the blended
        // percentage lands green while the mix rule flags amber. Both
        // answers are correct for their respective views.
        let progresses = [100.0, 100.0, 45.0];
        let blended: f64 = progresses.iter().sum::<f64>() / progresses.len() as f64;
        assert_eq!(score_to_rag(Some(blended)), RagStatus::Green);

        let statuses: Vec<RagStatus> =
            progresses.iter().map(|p| score_to_rag(Some(*p))).collect();
        assert_eq!(classify_indicator_mix(&statuses), RagStatus::Amber);
    }

    proptest! {
        /// Classification must be total over finite floats.
        #[test]
        fn progress_to_rag_never_panics(value in proptest::num::f64::NORMAL) {
            let _ = score_to_rag(Some(value));
        }

        /// A classified value always lands in exactly one band.
        #[test]
        fn classified_value_is_scored(value in 0.0f64..200.0) {
            prop_assert!(score_to_rag(Some(value)).is_scored());
        }
    }
}
