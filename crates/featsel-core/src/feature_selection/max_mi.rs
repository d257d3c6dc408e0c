//! Greedy max mutual information selection.
use rayon::prelude::*;

use crate::config::SelectionParameters;
use crate::instance::FeatureSet;
use crate::scoring::{FeatureScorer, MutualInformation};
use crate::table::Table;

/// Select up to `params.target_size` features greedily by mutual information.
///
/// Returns every feature when no target size is set.
pub fn max_mi_select_features(table: &Table, params: &SelectionParameters) -> FeatureSet {
    let all_features = table.all_features();
    if params.target_size == 0 {
        log::info!("No target size set, keeping all features");
        return all_features;
    }

    let ctable = table.compress();
    let scorer = MutualInformation::new(&ctable);
    max_mi_selection(&all_features, &scorer, params.target_size, params.threshold)
}

/// Repeatedly add the feature that maximizes the score of the selection.
///
/// Ties go to the lowest feature index. Stops after `num_features` features,
/// when no candidate is left, or when the best gain drops below `threshold`.
pub fn max_mi_selection<S: FeatureScorer>(
    features: &FeatureSet,
    scorer: &S,
    num_features: usize,
    threshold: f64,
) -> FeatureSet {
    let mut selected = FeatureSet::new();
    let mut current = scorer.score(&selected);

    while selected.len() < num_features {
        let candidates: Vec<usize> = features.difference(&selected).copied().collect();
        let scored: Vec<(usize, f64)> = candidates
            .par_iter()
            .map(|&f| {
                let mut joint = selected.clone();
                joint.insert(f);
                (f, scorer.score(&joint))
            })
            .collect();

        let Some((best_feature, best_score)) = scored
            .into_iter()
            .fold(None, |acc: Option<(usize, f64)>, (f, s)| match acc {
                Some((_, best)) if best >= s => acc,
                _ => Some((f, s)),
            })
        else {
            break;
        };

        let gain = best_score - current;
        if gain < threshold {
            log::debug!(
                "Best gain {} of feature {} is below threshold {}",
                gain,
                best_feature,
                threshold
            );
            break;
        }

        log::trace!("Adding feature {} with score {}", best_feature, best_score);
        selected.insert(best_feature);
        current = best_score;
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Weights(Vec<f64>);

    impl FeatureScorer for Weights {
        fn score(&self, features: &FeatureSet) -> f64 {
            features.iter().map(|&f| self.0[f]).sum()
        }
    }

    #[test]
    fn test_picks_highest_scores() {
        let scorer = Weights(vec![0.2, 0.0, 0.9, 0.5]);
        let all: FeatureSet = (0..4).collect();
        assert_eq!(max_mi_selection(&all, &scorer, 2, 0.0), [2, 3].into_iter().collect());
        assert_eq!(max_mi_selection(&all, &scorer, 10, 0.0).len(), 4);
    }

    #[test]
    fn test_threshold_stops_early() {
        let scorer = Weights(vec![0.2, 0.0, 0.9, 0.5]);
        let all: FeatureSet = (0..4).collect();
        assert_eq!(max_mi_selection(&all, &scorer, 4, 0.3), [2, 3].into_iter().collect());
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let scorer = Weights(vec![0.5, 0.5, 0.5]);
        let all: FeatureSet = (0..3).collect();
        assert_eq!(max_mi_selection(&all, &scorer, 1, 0.0), [0].into_iter().collect());
    }
}
