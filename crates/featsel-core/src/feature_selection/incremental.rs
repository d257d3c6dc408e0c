//! Incremental selection by mutual-information gain.
//!
//! Features (or groups of up to `interaction_terms` features considered
//! jointly) are added to the selection when their gain in mutual information
//! over what is already selected exceeds a threshold. The adaptive variant
//! searches the threshold that yields a requested number of features.
use rayon::prelude::*;

use crate::config::SelectionParameters;
use crate::instance::{for_each_combination, FeatureSet};
use crate::scoring::{FeatureScorer, FeatureSetCache, MutualInformation};
use crate::stats::output_entropy;
use crate::table::Table;

/// Select features incrementally.
///
/// Returns every feature when neither a threshold nor a target size is set.
pub fn incremental_select_features(table: &Table, params: &SelectionParameters) -> FeatureSet {
    let all_features = table.all_features();
    if params.threshold <= 0.0 && params.target_size == 0 {
        log::info!("Neither threshold nor target size is set, keeping all features");
        return all_features;
    }

    let ctable = table.compress();
    let max_threshold = output_entropy(&ctable);
    let scorer = MutualInformation::new(&ctable);

    if params.cache_size > 0 {
        let cached = FeatureSetCache::new(params.cache_size, scorer);
        let selected = run_selection(&all_features, &cached, params, max_threshold);
        log::debug!("Number of cache failures = {}", cached.failure_count());
        selected
    } else {
        run_selection(&all_features, &scorer, params, max_threshold)
    }
}

fn run_selection<S: FeatureScorer>(
    features: &FeatureSet,
    scorer: &S,
    params: &SelectionParameters,
    max_threshold: f64,
) -> FeatureSet {
    if params.target_size > 0 {
        adaptive_incremental_selection(
            features,
            scorer,
            params.target_size,
            params.inc_interaction_terms,
            params.inc_red_intensity,
            (0.0, max_threshold),
            params.inc_target_size_epsilon,
        )
    } else {
        incremental_selection(
            features,
            scorer,
            params.threshold,
            params.inc_interaction_terms,
            params.inc_red_intensity,
        )
    }
}

/// Select every feature group whose gain exceeds `threshold`.
///
/// # Arguments
///
/// * `features` - Candidate features.
/// * `scorer` - Mutual information of a feature set.
/// * `threshold` - Minimum gain for a group to be kept.
/// * `interaction_terms` - Largest group size; groups of size `k` are tested
///   after all groups of size `k - 1` have been added.
/// * `redundancy_intensity` - When positive, a selected feature whose removal
///   loses less than `redundancy_intensity * threshold` is dropped.
///
/// # Returns
///
/// The selected features.
pub fn incremental_selection<S: FeatureScorer>(
    features: &FeatureSet,
    scorer: &S,
    threshold: f64,
    interaction_terms: usize,
    redundancy_intensity: f64,
) -> FeatureSet {
    let mut selected = FeatureSet::new();

    for order in 1..=interaction_terms.max(1) {
        let candidates: Vec<usize> = features.difference(&selected).copied().collect();
        if candidates.len() < order {
            break;
        }

        let base = scorer.score(&selected);
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for_each_combination(candidates.len(), order, |combo| {
            groups.push(combo.iter().map(|&i| candidates[i]).collect());
        });

        let relevant: Vec<Vec<usize>> = groups
            .into_par_iter()
            .filter(|group| {
                let mut joint = selected.clone();
                joint.extend(group.iter().copied());
                scorer.score(&joint) - base > threshold
            })
            .collect();

        let before = selected.len();
        selected.extend(relevant.into_iter().flatten());
        log::trace!(
            "Interaction order {}: {} features added at threshold {}",
            order,
            selected.len() - before,
            threshold
        );

        if redundancy_intensity > 0.0 {
            remove_redundant(&mut selected, scorer, redundancy_intensity * threshold);
        }
    }

    selected
}

fn remove_redundant<S: FeatureScorer>(selected: &mut FeatureSet, scorer: &S, min_loss: f64) {
    let mut current = scorer.score(selected);
    let candidates: Vec<usize> = selected.iter().copied().collect();
    for feature in candidates {
        let mut without = selected.clone();
        without.remove(&feature);
        let score = scorer.score(&without);
        if current - score < min_loss {
            log::trace!("Feature {} is redundant", feature);
            *selected = without;
            current = score;
        }
    }
}

/// Search the threshold of `incremental_selection` that yields `target_size`
/// features.
///
/// The threshold is bisected within `bounds`: too few features lowers it, too
/// many raises it. The search stops on an exact hit or once the interval is
/// narrower than `epsilon`, returning the last selection.
pub fn adaptive_incremental_selection<S: FeatureScorer>(
    features: &FeatureSet,
    scorer: &S,
    target_size: usize,
    interaction_terms: usize,
    redundancy_intensity: f64,
    bounds: (f64, f64),
    epsilon: f64,
) -> FeatureSet {
    let (mut low, mut high) = bounds;
    loop {
        let mid = (low + high) / 2.0;
        let selected =
            incremental_selection(features, scorer, mid, interaction_terms, redundancy_intensity);
        log::debug!(
            "Threshold {} in [{}, {}] selects {} features",
            mid,
            low,
            high,
            selected.len()
        );

        if selected.len() == target_size || high - low <= epsilon || mid <= low || mid >= high {
            return selected;
        }
        if selected.len() < target_size {
            high = mid;
        } else {
            low = mid;
        }
    }
}
