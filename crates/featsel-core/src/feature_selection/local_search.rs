//! Feature selection by hill climbing over the bitstring encoding.
use crate::config::SelectionParameters;
use crate::error::FeatureSelectionError;
use crate::instance::{FeatureSet, Instance};
use crate::optimization::{HillClimbing, HillClimbingParams};
use crate::scoring::{
    CompositeScore, CompositeScorer, ConfidentMutualInformation, InstanceScorer, ScorerCache,
};
use crate::table::Table;

/// Build the instance the search starts from.
///
/// Every named feature found in `table` gets its bit set; unknown names are
/// reported and skipped.
pub fn initial_instance(table: &Table, initial_features: &[String]) -> Instance {
    let mut instance = Instance::empty(table.arity());
    let mut valid = Vec::new();
    for name in initial_features {
        match table.position_of(name) {
            Some(idx) => {
                instance.set(idx, true);
                valid.push(name.as_str());
            }
            None => log::warn!(
                "{}",
                FeatureSelectionError::UnresolvedInitialFeature(name.clone())
            ),
        }
    }

    if valid.is_empty() {
        log::info!("The search will start with the empty feature set");
    } else {
        log::info!(
            "The search will start with the following feature set: {}",
            valid.join(",")
        );
    }
    instance
}

/// Select features with hill climbing, scoring candidates by
/// confidence-weighted mutual information.
pub fn hill_climbing_select_features(table: &Table, params: &SelectionParameters) -> FeatureSet {
    let init = initial_instance(table, &params.hc_initial_features);
    let ctable = table.compress();
    let scorer = CompositeScorer::new(ConfidentMutualInformation::new(&ctable, params.hc_confidence));
    let optimizer = HillClimbing::new(HillClimbingParams::from(params));

    if params.cache_size > 0 {
        let cached = ScorerCache::new(params.cache_size, scorer);
        let selected = optimize_features(&optimizer, &init, &cached, params.max_evals);
        log::info!("Number of cache failures = {}", cached.failure_count());
        selected
    } else {
        optimize_features(&optimizer, &init, &scorer, params.max_evals)
    }
}

fn optimize_features<S: InstanceScorer>(
    optimizer: &HillClimbing,
    init: &Instance,
    scorer: &S,
    max_evals: usize,
) -> FeatureSet {
    let outcome = optimizer.optimize(init, scorer, max_evals);
    let (best_instance, best_score) = outcome
        .best
        .unwrap_or_else(|| (init.clone(), CompositeScore::worst()));

    if best_score.is_worst() {
        log::info!("Selected feature set has composite score: Unknown");
    } else {
        log::info!("Selected feature set has composite score: {}", best_score);
    }
    log::info!("Total number of evaluations performed: {}", outcome.evals);
    log::info!(
        "Actual number of evaluations to reach the best feature set: {}",
        outcome.best_eval
    );

    best_instance.to_features()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn table() -> Table {
        Table::new(
            vec![
                Column::boolean("a", &[false, true, false, true, false, true, false, true]),
                Column::boolean("b", &[true, true, true, true, false, false, false, false]),
                Column::boolean("c", &[false, false, true, true, false, false, true, true]),
            ],
            Column::boolean("y", &[false, true, false, true, false, true, false, true]),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_instance_skips_unknown() {
        let init = initial_instance(&table(), &["c".to_string(), "nope".to_string()]);
        assert_eq!(init.width(), 3);
        assert_eq!(init.to_features(), [2].into_iter().collect());
    }

    #[test]
    fn test_finds_informative_feature() {
        let params = SelectionParameters {
            hc_confidence: 1.0,
            ..Default::default()
        };
        let selected = hill_climbing_select_features(&table(), &params);
        assert_eq!(selected, [0].into_iter().collect());

        let uncached = SelectionParameters {
            cache_size: 0,
            ..params
        };
        assert_eq!(hill_climbing_select_features(&table(), &uncached), selected);
    }

    #[test]
    fn test_zero_budget_falls_back_to_initial_instance() {
        let params = SelectionParameters {
            max_evals: 0,
            hc_initial_features: vec!["b".to_string()],
            ..Default::default()
        };
        let selected = hill_climbing_select_features(&table(), &params);
        assert_eq!(selected, [1].into_iter().collect());
    }
}
