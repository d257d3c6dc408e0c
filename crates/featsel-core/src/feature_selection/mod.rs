//! Feature selection strategies and the end-to-end selection run.
//!
//! Three strategies are available, chosen by `Algorithm`: hill climbing over
//! bitstring-encoded feature sets (`local_search`), incremental selection by
//! mutual-information gain (`incremental`) and greedy max mutual information
//! (`max_mi`). `feature_selection` runs one of them and rebuilds the output
//! table with forced features and the target column repositioned.
pub mod incremental;
pub mod local_search;
pub mod max_mi;

use crate::config::{Algorithm, SelectionParameters};
use crate::error::FeatureSelectionError;
use crate::instance::FeatureSet;
use crate::reconstruction::{add_force_features, check_force_features, update_target_feature};
use crate::table::Table;

pub use incremental::incremental_select_features;
pub use local_search::hill_climbing_select_features;
pub use max_mi::max_mi_select_features;

/// Output of a complete selection run.
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    /// Features chosen by the strategy, as indices of the input table.
    pub selected: FeatureSet,
    /// Selected and forced columns plus the output, with the target
    /// position remapped to the new column layout.
    pub table: Table,
}

/// Run the strategy named in `params` and return the selected features.
pub fn select_features(table: &Table, params: &SelectionParameters) -> FeatureSet {
    log::debug!(
        "Selecting features with algorithm '{}' among {} columns",
        params.algorithm,
        table.arity()
    );
    match params.algorithm {
        Algorithm::HillClimbing => hill_climbing_select_features(table, params),
        Algorithm::Incremental => incremental_select_features(table, params),
        Algorithm::MaxMi => max_mi_select_features(table, params),
    }
}

/// Select features and build the output table.
///
/// Forced feature names are checked before any scoring happens. An empty
/// selection is an error, the table is never reconstructed in that case.
pub fn feature_selection(
    table: &Table,
    params: &SelectionParameters,
) -> Result<SelectionOutcome, FeatureSelectionError> {
    check_force_features(table, &params.force_features)?;

    let selected = select_features(table, params);
    if selected.is_empty() {
        return Err(FeatureSelectionError::EmptySelection);
    }

    let ftable = table.filter(&selected);
    log_selected_features(table.arity(), &ftable);

    let merged = add_force_features(&ftable, table, &params.force_features)?;
    let target = update_target_feature(&merged, table);
    Ok(SelectionOutcome {
        selected,
        table: merged.with_target(target),
    })
}

fn log_selected_features(old_arity: usize, ftable: &Table) {
    log::info!("{} out of {} have been selected", ftable.arity(), old_arity);
    log::info!(
        "The following features have been selected: {}",
        ftable.labels().join(",")
    );
}
