//! Rebuilding the output table after selection.
//!
//! Forced features that the strategy did not pick are put back in their
//! original relative order, and the target position is remapped so that the
//! target keeps its place relative to the surviving columns.
use crate::error::FeatureSelectionError;
use crate::table::{Table, TargetSelector};

/// Fail on the first forced feature name that `source` does not contain.
pub fn check_force_features(source: &Table, force: &[String]) -> Result<(), FeatureSelectionError> {
    match force.iter().find(|name| source.position_of(name).is_none()) {
        Some(name) => Err(FeatureSelectionError::MissingForcedFeature(name.clone())),
        None => Ok(()),
    }
}

/// Insert the forced features missing from `filtered`.
///
/// Each missing column is copied from `source` as opaque text, so its values
/// are written back unchanged, and inserted so that all columns stay in the
/// order they have in `source`.
///
/// # Arguments
///
/// * `filtered` - `source` restricted to the selected features.
/// * `source` - The table selection ran on.
/// * `force` - Names of the features to force.
pub fn add_force_features(
    filtered: &Table,
    source: &Table,
    force: &[String],
) -> Result<Table, FeatureSelectionError> {
    let mut missing: Vec<usize> = Vec::new();
    for name in force {
        if filtered.position_of(name).is_some() {
            continue;
        }
        let pos = source
            .position_of(name)
            .ok_or_else(|| FeatureSelectionError::MissingForcedFeature(name.clone()))?;
        if !missing.contains(&pos) {
            missing.push(pos);
        }
    }
    missing.sort_unstable();

    let selected: Vec<usize> = filtered
        .labels()
        .iter()
        .filter_map(|label| source.position_of(label))
        .collect();

    let mut table = filtered.clone();
    let mut next = 0;
    for (inserted, &pos) in missing.iter().enumerate() {
        while next < selected.len() && pos > selected[next] {
            next += 1;
        }
        log::debug!(
            "Inserting forced feature '{}' at column {}",
            source.input(pos).label,
            next + inserted
        );
        table.insert_input(next + inserted, source.input(pos).to_raw())?;
    }

    Ok(table)
}

/// Remap `target` given the file positions of the columns that remain.
///
/// `First` and `Last` are kept. An explicit index becomes the number of
/// remaining columns before it, turning into `First` or `Last` when it is
/// before or after all of them.
pub fn remap_target(target: TargetSelector, positions: &[usize]) -> TargetSelector {
    match target {
        TargetSelector::First | TargetSelector::Last => target,
        TargetSelector::Index(0) => TargetSelector::First,
        TargetSelector::Index(t) => {
            let before = positions.iter().filter(|&&p| p < t).count();
            if before == 0 {
                TargetSelector::First
            } else if before == positions.len() {
                TargetSelector::Last
            } else {
                TargetSelector::Index(before)
            }
        }
    }
}

/// Target position of `merged`, whose columns all come from `source`.
pub fn update_target_feature(merged: &Table, source: &Table) -> TargetSelector {
    let positions: Vec<usize> = merged
        .labels()
        .iter()
        .filter_map(|label| source.position_of(label))
        .map(|idx| source.file_position(idx))
        .collect();
    remap_target(source.target(), &positions)
}
