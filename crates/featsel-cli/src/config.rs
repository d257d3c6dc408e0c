use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use featsel_core::config::{Algorithm, SelectionParameters};
use featsel_core::table::TargetSelector;

/// Load selection parameters from a JSON file.
///
/// Missing fields take their default value.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<SelectionParameters> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let params: SelectionParameters = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(params)
}

/// Build the parameters of a run from the optional JSON config, then apply
/// the command line overrides.
pub fn parameters_from_arguments(matches: &ArgMatches) -> Result<SelectionParameters> {
    let mut params = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("Using config: {:?}", config_path);
            load_parameters(config_path)?
        }
        None => {
            log::debug!("No config provided; using defaults.");
            SelectionParameters::default()
        }
    };

    if let Some(algorithm) = matches.get_one::<String>("algorithm") {
        params.algorithm = Algorithm::from_str(algorithm)?;
    }
    if let Some(&target_size) = matches.get_one::<usize>("target_size") {
        params.target_size = target_size;
    }
    if let Some(&threshold) = matches.get_one::<f64>("threshold") {
        params.threshold = threshold;
    }
    if let Some(target) = matches.get_one::<String>("target") {
        params.target = TargetSelector::from_str(target).map_err(anyhow::Error::msg)?;
    }
    if let Some(force) = matches.get_many::<String>("force_features") {
        params.force_features = force.cloned().collect();
    }
    if let Some(ignore) = matches.get_many::<String>("ignore_features") {
        params.ignore_features = ignore.cloned().collect();
    }
    if let Some(&max_evals) = matches.get_one::<usize>("max_evals") {
        params.max_evals = max_evals;
    }
    if let Some(&jobs) = matches.get_one::<usize>("jobs") {
        params.jobs = jobs;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        params.seed = seed;
    }

    Ok(params)
}

/// Check that `path` names a CSV or TSV file.
pub fn validate_tsv_or_csv_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("csv") => Ok(()),
        _ => anyhow::bail!("File must have a .tsv or .csv extension: {:?}", path),
    }
}
