use std::path::Path;

use anyhow::{Context, Result};

use featsel_core::config::SelectionParameters;
use featsel_core::feature_selection::{feature_selection, SelectionOutcome};
use featsel_core::io::{read_table, write_table, TableReaderConfig};

use crate::config::validate_tsv_or_csv_file;

/// Read `input`, select its features and write the resulting table to
/// `output`, or stdout.
pub fn run_selection(
    input: &Path,
    output: Option<&Path>,
    params: &SelectionParameters,
) -> Result<SelectionOutcome> {
    validate_tsv_or_csv_file(input)?;
    if let Some(output) = output {
        validate_tsv_or_csv_file(output)?;
    }

    let table = read_table(input, &TableReaderConfig::from(params))?;
    log::info!(
        "Read {} rows and {} features from {:?}",
        table.n_rows(),
        table.arity(),
        input
    );

    let outcome = feature_selection(&table, params).context("Feature selection failed")?;
    write_table(&outcome.table, outcome.table.target(), output)?;
    Ok(outcome)
}
