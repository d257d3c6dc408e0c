//! Delimited table reader.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::SelectionParameters;
use crate::table::value::parse_bool;
use crate::table::{Column, ColumnType, Table, TargetSelector, Value};

/// Configuration for reading a table file.
#[derive(Debug, Clone, Default)]
pub struct TableReaderConfig {
    /// Which file column holds the target.
    pub target: TargetSelector,
    /// Columns dropped while reading.
    pub ignore_features: Vec<String>,
}

impl From<&SelectionParameters> for TableReaderConfig {
    fn from(params: &SelectionParameters) -> Self {
        TableReaderConfig {
            target: params.target,
            ignore_features: params.ignore_features.clone(),
        }
    }
}

/// Read a CSV, or TSV when the extension says so, into a `Table`.
///
/// The header row gives the column labels. Each column is typed from its
/// values: `Boolean` when all are `0/1/true/false`, `Contin` when all parse as
/// reals, `Enum` otherwise.
pub fn read_table<P: AsRef<Path>>(path: P, config: &TableReaderConfig) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    read_table_from(BufReader::new(file), config, super::delimiter_for(path))
        .with_context(|| format!("Failed to read table from {:?}", path))
}

/// Read a table from any reader using the given delimiter.
pub fn read_table_from<R: Read>(
    reader: R,
    config: &TableReaderConfig,
    delimiter: u8,
) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read header row")?.clone();
    if headers.is_empty() {
        bail!("Missing header row");
    }

    let target_idx = resolve_target(&headers, config.target)?;
    let ignored = resolve_ignored(&headers, &config.ignore_features, target_idx)?;

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row_idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        for (col, field) in record.iter().enumerate() {
            cells[col].push(field.to_string());
        }
    }

    let mut inputs = Vec::with_capacity(headers.len() - 1 - ignored.len());
    let mut output = None;
    for (idx, (label, texts)) in headers.iter().zip(cells).enumerate() {
        if ignored.contains(&idx) {
            continue;
        }
        let column = build_column(label, &texts)?;
        if idx == target_idx {
            output = Some(column);
        } else {
            inputs.push(column);
        }
    }
    let output = output.ok_or_else(|| anyhow!("Missing target column"))?;

    let target = match config.target {
        TargetSelector::Index(t) => {
            let shift = ignored.iter().filter(|&&i| i < t).count();
            TargetSelector::Index(t - shift)
        }
        other => other,
    };

    log::debug!(
        "Read {} rows with {} input columns, target '{}'",
        output.len(),
        inputs.len(),
        output.label
    );
    if !ignored.is_empty() {
        log::info!("Ignored {} columns", ignored.len());
    }

    Ok(Table::new(inputs, output)?.with_target(target))
}

fn resolve_target(headers: &StringRecord, target: TargetSelector) -> Result<usize> {
    match target {
        TargetSelector::First => Ok(0),
        TargetSelector::Last => Ok(headers.len() - 1),
        TargetSelector::Index(t) if t < headers.len() => Ok(t),
        TargetSelector::Index(t) => bail!(
            "Target column index {} is out of range for {} columns",
            t,
            headers.len()
        ),
    }
}

fn resolve_ignored(
    headers: &StringRecord,
    names: &[String],
    target_idx: usize,
) -> Result<HashSet<usize>> {
    let mut ignored = HashSet::new();
    for name in names {
        match headers.iter().position(|h| h == name) {
            Some(idx) if idx == target_idx => bail!("Cannot ignore the target column '{}'", name),
            Some(idx) => {
                ignored.insert(idx);
            }
            None => log::warn!("Ignored feature '{}' is not in the table", name),
        }
    }
    Ok(ignored)
}

fn infer_type(texts: &[String]) -> ColumnType {
    if texts.iter().all(|t| parse_bool(t).is_some()) {
        ColumnType::Boolean
    } else if texts.iter().all(|t| t.parse::<f64>().is_ok()) {
        ColumnType::Contin
    } else {
        ColumnType::Enum
    }
}

fn build_column(label: &str, texts: &[String]) -> Result<Column> {
    let kind = infer_type(texts);
    let values = texts
        .iter()
        .map(|t| Value::parse(kind, t))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| anyhow!("Invalid value in column '{}'", label))?;
    Ok(Column::new(label, kind, values).with_source(texts.to_vec()))
}
