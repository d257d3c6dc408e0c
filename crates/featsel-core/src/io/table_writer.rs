//! Delimited table writer.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::table::{Table, TargetSelector};

/// Write `table` with its output column placed according to `target`.
///
/// Writes to `path` (TSV when the extension says so, CSV otherwise), or CSV to
/// stdout when no path is given.
pub fn write_table(table: &Table, target: TargetSelector, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            write_table_to(table, target, BufWriter::new(file), super::delimiter_for(path))
                .with_context(|| format!("Failed to write table to {:?}", path))
        }
        None => write_table_to(table, target, io::stdout().lock(), b','),
    }
}

/// Write `table` to any writer using the given delimiter.
pub fn write_table_to<W: Write>(
    table: &Table,
    target: TargetSelector,
    writer: W,
    delimiter: u8,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    let arity = table.arity();
    let target_pos = match target {
        TargetSelector::First => 0,
        TargetSelector::Last => arity,
        TargetSelector::Index(i) => i.min(arity),
    };

    let mut header: Vec<&str> = table.labels();
    header.insert(target_pos, &table.output().label);
    writer.write_record(&header)?;

    for row in 0..table.n_rows() {
        let mut record: Vec<String> = table
            .inputs()
            .iter()
            .map(|column| column.values[row].to_string())
            .collect();
        record.insert(target_pos, table.output().values[row].to_string());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
