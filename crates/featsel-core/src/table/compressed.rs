use std::collections::HashMap;

use crate::table::{Table, Value};

/// One distinct input row with the histogram of output values observed for it.
#[derive(Debug, Clone)]
pub struct CompressedRow {
    pub inputs: Vec<Value>,
    pub outputs: HashMap<Value, usize>,
}

impl CompressedRow {
    /// Number of original rows folded into this one.
    pub fn count(&self) -> usize {
        self.outputs.values().sum()
    }
}

/// Read-only view of a table where identical input rows are grouped.
#[derive(Debug, Clone)]
pub struct CompressedTable {
    labels: Vec<String>,
    rows: Vec<CompressedRow>,
    uncompressed_len: usize,
}

impl CompressedTable {
    pub fn from_table(table: &Table) -> Self {
        let mut index: HashMap<Vec<Value>, usize> = HashMap::new();
        let mut rows: Vec<CompressedRow> = Vec::new();

        for (row, output) in table.output().values.iter().enumerate() {
            let key: Vec<Value> = table
                .inputs()
                .iter()
                .map(|c| c.values[row].clone())
                .collect();
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                rows.push(CompressedRow {
                    inputs: key,
                    outputs: HashMap::new(),
                });
                rows.len() - 1
            });
            *rows[slot].outputs.entry(output.clone()).or_default() += 1;
        }

        log::trace!(
            "Compressed {} rows into {} distinct input rows",
            table.n_rows(),
            rows.len()
        );

        CompressedTable {
            labels: table.labels().into_iter().map(String::from).collect(),
            rows,
            uncompressed_len: table.n_rows(),
        }
    }

    pub fn rows(&self) -> &[CompressedRow] {
        &self.rows
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn arity(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct input rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows of the table this was built from.
    pub fn uncompressed_len(&self) -> usize {
        self.uncompressed_len
    }
}
