//! Tabular data model.
//!
//! A `Table` holds labeled, typed input columns and a single output (target)
//! column, row-aligned. It also remembers where the target column sat in the
//! original file layout so that selections can be written back with the target
//! in the right place. `CompressedTable` groups identical input rows and is the
//! representation all mutual-information statistics are computed from.
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeatureSelectionError;
use crate::instance::FeatureSet;

pub mod compressed;
pub mod value;

pub use compressed::{CompressedRow, CompressedTable};
pub use value::{ColumnType, Value};

/// Position of the target column among all columns of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetSelector {
    #[default]
    First,
    Last,
    /// Explicit 0-based column index in the file.
    Index(usize),
}

impl FromStr for TargetSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "0" => Ok(TargetSelector::First),
            "last" | "-1" => Ok(TargetSelector::Last),
            other => other
                .parse::<usize>()
                .map(TargetSelector::Index)
                .map_err(|_| format!("Invalid target column: {}. Use first, last or an index", s)),
        }
    }
}

/// A labeled, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub kind: ColumnType,
    pub values: Vec<Value>,
    /// Cell text as read from the file, when the column came from one.
    pub source: Option<Vec<String>>,
}

impl Column {
    pub fn new(label: impl Into<String>, kind: ColumnType, values: Vec<Value>) -> Self {
        Column {
            label: label.into(),
            kind,
            values,
            source: None,
        }
    }

    /// Attach the text each value was parsed from.
    pub fn with_source(mut self, source: Vec<String>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn boolean(label: impl Into<String>, values: &[bool]) -> Self {
        Self::new(
            label,
            ColumnType::Boolean,
            values.iter().map(|&b| Value::Boolean(b)).collect(),
        )
    }

    pub fn contin(label: impl Into<String>, values: &[f64]) -> Self {
        Self::new(
            label,
            ColumnType::Contin,
            values.iter().map(|&x| Value::Contin(x)).collect(),
        )
    }

    pub fn enumerated(label: impl Into<String>, values: &[&str]) -> Self {
        Self::new(
            label,
            ColumnType::Enum,
            values.iter().map(|s| Value::Enum(s.to_string())).collect(),
        )
    }

    /// Copy of this column with every value kept as opaque text.
    ///
    /// The text read from the file is used when available, so values are
    /// written back exactly as they appeared.
    pub fn to_raw(&self) -> Column {
        let values = match &self.source {
            Some(source) => source.iter().map(|s| Value::Raw(s.clone())).collect(),
            None => self.values.iter().map(Value::to_raw).collect(),
        };
        Column::new(self.label.clone(), ColumnType::Raw, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    inputs: Vec<Column>,
    output: Column,
    target: TargetSelector,
}

impl Table {
    /// Build a table, checking that all columns have as many rows as the
    /// output and that labels are unique.
    pub fn new(inputs: Vec<Column>, output: Column) -> Result<Self, FeatureSelectionError> {
        let mut seen = HashSet::new();
        for column in inputs.iter().chain(std::iter::once(&output)) {
            if column.len() != output.len() {
                return Err(FeatureSelectionError::LengthMismatch {
                    inputs: column.len(),
                    outputs: output.len(),
                });
            }
            if !seen.insert(column.label.as_str()) {
                return Err(FeatureSelectionError::DuplicateLabel(column.label.clone()));
            }
        }
        Ok(Table {
            inputs,
            output,
            target: TargetSelector::First,
        })
    }

    /// Record where the target column sits in the file this table came from.
    pub fn with_target(mut self, target: TargetSelector) -> Self {
        self.target = target;
        self
    }

    /// Number of input columns.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    pub fn n_rows(&self) -> usize {
        self.output.len()
    }

    pub fn inputs(&self) -> &[Column] {
        &self.inputs
    }

    pub fn input(&self, idx: usize) -> &Column {
        &self.inputs[idx]
    }

    pub fn output(&self) -> &Column {
        &self.output
    }

    pub fn target(&self) -> TargetSelector {
        self.target
    }

    pub fn labels(&self) -> Vec<&str> {
        self.inputs.iter().map(|c| c.label.as_str()).collect()
    }

    /// Index of the input column labeled `label`.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.inputs.iter().position(|c| c.label == label)
    }

    /// Column position of input `idx` in the original file, counting the
    /// target column.
    pub fn file_position(&self, idx: usize) -> usize {
        match self.target {
            TargetSelector::First => idx + 1,
            TargetSelector::Last => idx,
            TargetSelector::Index(t) => {
                if idx < t {
                    idx
                } else {
                    idx + 1
                }
            }
        }
    }

    pub fn all_features(&self) -> FeatureSet {
        (0..self.arity()).collect()
    }

    /// Keep only the given input columns, in their original order.
    pub fn filter(&self, features: &FeatureSet) -> Table {
        Table {
            inputs: features
                .iter()
                .filter(|&&f| f < self.arity())
                .map(|&f| self.inputs[f].clone())
                .collect(),
            output: self.output.clone(),
            target: self.target,
        }
    }

    /// Insert an input column at `idx` (appended when `idx >= arity`).
    pub fn insert_input(&mut self, idx: usize, column: Column) -> Result<(), FeatureSelectionError> {
        if column.len() != self.n_rows() {
            return Err(FeatureSelectionError::LengthMismatch {
                inputs: column.len(),
                outputs: self.n_rows(),
            });
        }
        if self.position_of(&column.label).is_some() || column.label == self.output.label {
            return Err(FeatureSelectionError::DuplicateLabel(column.label));
        }
        let idx = idx.min(self.inputs.len());
        self.inputs.insert(idx, column);
        Ok(())
    }

    pub fn compress(&self) -> CompressedTable {
        CompressedTable::from_table(self)
    }
}
