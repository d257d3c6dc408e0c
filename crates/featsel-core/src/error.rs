use std::error::Error;
use std::fmt;

/// Errors raised while configuring, running or reconstructing a feature selection.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureSelectionError {
    /// The strategy returned no features at all.
    EmptySelection,
    /// Algorithm name that is not one of the supported strategies.
    UnknownAlgorithm(String),
    /// A forced feature name does not exist in the source table.
    MissingForcedFeature(String),
    /// An initial hill-climbing feature is not in the table (reported, never fatal).
    UnresolvedInitialFeature(String),
    /// Input and output columns do not have the same number of rows.
    LengthMismatch { inputs: usize, outputs: usize },
    /// Two columns share the same label.
    DuplicateLabel(String),
}

impl fmt::Display for FeatureSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeatureSelectionError::EmptySelection => write!(f, "No features have been selected"),
            FeatureSelectionError::UnknownAlgorithm(name) => write!(
                f,
                "Algorithm '{}' is unknown, expected one of: hc, inc, mmi",
                name
            ),
            FeatureSelectionError::MissingForcedFeature(name) => {
                write!(f, "Forced feature '{}' does not exist in the input table", name)
            }
            FeatureSelectionError::UnresolvedInitialFeature(name) => write!(
                f,
                "No such feature '{}', it will be ignored as initial feature",
                name
            ),
            FeatureSelectionError::LengthMismatch { inputs, outputs } => write!(
                f,
                "Input columns have {} rows but the output column has {}",
                inputs, outputs
            ),
            FeatureSelectionError::DuplicateLabel(label) => {
                write!(f, "Column label '{}' appears more than once", label)
            }
        }
    }
}

impl Error for FeatureSelectionError {}
