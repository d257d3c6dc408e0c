use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FeatureSelectionError;
use crate::table::TargetSelector;

/// Supported selection strategies.
///
/// Deserialized through `FromStr`, so JSON configs accept the same names as
/// the command line and report the same error.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Algorithm {
    /// Hill climbing over the bitstring encoding of feature sets.
    #[serde(rename = "hc")]
    HillClimbing,
    /// Incremental selection by mutual-information gain.
    #[serde(rename = "inc")]
    Incremental,
    /// Greedy max mutual information selection.
    #[serde(rename = "mmi")]
    MaxMi,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HillClimbing
    }
}

impl FromStr for Algorithm {
    type Err = FeatureSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hc" | "hill-climbing" => Ok(Algorithm::HillClimbing),
            "inc" | "incremental" => Ok(Algorithm::Incremental),
            "mmi" | "max-mi" => Ok(Algorithm::MaxMi),
            _ => Err(FeatureSelectionError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = FeatureSelectionError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::HillClimbing => "hc",
            Algorithm::Incremental => "inc",
            Algorithm::MaxMi => "mmi",
        };
        write!(f, "{}", name)
    }
}

/// Parameters of a feature selection run.
///
/// Options prefixed `inc_` only affect the incremental strategy, `hc_` only
/// the hill climber.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SelectionParameters {
    pub algorithm: Algorithm,
    /// Maximum number of scorer evaluations (hill climbing).
    pub max_evals: usize,
    /// Desired number of features, 0 for no target.
    pub target_size: usize,
    /// Minimum mutual-information gain for a feature to be kept.
    pub threshold: f64,
    /// Worker threads used to score candidates, 0 for the rayon default.
    pub jobs: usize,
    /// Seed of the neighbourhood sampler.
    pub seed: u64,
    pub inc_target_size_epsilon: f64,
    /// Features whose removal loses less than `inc_red_intensity * threshold`
    /// of mutual information are dropped as redundant.
    pub inc_red_intensity: f64,
    /// Largest number of features considered jointly.
    pub inc_interaction_terms: usize,
    /// Capacity of the score cache, 0 disables caching.
    pub cache_size: usize,
    /// Stop as soon as this score is reached.
    pub hc_max_score: Option<f64>,
    pub hc_confidence: f64,
    /// Share of the remaining evaluations one neighbourhood may use.
    pub hc_fraction_of_remaining: f64,
    pub hc_max_distance: usize,
    pub hc_min_score_improvement: f64,
    /// Widen the search distance when no neighbour improves.
    pub hc_widen_search: bool,
    pub hc_initial_features: Vec<String>,
    /// Features written to the output whether selected or not.
    pub force_features: Vec<String>,
    /// Columns dropped when the table is read.
    pub ignore_features: Vec<String>,
    pub target: TargetSelector,
}

impl Default for SelectionParameters {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_evals: 10000,
            target_size: 0,
            threshold: 0.0,
            jobs: 0,
            seed: 1,
            inc_target_size_epsilon: 1e-6,
            inc_red_intensity: 0.0,
            inc_interaction_terms: 1,
            cache_size: 1_000_000,
            hc_max_score: None,
            hc_confidence: 50.0,
            hc_fraction_of_remaining: 0.5,
            hc_max_distance: 4,
            hc_min_score_improvement: 0.0,
            hc_widen_search: true,
            hc_initial_features: Vec::new(),
            force_features: Vec::new(),
            ignore_features: Vec::new(),
            target: TargetSelector::First,
        }
    }
}

impl SelectionParameters {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }
}
