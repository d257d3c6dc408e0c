//! Scoring of candidate feature sets.
//!
//! Two families of scorers are used: `FeatureScorer`s map a `FeatureSet` to a
//! scalar quality (mutual information and friends) and are consumed by the
//! greedy strategies; `InstanceScorer`s map an `Instance` to a
//! `CompositeScore` and are consumed by the hill climber. `CompositeScorer`
//! bridges the two, and the caches in `cache` wrap either family.
use std::cmp::Ordering;
use std::fmt;

use crate::instance::{FeatureSet, Instance};

pub mod cache;
pub mod composite;
pub mod mutual_information;

pub use cache::{BoundedCache, FeatureSetCache, ScorerCache};
pub use composite::CompositeScorer;
pub use mutual_information::{ConfidentMutualInformation, MutualInformation};

/// Scalar quality of a feature set, higher is better.
pub trait FeatureScorer: Sync {
    fn score(&self, features: &FeatureSet) -> f64;
}

/// Composite quality of a bitstring-encoded feature set.
pub trait InstanceScorer: Sync {
    fn score(&self, instance: &Instance) -> CompositeScore;
}

impl<T: FeatureScorer + ?Sized> FeatureScorer for &T {
    fn score(&self, features: &FeatureSet) -> f64 {
        (**self).score(features)
    }
}

impl<T: InstanceScorer + ?Sized> InstanceScorer for &T {
    fn score(&self, instance: &Instance) -> CompositeScore {
        (**self).score(instance)
    }
}

/// Quality paired with a complexity penalty.
///
/// Ordered so that greater is strictly better: the score decides first, and on
/// equal scores the lower complexity wins.
#[derive(Debug, Clone, Copy)]
pub struct CompositeScore {
    pub score: f64,
    pub complexity: usize,
}

impl CompositeScore {
    pub fn new(score: f64, complexity: usize) -> Self {
        CompositeScore { score, complexity }
    }

    /// Below every score a scorer can produce.
    pub fn worst() -> Self {
        CompositeScore {
            score: f64::NEG_INFINITY,
            complexity: usize::MAX,
        }
    }

    pub fn is_worst(&self) -> bool {
        *self == CompositeScore::worst()
    }
}

impl Ord for CompositeScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.complexity.cmp(&self.complexity))
    }
}

impl PartialOrd for CompositeScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CompositeScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CompositeScore {}

impl fmt::Display for CompositeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[score={}, complexity={}]", self.score, self.complexity)
    }
}
