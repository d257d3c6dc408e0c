use crate::instance::Instance;
use crate::scoring::{CompositeScore, FeatureScorer, InstanceScorer};

/// Adapts a `FeatureScorer` to score `Instance`s.
///
/// The instance is decoded to a feature set, the wrapped scorer gives the
/// quality and the set size is used as complexity.
pub struct CompositeScorer<S> {
    inner: S,
}

impl<S: FeatureScorer> CompositeScorer<S> {
    pub fn new(inner: S) -> Self {
        CompositeScorer { inner }
    }
}

impl<S: FeatureScorer> InstanceScorer for CompositeScorer<S> {
    fn score(&self, instance: &Instance) -> CompositeScore {
        let features = instance.to_features();
        CompositeScore::new(self.inner.score(&features), features.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::FeatureSet;

    struct SumScorer;

    impl FeatureScorer for SumScorer {
        fn score(&self, features: &FeatureSet) -> f64 {
            features.iter().map(|&f| f as f64).sum()
        }
    }

    #[test]
    fn test_decodes_instance() {
        let scorer = CompositeScorer::new(SumScorer);
        let inst = Instance::empty(6).flipped(&[1, 4]);
        let score = scorer.score(&inst);
        assert_eq!(score.score, 5.0);
        assert_eq!(score.complexity, 2);
    }
}
