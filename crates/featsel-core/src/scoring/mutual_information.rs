use crate::instance::FeatureSet;
use crate::scoring::FeatureScorer;
use crate::stats::mutual_information;
use crate::table::CompressedTable;

/// Mutual information between a feature set and the output.
pub struct MutualInformation<'a> {
    ctable: &'a CompressedTable,
}

impl<'a> MutualInformation<'a> {
    pub fn new(ctable: &'a CompressedTable) -> Self {
        MutualInformation { ctable }
    }
}

impl FeatureScorer for MutualInformation<'_> {
    fn score(&self, features: &FeatureSet) -> f64 {
        mutual_information(self.ctable, features)
    }
}

/// Mutual information discounted by how little data backs a large feature set.
///
/// The score is `MI * N / (N + confidence * |S|)` where `N` is the number of
/// rows; a higher `confidence` intensity penalizes larger sets more.
pub struct ConfidentMutualInformation<'a> {
    ctable: &'a CompressedTable,
    confidence: f64,
}

impl<'a> ConfidentMutualInformation<'a> {
    pub fn new(ctable: &'a CompressedTable, confidence: f64) -> Self {
        ConfidentMutualInformation { ctable, confidence }
    }

    fn confidence_factor(&self, size: usize) -> f64 {
        let n = self.ctable.uncompressed_len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        n / (n + self.confidence.max(0.0) * size as f64)
    }
}

impl FeatureScorer for ConfidentMutualInformation<'_> {
    fn score(&self, features: &FeatureSet) -> f64 {
        mutual_information(self.ctable, features) * self.confidence_factor(features.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Table};

    #[test]
    fn test_confidence_penalizes_larger_sets() {
        let table = Table::new(
            vec![
                Column::boolean("a", &[false, true, false, true]),
                Column::boolean("b", &[true, true, false, false]),
            ],
            Column::boolean("y", &[false, true, false, true]),
        )
        .unwrap();
        let ctable = table.compress();

        let plain = MutualInformation::new(&ctable);
        let confident = ConfidentMutualInformation::new(&ctable, 4.0);
        let a: FeatureSet = [0].into_iter().collect();
        let ab: FeatureSet = [0, 1].into_iter().collect();

        assert!((plain.score(&a) - 1.0).abs() < 1e-12);
        assert!((plain.score(&ab) - 1.0).abs() < 1e-12);
        // N = 4: factor 4 / (4 + 4 * 1) and 4 / (4 + 4 * 2)
        assert!((confident.score(&a) - 0.5).abs() < 1e-12);
        assert!((confident.score(&ab) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(ConfidentMutualInformation::new(&ctable, 0.0).score(&ab), plain.score(&ab));
    }
}
