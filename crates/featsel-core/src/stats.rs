use std::collections::HashMap;
use std::hash::Hash;

use crate::instance::FeatureSet;
use crate::table::{CompressedTable, Value};

/// Shannon entropy, in bits, of a distribution given by counts.
///
/// # Arguments
///
/// * `counts` - Occurrence count of each outcome.
/// * `total` - Sum of `counts`.
///
/// # Returns
///
/// The entropy `-sum(p * log2(p))`, or 0 when `total` is 0.
pub fn entropy<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .into_iter()
        .filter(|&n| n > 0)
        .map(|n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

fn histogram_entropy<K: Eq + Hash>(histogram: &HashMap<K, usize>, total: usize) -> f64 {
    entropy(histogram.values().copied(), total)
}

/// Mutual information between the joint value of `features` and the output.
///
/// Computed as `H(X) + H(Y) - H(X, Y)` from the group counts of the
/// compressed table, so the cost is linear in the number of distinct rows.
///
/// # Arguments
///
/// * `ctable` - The compressed table.
/// * `features` - Input column indices; all must be below `ctable.arity()`.
///
/// # Returns
///
/// The mutual information in bits (never negative).
pub fn mutual_information(ctable: &CompressedTable, features: &FeatureSet) -> f64 {
    let total = ctable.uncompressed_len();
    if total == 0 || features.is_empty() {
        return 0.0;
    }

    let mut x_counts: HashMap<Vec<&Value>, usize> = HashMap::new();
    let mut y_counts: HashMap<&Value, usize> = HashMap::new();
    let mut xy_counts: HashMap<(Vec<&Value>, &Value), usize> = HashMap::new();

    for row in ctable.rows() {
        let key: Vec<&Value> = features.iter().map(|&f| &row.inputs[f]).collect();
        for (y, &n) in row.outputs.iter() {
            *y_counts.entry(y).or_default() += n;
            *xy_counts.entry((key.clone(), y)).or_default() += n;
        }
        *x_counts.entry(key).or_default() += row.count();
    }

    let mi = histogram_entropy(&x_counts, total) + histogram_entropy(&y_counts, total)
        - histogram_entropy(&xy_counts, total);
    mi.max(0.0)
}

/// Entropy of the output column alone, an upper bound of any mutual information.
pub fn output_entropy(ctable: &CompressedTable) -> f64 {
    let mut y_counts: HashMap<&Value, usize> = HashMap::new();
    for row in ctable.rows() {
        for (y, &n) in row.outputs.iter() {
            *y_counts.entry(y).or_default() += n;
        }
    }
    histogram_entropy(&y_counts, ctable.uncompressed_len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Table};

    fn xor_table() -> Table {
        Table::new(
            vec![
                Column::boolean("a", &[false, false, true, true]),
                Column::boolean("b", &[false, true, false, true]),
                Column::boolean("c", &[true, true, true, true]),
            ],
            Column::boolean("y", &[false, true, true, false]),
        )
        .unwrap()
    }

    #[test]
    fn test_entropy() {
        assert!((entropy(vec![1, 1], 2) - 1.0).abs() < 1e-12);
        assert!((entropy(vec![1, 1, 1, 1], 4) - 2.0).abs() < 1e-12);
        assert_eq!(entropy(vec![4], 4), 0.0);
        assert_eq!(entropy(Vec::new(), 0), 0.0);
    }

    #[test]
    fn test_mutual_information_xor() {
        let ctable = xor_table().compress();
        let fs = |v: &[usize]| v.iter().copied().collect::<FeatureSet>();

        // each input alone says nothing about xor, together they determine it
        assert!(mutual_information(&ctable, &fs(&[0])).abs() < 1e-12);
        assert!(mutual_information(&ctable, &fs(&[1])).abs() < 1e-12);
        assert!((mutual_information(&ctable, &fs(&[0, 1])) - 1.0).abs() < 1e-12);
        assert!(mutual_information(&ctable, &fs(&[2])).abs() < 1e-12);
        assert_eq!(mutual_information(&ctable, &FeatureSet::new()), 0.0);
        assert!((output_entropy(&ctable) - 1.0).abs() < 1e-12);
    }
}
