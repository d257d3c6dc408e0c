//! Feature subsets and their fixed-width bitstring encoding.
//!
//! The greedy strategies work on `FeatureSet`s directly; the hill climber
//! moves through `Instance`s, one bit per input column. Both encodings are
//! converted here and nowhere else.
use std::collections::BTreeSet;
use std::fmt;

/// A set of input column indices.
pub type FeatureSet = BTreeSet<usize>;

const BLOCK: usize = u64::BITS as usize;

/// Fixed-width bit vector, bit `i` set means feature `i` is included.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Instance {
    width: usize,
    blocks: Vec<u64>,
}

impl Instance {
    /// All bits cleared, i.e. the empty feature set.
    pub fn empty(width: usize) -> Self {
        Instance {
            width,
            blocks: vec![0; (width + BLOCK - 1) / BLOCK],
        }
    }

    /// Encode `features`; indices outside `width` are dropped.
    pub fn from_features(features: &FeatureSet, width: usize) -> Self {
        let mut inst = Instance::empty(width);
        for &f in features.iter().filter(|&&f| f < width) {
            inst.set(f, true);
        }
        inst
    }

    pub fn to_features(&self) -> FeatureSet {
        (0..self.width).filter(|&i| self.get(i)).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, idx: usize) -> bool {
        assert!(idx < self.width, "bit index out of bounds");
        (self.blocks[idx / BLOCK] >> (idx % BLOCK)) & 1 == 1
    }

    pub fn set(&mut self, idx: usize, value: bool) {
        assert!(idx < self.width, "bit index out of bounds");
        let mask = 1u64 << (idx % BLOCK);
        if value {
            self.blocks[idx / BLOCK] |= mask;
        } else {
            self.blocks[idx / BLOCK] &= !mask;
        }
    }

    pub fn flip(&mut self, idx: usize) {
        assert!(idx < self.width, "bit index out of bounds");
        self.blocks[idx / BLOCK] ^= 1u64 << (idx % BLOCK);
    }

    /// Copy of this instance with the given bits flipped.
    pub fn flipped(&self, indices: &[usize]) -> Instance {
        let mut inst = self.clone();
        for &idx in indices {
            inst.flip(idx);
        }
        inst
    }

    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn hamming_distance(&self, other: &Instance) -> usize {
        assert_eq!(self.width, other.width, "Instances must have equal width");
        self.blocks
            .iter()
            .zip(other.blocks.iter())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum()
    }
}

/// Call `f` with every `k`-combination of `0..n`, in lexicographic order.
pub fn for_each_combination<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        f(&idx);
        let mut i = k;
        while i > 0 && idx[i - 1] == n - k + i - 1 {
            i -= 1;
        }
        if i == 0 {
            return;
        }
        idx[i - 1] += 1;
        for j in i..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Number of `k`-combinations of `n` elements, saturating at `usize::MAX`.
pub fn n_choose_k(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.saturating_mul((n - i) as u128) / (i as u128 + 1);
    }
    result.min(usize::MAX as u128) as usize
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance(")?;
        for i in 0..self.width {
            write!(f, "{}", if self.get(i) { '1' } else { '0' })?;
        }
        write!(f, ")")
    }
}
