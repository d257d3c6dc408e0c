//! Bounded memoization of scorers.
//!
//! Entries are evicted in the order they were produced once the capacity is
//! exceeded. Hits only take a read lock, so a batch of candidates can be
//! scored in parallel through the same cache.
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::instance::{FeatureSet, Instance};
use crate::scoring::{CompositeScore, FeatureScorer, InstanceScorer};

struct CacheState<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

/// Fixed-capacity map from keys to previously computed values.
pub struct BoundedCache<K, V> {
    capacity: usize,
    state: RwLock<CacheState<K, V>>,
    failures: AtomicUsize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(capacity: usize) -> Self {
        BoundedCache {
            capacity,
            state: RwLock::new(CacheState {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            failures: AtomicUsize::new(0),
        }
    }

    /// Return the stored value for `key`, or compute, store and return it.
    ///
    /// Every call that has to compute counts as a failure.
    pub fn evaluate<F>(&self, key: &K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        {
            let state = self.state.read().unwrap_or_else(|e| e.into_inner());
            if let Some(value) = state.entries.get(key) {
                return value.clone();
            }
        }

        let value = compute();
        self.failures.fetch_add(1, Ordering::Relaxed);

        if self.capacity > 0 {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            if !state.entries.contains_key(key) {
                if state.entries.len() >= self.capacity {
                    if let Some(oldest) = state.order.pop_front() {
                        state.entries.remove(&oldest);
                    }
                }
                state.entries.insert(key.clone(), value.clone());
                state.order.push_back(key.clone());
            }
        }

        value
    }

    pub fn contains(&self, key: &K) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .entries
            .contains_key(key)
    }

    /// Number of evaluations that were not served from the cache.
    pub fn failure_count(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.state.read().unwrap_or_else(|e| e.into_inner()).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Caching decorator for an `InstanceScorer`.
pub struct ScorerCache<S> {
    inner: S,
    cache: BoundedCache<Instance, CompositeScore>,
}

impl<S: InstanceScorer> ScorerCache<S> {
    pub fn new(capacity: usize, inner: S) -> Self {
        ScorerCache {
            inner,
            cache: BoundedCache::new(capacity),
        }
    }

    pub fn failure_count(&self) -> usize {
        self.cache.failure_count()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<S: InstanceScorer> InstanceScorer for ScorerCache<S> {
    fn score(&self, instance: &Instance) -> CompositeScore {
        self.cache.evaluate(instance, || self.inner.score(instance))
    }
}

/// Caching decorator for a `FeatureScorer`.
pub struct FeatureSetCache<S> {
    inner: S,
    cache: BoundedCache<FeatureSet, f64>,
}

impl<S: FeatureScorer> FeatureSetCache<S> {
    pub fn new(capacity: usize, inner: S) -> Self {
        FeatureSetCache {
            inner,
            cache: BoundedCache::new(capacity),
        }
    }

    pub fn failure_count(&self) -> usize {
        self.cache.failure_count()
    }
}

impl<S: FeatureScorer> FeatureScorer for FeatureSetCache<S> {
    fn score(&self, features: &FeatureSet) -> f64 {
        self.cache.evaluate(features, || self.inner.score(features))
    }
}
