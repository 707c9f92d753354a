/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Map monoid with pointwise combine on values.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Deserialize;
use serde::Serialize;

use super::Monoid;
use super::Semigroup;

/// Pointwise map monoid over `HashMap`.
///
/// Values form a monoid. Operationally, `combine` is:
/// - keys: union of the key sets
/// - values: `v_left.combine(v_right)`, where a key absent on one
///   side contributes `V::empty()` for that side
///
/// The identity is the empty map. Because `MergeMap<K, V>` is itself a
/// monoid, it nests: `MergeMap<Date, MergeMap<Category, Sum<u64>>>`
/// aggregates by two dimensions with no extra code.
///
/// Iteration order is unspecified; equality compares key/value
/// associations only.
///
/// # Example
///
/// ```
/// use monoid::MergeMap;
/// use monoid::Semigroup;
/// use monoid::Sum;
///
/// let a: MergeMap<&str, Sum<i32>> = [("a", Sum(1)), ("b", Sum(2))].into_iter().collect();
/// let b: MergeMap<&str, Sum<i32>> = [("a", Sum(1)), ("c", Sum(3))].into_iter().collect();
///
/// let merged = a.combine(&b);
/// assert_eq!(merged.get(&"a"), Some(&Sum(2)));
/// assert_eq!(merged.get(&"b"), Some(&Sum(2)));
/// assert_eq!(merged.get(&"c"), Some(&Sum(3)));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Eq + Hash + Serialize, V: Serialize",
    deserialize = "K: Eq + Hash + Deserialize<'de>, V: Deserialize<'de>"
))]
pub struct MergeMap<K, V> {
    inner: HashMap<K, V>,
}

// Manual impl to keep bounds minimal and aligned with HashMap
// equality: HashMap<K, V>: PartialEq requires K: Eq + Hash and V:
// PartialEq.
impl<K, V> PartialEq for MergeMap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V> Eq for MergeMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> MergeMap<K, V>
where
    K: Eq + Hash,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Map with a single entry. This is the usual "unit" value fed to
    /// a fold: one observation keyed by its dimension.
    pub fn singleton(k: K, v: V) -> Self {
        let mut inner = HashMap::with_capacity(1);
        inner.insert(k, v);
        Self { inner }
    }

    /// Insert or replace a value for a key.
    pub fn insert(&mut self, k: K, v: V) {
        self.inner.insert(k, v);
    }

    /// Get a reference to the value for this key, if present.
    pub fn get(&self, k: &K) -> Option<&V> {
        self.inner.get(k)
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.inner.iter()
    }

    /// Access the underlying `HashMap`.
    pub fn as_inner(&self) -> &HashMap<K, V> {
        &self.inner
    }

    /// Consume the wrapper and return the underlying `HashMap`.
    pub fn into_inner(self) -> HashMap<K, V> {
        self.inner
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Is the map empty?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> MergeMap<K, V>
where
    K: Eq + Hash,
    V: Monoid,
{
    /// Combine `v` into the entry for `k`, starting from `V::empty()`
    /// when the key is absent.
    pub fn merge_entry(&mut self, k: K, v: &V) {
        self.inner
            .entry(k)
            .or_insert_with(V::empty)
            .combine_assign(v);
    }
}

impl<K, V> Default for MergeMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<HashMap<K, V>> for MergeMap<K, V> {
    fn from(inner: HashMap<K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> FromIterator<(K, V)> for MergeMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Semigroup for MergeMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Monoid + Clone,
{
    fn combine(&self, other: &Self) -> Self {
        let mut out = HashMap::with_capacity(self.inner.len().max(other.inner.len()));
        for (k, v_here) in &self.inner {
            let merged = match other.inner.get(k) {
                Some(v_other) => v_here.combine(v_other),
                None => v_here.combine(&V::empty()),
            };
            out.insert(k.clone(), merged);
        }
        for (k, v_other) in &other.inner {
            if !self.inner.contains_key(k) {
                out.insert(k.clone(), V::empty().combine(v_other));
            }
        }
        MergeMap { inner: out }
    }

    fn combine_assign(&mut self, other: &Self) {
        for (k, v_other) in &other.inner {
            self.merge_entry(k.clone(), v_other);
        }
    }
}

impl<K, V> Monoid for MergeMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Monoid + Clone,
{
    fn empty() -> Self {
        MergeMap {
            inner: HashMap::new(),
        }
    }
}
