/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Combinators deriving new combiners from existing ones.
//!
//! - [`pair`] / [`triple`]: component-wise combine over tuples, so one
//!   traversal can aggregate several independent metrics.
//! - [`merge_with`]: pointwise combine over `HashMap<K, V>`, treating
//!   a key missing on one side as that side's identity.
//!
//! Both preserve the monoid laws of their inputs, and both produce
//! ordinary combiners, so they nest freely:
//!
//! ```
//! use std::collections::HashMap;
//!
//! use monoid::fold_map;
//! use monoid::merge_with;
//! use monoid::sum;
//!
//! // (day, category) -> count
//! let by_day = merge_with::<u32, _>(merge_with::<&str, _>(sum::<u64>()));
//! let events = [(1, "click"), (1, "view"), (2, "click"), (1, "click")];
//! let stats = fold_map(&by_day, events, |(day, cat)| {
//!     HashMap::from([(day, HashMap::from([(cat, 1)]))])
//! });
//! assert_eq!(stats[&1][&"click"], 2);
//! assert_eq!(stats[&1][&"view"], 1);
//! assert_eq!(stats[&2][&"click"], 1);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use super::Combiner;

/// Product of two combiners, over `(A::Value, B::Value)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// The combiner for the first component.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The combiner for the second component.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: Combiner, B: Combiner> Combiner for Pair<A, B> {
    type Value = (A::Value, B::Value);

    fn identity(&self) -> Self::Value {
        (self.first.identity(), self.second.identity())
    }

    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        (
            self.first.combine(&a.0, &b.0),
            self.second.combine(&a.1, &b.1),
        )
    }
}

/// Combine pairs component-wise.
///
/// ```
/// use monoid::concat_strings;
/// use monoid::fold;
/// use monoid::pair;
/// use monoid::sum;
///
/// let rows = [(1i32, "I".to_string()), (2, "love".to_string()), (3, "x".to_string())];
/// let cap = pair(sum::<i32>(), concat_strings());
/// assert_eq!(fold(&cap, &rows), (6, "Ilovex".to_string()));
/// ```
pub fn pair<A: Combiner, B: Combiner>(first: A, second: B) -> Pair<A, B> {
    Pair { first, second }
}

/// Product of three combiners, over 3-tuples. Same semantics as
/// `pair(a, pair(b, c))` with a flat carrier.
#[derive(Clone, Copy, Debug, Default)]
pub struct Triple<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A: Combiner, B: Combiner, C: Combiner> Combiner for Triple<A, B, C> {
    type Value = (A::Value, B::Value, C::Value);

    fn identity(&self) -> Self::Value {
        (
            self.first.identity(),
            self.second.identity(),
            self.third.identity(),
        )
    }

    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        (
            self.first.combine(&a.0, &b.0),
            self.second.combine(&a.1, &b.1),
            self.third.combine(&a.2, &b.2),
        )
    }
}

/// Combine 3-tuples component-wise.
pub fn triple<A, B, C>(first: A, second: B, third: C) -> Triple<A, B, C>
where
    A: Combiner,
    B: Combiner,
    C: Combiner,
{
    Triple {
        first,
        second,
        third,
    }
}

/// Pointwise combiner over `HashMap<K, V::Value>`.
///
/// - identity: the empty map
/// - combine: union of keys; for each key,
///   `values.combine(left.get(k) or identity, right.get(k) or identity)`
///
/// Output iteration order is unspecified.
pub struct MergeWith<K, V> {
    values: V,
    _key: PhantomData<fn() -> K>,
}

impl<K, V> MergeWith<K, V> {
    /// The combiner applied to values under the same key.
    pub fn values(&self) -> &V {
        &self.values
    }
}

impl<K, V: Clone> Clone for MergeWith<K, V> {
    fn clone(&self) -> Self {
        MergeWith {
            values: self.values.clone(),
            _key: PhantomData,
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for MergeWith<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeWith")
            .field("key", &std::any::type_name::<K>())
            .field("values", &self.values)
            .finish()
    }
}

impl<K, V> Combiner for MergeWith<K, V>
where
    K: Eq + Hash + Clone,
    V: Combiner,
{
    type Value = HashMap<K, V::Value>;

    fn identity(&self) -> Self::Value {
        HashMap::new()
    }

    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        if a.is_empty() && b.is_empty() {
            return HashMap::new();
        }
        let unit = self.values.identity();
        let mut out = HashMap::with_capacity(a.len().max(b.len()));
        for (k, va) in a {
            let vb = b.get(k).unwrap_or(&unit);
            out.insert(k.clone(), self.values.combine(va, vb));
        }
        for (k, vb) in b {
            if !a.contains_key(k) {
                out.insert(k.clone(), self.values.combine(&unit, vb));
            }
        }
        out
    }
}

/// Lift a combiner over values to a combiner over `HashMap<K, _>`.
///
/// ```
/// use std::collections::HashMap;
///
/// use monoid::Combiner;
/// use monoid::merge_with;
/// use monoid::sum;
///
/// let cap = merge_with::<&str, _>(sum::<i32>());
/// let a = HashMap::from([("a", 1), ("b", 2)]);
/// let b = HashMap::from([("a", 1), ("c", 3)]);
/// assert_eq!(cap.combine(&a, &b), HashMap::from([("a", 2), ("b", 2), ("c", 3)]));
/// ```
pub fn merge_with<K, V>(values: V) -> MergeWith<K, V>
where
    K: Eq + Hash + Clone,
    V: Combiner,
{
    MergeWith {
        values,
        _key: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Max;
    use crate::Min;
    use crate::canonical;
    use crate::concat_strings;
    use crate::fold;
    use crate::sum;

    #[test]
    fn pair_identity_is_pair_of_identities() {
        let cap = pair(sum::<i32>(), concat_strings());
        assert_eq!(cap.identity(), (0, String::new()));
    }

    #[test]
    fn pair_combines_componentwise() {
        let cap = pair(sum::<i32>(), concat_strings());
        let a = (1, "I".to_string());
        let b = (2, "love".to_string());
        assert_eq!(cap.combine(&a, &b), (3, "Ilove".to_string()));
    }

    #[test]
    fn pair_of_pairs_nests() {
        let cap = pair(pair(sum::<u32>(), canonical::<Max<u32>>()), concat_strings());
        let rows = [((1u32, Max(1u32)), "a".to_string()), ((5, Max(5)), "b".to_string())];
        assert_eq!(fold(&cap, &rows), ((6, Max(5)), "ab".to_string()));
        assert_eq!(cap.first().second().identity(), Max(0));
    }

    #[test]
    fn triple_aggregates_three_metrics() {
        let cap = triple(sum::<u32>(), canonical::<Min<u32>>(), canonical::<Max<u32>>());
        let rows: Vec<_> = [4u32, 9, 2].iter().map(|&x| (x, Min(x), Max(x))).collect();
        assert_eq!(fold(&cap, &rows), (15, Min(2), Max(9)));
        let none: Vec<(u32, Min<u32>, Max<u32>)> = Vec::new();
        assert_eq!(fold(&cap, none), (0, Min(u32::MAX), Max(0)));
    }

    #[test]
    fn merge_with_unions_keys() {
        let cap = merge_with::<&str, _>(sum::<i32>());
        let a = HashMap::from([("a", 1), ("b", 2)]);
        let b = HashMap::from([("a", 1), ("c", 3)]);
        let expected = HashMap::from([("a", 2), ("b", 2), ("c", 3)]);
        assert_eq!(cap.combine(&a, &b), expected);
        assert_eq!(cap.combine(&b, &a), expected);
    }

    #[test]
    fn merge_with_identity_is_empty_map() {
        let cap = merge_with::<&str, _>(sum::<i32>());
        let a = HashMap::from([("a", 1)]);
        assert!(cap.identity().is_empty());
        assert_eq!(cap.combine(&cap.identity(), &a), a);
        assert_eq!(cap.combine(&a, &cap.identity()), a);
    }

    #[test]
    fn merge_with_exposes_value_combiner() {
        let cap = merge_with::<u8, _>(sum::<i32>());
        assert_eq!(cap.values().identity(), 0);
        assert_eq!(cap.values().combine(&2, &3), 5);
        let copy = cap.clone();
        assert_eq!(copy.values().combine(&i32::MAX, &1), i32::MIN);
    }

    #[test]
    fn merge_with_keeps_one_sided_keys() {
        let cap = merge_with::<u8, _>(concat_strings());
        let a = HashMap::from([(1, "x".to_string()), (3, "p".to_string())]);
        let b = HashMap::from([(2, "y".to_string()), (3, "q".to_string())]);
        let merged = cap.combine(&a, &b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[&1], "x");
        assert_eq!(merged[&2], "y");
        assert_eq!(merged[&3], "pq");
    }

    #[test]
    fn nested_merge_with_aggregates_by_two_keys() {
        let cap = merge_with::<u32, _>(merge_with::<&str, _>(sum::<u64>()));
        let a = HashMap::from([(1, HashMap::from([("click", 1), ("view", 2)]))]);
        let b = HashMap::from([
            (1, HashMap::from([("click", 4)])),
            (2, HashMap::from([("view", 1)])),
        ]);
        let merged = cap.combine(&a, &b);
        assert_eq!(merged[&1], HashMap::from([("click", 5), ("view", 2)]));
        assert_eq!(merged[&2], HashMap::from([("view", 1)]));
    }

    #[test]
    fn merge_with_over_pairs() {
        let cap = merge_with::<&str, _>(pair(sum::<u32>(), canonical::<Max<u32>>()));
        let rows = [
            HashMap::from([("a", (1u32, Max(3u32)))]),
            HashMap::from([("a", (1, Max(7))), ("b", (1, Max(1)))]),
        ];
        let total = fold(&cap, &rows);
        assert_eq!(total[&"a"], (2, Max(7)));
        assert_eq!(total[&"b"], (1, Max(1)));
    }
}
