/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Monoid: semigroup with identity element.

use std::collections::BTreeSet;
use std::collections::HashSet;
use std::hash::Hash;

use super::Semigroup;

/// A semigroup with an identity element.
///
/// Laws:
/// - Identity: `empty().combine(a) == a` and `a.combine(empty()) == a`
/// - Associativity: inherited from Semigroup
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combine all elements from an iterator, starting from `empty()`.
    ///
    /// An empty iterator produces `empty()`.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter().fold(Self::empty(), |mut acc, x| {
            acc.combine_assign(&x);
            acc
        })
    }
}

/// A monoid where the operation is commutative.
///
/// Additional law:
/// - Commutativity: `a.combine(b) == b.combine(a)`
pub trait CommutativeMonoid: Monoid {}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl CommutativeMonoid for () {}

impl<S: Semigroup + Clone> Monoid for Option<S> {
    fn empty() -> Self {
        None
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: CommutativeMonoid, B: CommutativeMonoid> CommutativeMonoid for (A, B) {}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<A, B, C> CommutativeMonoid for (A, B, C)
where
    A: CommutativeMonoid,
    B: CommutativeMonoid,
    C: CommutativeMonoid,
{
}

// Sets: combine = union, empty = ∅

impl<T: Eq + Hash + Clone> Semigroup for HashSet<T> {
    fn combine(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }

    fn combine_assign(&mut self, other: &Self) {
        self.extend(other.iter().cloned());
    }
}

impl<T: Eq + Hash + Clone> Monoid for HashSet<T> {
    fn empty() -> Self {
        HashSet::new()
    }
}

impl<T: Eq + Hash + Clone> CommutativeMonoid for HashSet<T> {}

impl<T: Ord + Clone> Semigroup for BTreeSet<T> {
    fn combine(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }

    fn combine_assign(&mut self, other: &Self) {
        self.extend(other.iter().cloned());
    }
}

impl<T: Ord + Clone> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        BTreeSet::new()
    }
}

impl<T: Ord + Clone> CommutativeMonoid for BTreeSet<T> {}
