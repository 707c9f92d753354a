/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Semigroup: associative binary operation.

/// A type with an associative binary operation.
///
/// Laws (not enforced by type system):
/// - Closure: `a.combine(b)` is again a `Self`
/// - Associativity: `a.combine(b).combine(c) == a.combine(b.combine(c))`
pub trait Semigroup: Sized {
    /// Combine two values associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place variant of combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(self);
        out.push_str(other);
        out
    }

    fn combine_assign(&mut self, other: &Self) {
        self.push_str(other);
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self);
        out.extend_from_slice(other);
        out
    }

    fn combine_assign(&mut self, other: &Self) {
        self.extend_from_slice(other);
    }
}

impl Semigroup for () {
    fn combine(&self, _other: &Self) -> Self {}
}

/// `Option<S>` lifts a semigroup by adjoining `None` as an identity.
impl<S: Semigroup + Clone> Semigroup for Option<S> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (None, x) | (x, None) => x.clone(),
            (Some(a), Some(b)) => Some(a.combine(b)),
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(&self, other: &Self) -> Self {
        (self.0.combine(&other.0), self.1.combine(&other.1))
    }

    fn combine_assign(&mut self, other: &Self) {
        self.0.combine_assign(&other.0);
        self.1.combine_assign(&other.1);
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(&self, other: &Self) -> Self {
        (
            self.0.combine(&other.0),
            self.1.combine(&other.1),
            self.2.combine(&other.2),
        )
    }

    fn combine_assign(&mut self, other: &Self) {
        self.0.combine_assign(&other.0);
        self.1.combine_assign(&other.1);
        self.2.combine_assign(&other.2);
    }
}
