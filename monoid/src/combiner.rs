/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Value-level monoids.
//!
//! A [`Combiner`] carries a combining operation and its identity as an
//! ordinary value. Generic code receives the combiner as an argument
//! instead of resolving it from the element type, so the same type can
//! be reduced in several ways and combiners can be built at runtime.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::Monoid;

/// An associative operation together with its identity, over
/// [`Combiner::Value`].
///
/// Laws (not enforced; violating them produces wrong aggregates, not
/// errors):
///
/// - **Closure**: `combine(a, b)` is a valid `Value`
/// - **Associative**: `combine(combine(a, b), c) == combine(a, combine(b, c))`
/// - **Left identity**: `combine(identity(), a) == a`
/// - **Right identity**: `combine(a, identity()) == a`
///
/// `combine` must be pure so that reductions may regroup (and
/// parallelize) freely.
pub trait Combiner {
    /// The carrier type.
    type Value;

    /// The identity element.
    fn identity(&self) -> Self::Value;

    /// Combine two values associatively.
    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;
}

impl<C: Combiner + ?Sized> Combiner for &C {
    type Value = C::Value;

    fn identity(&self) -> Self::Value {
        (**self).identity()
    }

    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        (**self).combine(a, b)
    }
}

impl<C: Combiner + ?Sized> Combiner for Box<C> {
    type Value = C::Value;

    fn identity(&self) -> Self::Value {
        (**self).identity()
    }

    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        (**self).combine(a, b)
    }
}

impl<C: Combiner + ?Sized> Combiner for Arc<C> {
    type Value = C::Value;

    fn identity(&self) -> Self::Value {
        (**self).identity()
    }

    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        (**self).combine(a, b)
    }
}

/// A combiner built from a binary function and an identity value.
///
/// Construct with [`from_fn`].
#[derive(Clone)]
pub struct FnCombiner<T, F> {
    identity: T,
    combine: F,
}

impl<T, F> Combiner for FnCombiner<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Value = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        (self.combine)(a, b)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FnCombiner<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCombiner")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Build a combiner from an identity value and a pure, associative
/// binary function. No validation is performed.
///
/// # Example
///
/// ```
/// use monoid::fold;
/// use monoid::from_fn;
///
/// let add = from_fn(0, |a: &i32, b: &i32| a + b);
/// assert_eq!(fold(&add, [1i32, 2, 3, 4]), 10);
/// assert_eq!(fold(&add, Vec::<i32>::new()), 0);
/// ```
pub fn from_fn<T, F>(identity: T, combine: F) -> FnCombiner<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    FnCombiner { identity, combine }
}

/// The canonical combiner of a type-level [`Monoid`].
pub struct Canonical<M>(PhantomData<fn() -> M>);

impl<M> Canonical<M> {
    /// Create the canonical combiner for `M`.
    pub const fn new() -> Self {
        Canonical(PhantomData)
    }
}

impl<M> Default for Canonical<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for Canonical<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Canonical<M> {}

impl<M> fmt::Debug for Canonical<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Canonical<{}>", std::any::type_name::<M>())
    }
}

impl<M: Monoid> Combiner for Canonical<M> {
    type Value = M;

    fn identity(&self) -> M {
        M::empty()
    }

    fn combine(&self, a: &M, b: &M) -> M {
        a.combine(b)
    }
}

/// Shorthand for [`Canonical::new`].
///
/// ```
/// use monoid::Combiner;
/// use monoid::canonical;
///
/// let strings = canonical::<String>();
/// assert_eq!(strings.combine(&"I".into(), &"love".into()), "Ilove");
/// assert_eq!(strings.identity(), "");
/// ```
pub const fn canonical<M>() -> Canonical<M> {
    Canonical::new()
}

/// Integer addition, `(+, 0)`, wrapping on overflow.
pub fn sum<T>() -> FnCombiner<T, fn(&T, &T) -> T>
where
    T: Clone + num_traits::WrappingAdd + num_traits::Zero,
{
    let add: fn(&T, &T) -> T = |a, b| a.wrapping_add(b);
    from_fn(T::zero(), add)
}

/// String concatenation, `(++, "")`.
pub fn concat_strings() -> Canonical<String> {
    canonical()
}
