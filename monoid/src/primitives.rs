/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Primitive monoid wrappers: Sum, Product, Max, Min, Any, All.
//!
//! A plain integer has more than one lawful monoid (addition,
//! multiplication, max, min), so the choice is made by wrapping the
//! value in a newtype.

use num_traits::Bounded;
use num_traits::One;
use num_traits::WrappingAdd;
use num_traits::WrappingMul;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use super::CommutativeMonoid;
use super::Monoid;
use super::Semigroup;

// Sum<T>: combine = +

/// Newtype wrapper where `combine` is wrapping addition.
///
/// - `combine = a.wrapping_add(b)`
/// - `empty = 0`
///
/// Addition modulo `2^bits` is still associative, so overflow yields
/// the wrapped value rather than a panic.
///
/// # Example
/// ```
/// use monoid::Monoid;
/// use monoid::Sum;
///
/// let total = Sum::concat([1, 2, 3, 4].map(Sum));
/// assert_eq!(total, Sum(10));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Sum<T>(pub T);

impl<T: WrappingAdd> Semigroup for Sum<T> {
    fn combine(&self, other: &Self) -> Self {
        Sum(self.0.wrapping_add(&other.0))
    }
}

impl<T: WrappingAdd + Zero> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::zero())
    }
}

impl<T: WrappingAdd + Zero> CommutativeMonoid for Sum<T> {}

// Product<T>: combine = *

/// Newtype wrapper where `combine` is wrapping multiplication.
///
/// - `combine = a.wrapping_mul(b)`
/// - `empty = 1`
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Product<T>(pub T);

impl<T: WrappingMul> Semigroup for Product<T> {
    fn combine(&self, other: &Self) -> Self {
        Product(self.0.wrapping_mul(&other.0))
    }
}

impl<T: WrappingMul + One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

impl<T: WrappingMul + One> CommutativeMonoid for Product<T> {}

// Max<T>: combine = max

/// Newtype wrapper for an `Ord` type where `combine` is `max`.
///
/// - `combine = max(a, b)`
/// - `empty = T::MIN` (when T: Bounded)
///
/// # Example
/// ```
/// use monoid::Max;
/// use monoid::Semigroup;
///
/// let a = Max(5);
/// let b = Max(10);
/// assert_eq!(a.combine(&b), Max(10));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Max<T>(pub T);

impl<T: Ord + Clone> Semigroup for Max<T> {
    fn combine(&self, other: &Self) -> Self {
        if self.0 >= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }
}

impl<T: Ord + Clone + Bounded> Monoid for Max<T> {
    fn empty() -> Self {
        Max(T::min_value())
    }
}

impl<T: Ord + Clone + Bounded> CommutativeMonoid for Max<T> {}

// Min<T>: combine = min

/// Newtype wrapper for an `Ord` type where `combine` is `min`.
///
/// - `combine = min(a, b)`
/// - `empty = T::MAX` (when T: Bounded)
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Min<T>(pub T);

impl<T: Ord + Clone> Semigroup for Min<T> {
    fn combine(&self, other: &Self) -> Self {
        if self.0 <= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }
}

impl<T: Ord + Clone + Bounded> Monoid for Min<T> {
    fn empty() -> Self {
        Min(T::max_value())
    }
}

impl<T: Ord + Clone + Bounded> CommutativeMonoid for Min<T> {}

// Any: combine = OR

/// Newtype wrapper for `bool` where `combine` is logical OR.
///
/// - `combine = a || b`
/// - `empty = false`
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn combine(&self, other: &Self) -> Self {
        Any(self.0 || other.0)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Any(false)
    }
}

impl CommutativeMonoid for Any {}

// All: combine = AND

/// Newtype wrapper for `bool` where `combine` is logical AND.
///
/// - `combine = a && b`
/// - `empty = true`
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize
)]
pub struct All(pub bool);

impl Semigroup for All {
    fn combine(&self, other: &Self) -> Self {
        All(self.0 && other.0)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        All(true)
    }
}

impl CommutativeMonoid for All {}

macro_rules! impl_wrapper_basics {
    ($($name:ident),*) => {
        $(
            impl<T> From<T> for $name<T> {
                fn from(value: T) -> Self {
                    $name(value)
                }
            }

            impl<T> $name<T> {
                /// Get the inner value.
                pub fn get(&self) -> &T {
                    &self.0
                }

                /// Consume the wrapper and return the inner value.
                pub fn into_inner(self) -> T {
                    self.0
                }
            }
        )*
    };
}

impl_wrapper_basics!(Sum, Product, Max, Min);

impl<T: WrappingAdd + Zero> Default for Sum<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: WrappingMul + One> Default for Product<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone + Bounded> Default for Max<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone + Bounded> Default for Min<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<bool> for Any {
    fn from(value: bool) -> Self {
        Any(value)
    }
}

impl From<bool> for All {
    fn from(value: bool) -> Self {
        All(value)
    }
}
