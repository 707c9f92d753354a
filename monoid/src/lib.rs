/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Monoids and the reductions they make possible.
//!
//! A monoid is an associative operation with an identity element.
//! That is exactly what it takes to reduce any finite sequence to one
//! value: the identity answers the empty case, and associativity lets
//! the reduction regroup freely (left to right, as a balanced tree, or
//! in parallel chunks) without changing the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use monoid::concat_strings;
//! use monoid::fold;
//! use monoid::pair;
//! use monoid::sum;
//!
//! assert_eq!(fold(&sum::<i32>(), Vec::<i32>::new()), 0);
//! assert_eq!(fold(&sum::<i32>(), [1i32, 2, 3, 4]), 10);
//!
//! // Two metrics, one traversal.
//! let rows = [(1i32, "I".to_string()), (2, "love".to_string()), (3, "x".to_string())];
//! let both = pair(sum::<i32>(), concat_strings());
//! assert_eq!(fold(&both, &rows), (6, "Ilovex".to_string()));
//! ```
//!
//! # Two ways to name a monoid
//!
//! - **Type-level**: [`Semigroup`] and [`Monoid`] attach the canonical
//!   operation to a type. Newtypes ([`Sum`], [`Product`], [`Max`],
//!   [`Min`], [`Any`], [`All`]) select among the several lawful
//!   monoids a plain type can carry. Tuples, `Option`, `String`,
//!   `Vec`, sets and [`MergeMap`] are provided.
//!
//! - **Value-level**: a [`Combiner`] is an ordinary value holding the
//!   operation and identity. Every reduction takes one explicitly, so
//!   the same carrier can be reduced in different ways and combiners
//!   can be assembled at runtime with [`from_fn`], [`pair`],
//!   [`triple`] and [`merge_with`]. [`canonical`] bridges a
//!   type-level monoid into a combiner.
//!
//! # Reductions
//!
//! - [`fold`]: left to right, seeded with the identity.
//! - [`fold_map`]: map each element into the carrier and fold, in one
//!   pass.
//! - [`fold_tree`]: balanced divide and conquer.
//! - [`par_fold`] / [`par_fold_map`]: contiguous chunks reduced on the
//!   rayon pool, tuned by [`FoldConfig`].
//!
//! # Laws
//!
//! For every `a`, `b`, `c`:
//!
//! - **Closure**: `combine(a, b)` is a value of the carrier
//! - **Associative**: `combine(combine(a, b), c) == combine(a, combine(b, c))`
//! - **Identity**: `combine(identity, a) == a == combine(a, identity)`
//!
//! These are contracts, not runtime checks. A combiner that breaks
//! them yields wrong aggregates rather than errors. [`laws`] can spot
//! check a combiner on sample values.
//!
//! # Multi-dimensional aggregation
//!
//! ```
//! use monoid::Monoid;
//! use monoid::MergeMap;
//! use monoid::Sum;
//!
//! type ByCategory = MergeMap<&'static str, Sum<u32>>;
//! type ByDay = MergeMap<u32, ByCategory>;
//!
//! let events = [(1, "click"), (1, "view"), (2, "click"), (1, "click")];
//! let stats = ByDay::concat(
//!     events
//!         .iter()
//!         .map(|&(day, cat)| ByDay::singleton(day, ByCategory::singleton(cat, Sum(1)))),
//! );
//! assert_eq!(stats.get(&1).and_then(|d| d.get(&"click")), Some(&Sum(2)));
//! ```

mod combiner;
mod compose;
mod config;
pub mod laws;
mod merge_map;
mod monoid;
mod parallel;
mod primitives;
mod reduce;
mod registry;
mod semigroup;

pub use combiner::Canonical;
pub use combiner::Combiner;
pub use combiner::FnCombiner;
pub use combiner::canonical;
pub use combiner::concat_strings;
pub use combiner::from_fn;
pub use combiner::sum;
pub use compose::MergeWith;
pub use compose::Pair;
pub use compose::Triple;
pub use compose::merge_with;
pub use compose::pair;
pub use compose::triple;
pub use config::CHUNK_SIZE_ENV;
pub use config::FoldConfig;
pub use config::PARALLEL_THRESHOLD_ENV;
pub use laws::LawViolation;
pub use merge_map::MergeMap;
pub use monoid::CommutativeMonoid;
pub use monoid::Monoid;
pub use parallel::FoldError;
pub use parallel::par_fold;
pub use parallel::par_fold_map;
pub use primitives::All;
pub use primitives::Any;
pub use primitives::Max;
pub use primitives::Min;
pub use primitives::Product;
pub use primitives::Sum;
pub use reduce::fold;
pub use reduce::fold_map;
pub use reduce::fold_tree;
pub use registry::Registry;
pub use registry::RegistryError;
pub use registry::SharedCombiner;
pub use semigroup::Semigroup;
