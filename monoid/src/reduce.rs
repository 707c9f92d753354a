/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Sequential reductions driven by an explicit [`Combiner`].

use std::borrow::Borrow;

use super::Combiner;

/// Reduce `items` left to right, seeded with `cap.identity()`.
///
/// An empty input yields the identity. Items may be owned values or
/// references to them; the input is never mutated.
///
/// ```
/// use monoid::concat_strings;
/// use monoid::fold;
///
/// let words = ["I", "love", "x"].map(String::from);
/// assert_eq!(fold(&concat_strings(), &words), "Ilovex");
/// ```
pub fn fold<C, I>(cap: &C, items: I) -> C::Value
where
    C: Combiner + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<C::Value>,
{
    items
        .into_iter()
        .fold(cap.identity(), |acc, x| cap.combine(&acc, x.borrow()))
}

/// Map every element into the combiner's carrier and reduce, in a
/// single pass.
///
/// Equivalent to `fold(cap, items.map(f))`; `f` must be pure.
///
/// ```
/// use monoid::fold_map;
/// use monoid::sum;
///
/// let words = ["I", "love", "x"];
/// assert_eq!(fold_map(&sum::<usize>(), words, str::len), 6);
/// ```
pub fn fold_map<C, I, F>(cap: &C, items: I, mut f: F) -> C::Value
where
    C: Combiner + ?Sized,
    I: IntoIterator,
    F: FnMut(I::Item) -> C::Value,
{
    items
        .into_iter()
        .fold(cap.identity(), |acc, x| cap.combine(&acc, &f(x)))
}

/// Reduce a slice by recursive halving: `(x1·x2)·(x3·x4)` rather than
/// `((x1·x2)·x3)·x4`. Agrees with [`fold`] whenever `cap` is lawful.
pub fn fold_tree<C>(cap: &C, items: &[C::Value]) -> C::Value
where
    C: Combiner + ?Sized,
{
    match items {
        [] => cap.identity(),
        [x] => cap.combine(&cap.identity(), x),
        _ => {
            let (left, right) = items.split_at(items.len() / 2);
            cap.combine(&fold_tree(cap, left), &fold_tree(cap, right))
        }
    }
}
