/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Spot checks for the monoid laws on sample values.
//!
//! The laws quantify over every value of the carrier, so they cannot
//! be verified in general; these helpers only check the samples they
//! are given. Reductions never call them.

use std::fmt::Debug;

use super::Combiner;
use super::reduce::fold;
use super::reduce::fold_tree;

/// A law that failed on specific values. Values are rendered with
/// `Debug`.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LawViolation {
    /// `(a·b)·c != a·(b·c)`.
    #[error("associativity violated for {a}, {b}, {c}: (a·b)·c = {left}, a·(b·c) = {right}")]
    Associativity {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
        /// Third operand.
        c: String,
        /// `(a·b)·c`.
        left: String,
        /// `a·(b·c)`.
        right: String,
    },

    /// `identity·a != a`.
    #[error("left identity violated for {value}: identity·a = {got}")]
    LeftIdentity {
        /// The operand.
        value: String,
        /// What the combine produced.
        got: String,
    },

    /// `a·identity != a`.
    #[error("right identity violated for {value}: a·identity = {got}")]
    RightIdentity {
        /// The operand.
        value: String,
        /// What the combine produced.
        got: String,
    },

    /// Left-to-right and balanced-tree reductions disagree.
    #[error("grouping changed the result: left fold = {sequential}, tree fold = {tree}")]
    Grouping {
        /// Result of [`crate::fold`].
        sequential: String,
        /// Result of [`crate::fold_tree`].
        tree: String,
    },
}

/// Check `(a·b)·c == a·(b·c)`.
pub fn check_associativity<C>(
    cap: &C,
    a: &C::Value,
    b: &C::Value,
    c: &C::Value,
) -> Result<(), LawViolation>
where
    C: Combiner + ?Sized,
    C::Value: PartialEq + Debug,
{
    let left = cap.combine(&cap.combine(a, b), c);
    let right = cap.combine(a, &cap.combine(b, c));
    if left != right {
        return Err(LawViolation::Associativity {
            a: format!("{a:?}"),
            b: format!("{b:?}"),
            c: format!("{c:?}"),
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        });
    }
    Ok(())
}

/// Check `identity·a == a` and `a·identity == a`.
pub fn check_identity<C>(cap: &C, a: &C::Value) -> Result<(), LawViolation>
where
    C: Combiner + ?Sized,
    C::Value: PartialEq + Debug,
{
    let e = cap.identity();
    let got = cap.combine(&e, a);
    if &got != a {
        return Err(LawViolation::LeftIdentity {
            value: format!("{a:?}"),
            got: format!("{got:?}"),
        });
    }
    let got = cap.combine(a, &e);
    if &got != a {
        return Err(LawViolation::RightIdentity {
            value: format!("{a:?}"),
            got: format!("{got:?}"),
        });
    }
    Ok(())
}

/// Check that [`crate::fold`] and [`crate::fold_tree`] agree on
/// `samples`.
pub fn check_grouping<C>(cap: &C, samples: &[C::Value]) -> Result<(), LawViolation>
where
    C: Combiner + ?Sized,
    C::Value: PartialEq + Debug,
{
    let sequential = fold(cap, samples);
    let tree = fold_tree(cap, samples);
    if sequential != tree {
        return Err(LawViolation::Grouping {
            sequential: format!("{sequential:?}"),
            tree: format!("{tree:?}"),
        });
    }
    Ok(())
}

/// Run every check over `samples`: identity for each value,
/// associativity for every ordered triple, and grouping agreement for
/// the whole slice. Returns the first violation found.
///
/// Associativity is cubic in `samples.len()`.
///
/// ```
/// use monoid::from_fn;
/// use monoid::laws;
/// use monoid::sum;
///
/// assert!(laws::check_all(&sum::<i32>(), &[-3, 0, 1, 7]).is_ok());
///
/// let minus = from_fn(0, |a: &i32, b: &i32| a - b);
/// assert!(laws::check_all(&minus, &[1, 2, 3]).is_err());
/// ```
pub fn check_all<C>(cap: &C, samples: &[C::Value]) -> Result<(), LawViolation>
where
    C: Combiner + ?Sized,
    C::Value: PartialEq + Debug,
{
    for a in samples {
        check_identity(cap, a)?;
    }
    for a in samples {
        for b in samples {
            for c in samples {
                check_associativity(cap, a, b, c)?;
            }
        }
    }
    check_grouping(cap, samples)
}
