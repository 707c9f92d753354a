/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Chunked parallel reduction on the rayon thread pool.
//!
//! The input slice is cut into contiguous chunks, each chunk is folded
//! independently, and the partial results are combined in sequence
//! order. Associativity is the only requirement: the combiner need not
//! be commutative, and the result equals [`crate::fold`] on the same
//! input.

use rayon::prelude::*;

use super::Combiner;
use super::FoldConfig;
use super::reduce::fold;
use super::reduce::fold_map;

/// Errors from parallel reductions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FoldError {
    /// The configured chunk size cannot partition the input.
    #[error("invalid chunk size {chunk_size}: must be non-zero")]
    InvalidChunkSize {
        /// The offending chunk size.
        chunk_size: usize,
    },
}

fn validate(config: &FoldConfig) -> Result<(), FoldError> {
    if config.chunk_size == 0 {
        return Err(FoldError::InvalidChunkSize {
            chunk_size: config.chunk_size,
        });
    }
    Ok(())
}

fn plan(len: usize, config: &FoldConfig) -> bool {
    let parallel = len >= config.parallel_threshold;
    tracing::trace!(
        len,
        chunk_size = config.chunk_size,
        chunks = len.div_ceil(config.chunk_size),
        parallel,
        "planning fold"
    );
    parallel
}

/// Reduce `items` with `cap`, splitting the work across the rayon
/// pool when the input reaches `config.parallel_threshold`.
///
/// ```
/// use monoid::FoldConfig;
/// use monoid::par_fold;
/// use monoid::sum;
///
/// let xs: Vec<u64> = (1..=10_000).collect();
/// let config = FoldConfig::default().with_chunk_size(100).with_parallel_threshold(0);
/// assert_eq!(par_fold(&sum::<u64>(), &xs, &config).unwrap(), 50_005_000);
/// ```
pub fn par_fold<C>(cap: &C, items: &[C::Value], config: &FoldConfig) -> Result<C::Value, FoldError>
where
    C: Combiner + Sync + ?Sized,
    C::Value: Send + Sync,
{
    validate(config)?;
    if !plan(items.len(), config) {
        return Ok(fold(cap, items));
    }
    Ok(items
        .par_chunks(config.chunk_size)
        .map(|chunk| fold(cap, chunk))
        .reduce(|| cap.identity(), |a, b| cap.combine(&a, &b)))
}

/// Parallel counterpart of [`crate::fold_map`]: each chunk is mapped
/// and folded in one pass, then partial results are combined in order.
pub fn par_fold_map<C, A, F>(
    cap: &C,
    items: &[A],
    f: F,
    config: &FoldConfig,
) -> Result<C::Value, FoldError>
where
    C: Combiner + Sync + ?Sized,
    C::Value: Send,
    A: Sync,
    F: Fn(&A) -> C::Value + Sync,
{
    validate(config)?;
    if !plan(items.len(), config) {
        return Ok(fold_map(cap, items, &f));
    }
    Ok(items
        .par_chunks(config.chunk_size)
        .map(|chunk| fold_map(cap, chunk, &f))
        .reduce(|| cap.identity(), |a, b| cap.combine(&a, &b)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::concat_strings;
    use crate::merge_with;
    use crate::pair;
    use crate::sum;

    fn always_parallel(chunk_size: usize) -> FoldConfig {
        FoldConfig::default()
            .with_chunk_size(chunk_size)
            .with_parallel_threshold(0)
    }

    #[test]
    fn empty_input_is_identity() {
        let config = always_parallel(4);
        assert_eq!(par_fold(&sum::<i32>(), &[], &config), Ok(0));
        assert_eq!(
            par_fold_map(&concat_strings(), &[] as &[u8], |b| b.to_string(), &config),
            Ok(String::new())
        );
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let config = always_parallel(0);
        assert_eq!(
            par_fold(&sum::<i32>(), &[1, 2, 3], &config),
            Err(FoldError::InvalidChunkSize { chunk_size: 0 })
        );
        // Rejected even when the input would be folded sequentially.
        let config = FoldConfig::default().with_chunk_size(0);
        assert!(par_fold_map(&sum::<i32>(), &[1], |x| *x, &config).is_err());
    }

    #[test]
    fn non_commutative_order_is_preserved() {
        let words: Vec<String> = (0..500).map(|i| format!("{i},")).collect();
        let expected = fold(&concat_strings(), &words);
        for chunk_size in [1, 3, 7, 64, 499, 500, 1000] {
            let got = par_fold(&concat_strings(), &words, &always_parallel(chunk_size)).unwrap();
            assert_eq!(got, expected, "chunk_size = {chunk_size}");
        }
    }

    #[test]
    fn overflow_wraps_in_every_chunk() {
        let config = always_parallel(1);
        assert_eq!(par_fold(&sum::<i32>(), &[i32::MAX, 1], &config), Ok(i32::MIN));
        assert_eq!(par_fold(&sum::<u8>(), &[200u8, 100], &config), Ok(44));
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(
            par_fold(&sum::<u8>(), &bytes, &always_parallel(7)),
            Ok(fold(&sum::<u8>(), &bytes))
        );
    }

    #[test]
    fn small_inputs_stay_sequential() {
        let config = FoldConfig::default().with_chunk_size(1).with_parallel_threshold(100);
        assert_eq!(par_fold(&sum::<i32>(), &[1, 2, 3, 4], &config), Ok(10));
    }

    type DayStats = (u64, HashMap<u32, HashMap<&'static str, u64>>);

    fn observe(&(day, category): &(u32, &'static str)) -> DayStats {
        (1, HashMap::from([(day, HashMap::from([(category, 1)]))]))
    }

    #[test]
    fn par_fold_map_matches_fold_map() {
        let events: Vec<(u32, &'static str)> = (0..2000)
            .map(|i| (i % 7, if i % 3 == 0 { "click" } else { "view" }))
            .collect();
        let cap = pair(
            sum::<u64>(),
            merge_with::<u32, _>(merge_with::<&'static str, _>(sum::<u64>())),
        );
        let sequential = fold_map(&cap, &events, observe);
        let parallel = par_fold_map(&cap, &events, observe, &always_parallel(33)).unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.0, 2000);
        assert_eq!(parallel.1.len(), 7);
    }

    #[test]
    fn error_message_names_chunk_size() {
        let err = FoldError::InvalidChunkSize { chunk_size: 0 };
        assert_eq!(err.to_string(), "invalid chunk size 0: must be non-zero");
    }
}
