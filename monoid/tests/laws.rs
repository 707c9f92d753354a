/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property tests: the monoid laws for the provided combiners and the
//! agreement of every reduction strategy.

use std::collections::HashMap;

use monoid::Combiner;
use monoid::FoldConfig;
use monoid::Max;
use monoid::MergeMap;
use monoid::Min;
use monoid::Monoid;
use monoid::Semigroup;
use monoid::Sum;
use monoid::canonical;
use monoid::concat_strings;
use monoid::fold;
use monoid::fold_map;
use monoid::fold_tree;
use monoid::laws;
use monoid::merge_with;
use monoid::pair;
use monoid::par_fold;
use monoid::par_fold_map;
use monoid::sum;
use monoid::triple;
use proptest::prelude::*;

fn small_ints(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..max_len)
}

fn words(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,4}", 0..max_len)
}

fn counts(max_len: usize) -> impl Strategy<Value = Vec<HashMap<u8, i64>>> {
    prop::collection::vec(
        prop::collection::hash_map(0u8..6, -100i64..100, 0..4),
        0..max_len,
    )
}

fn parallel(chunk_size: usize) -> FoldConfig {
    FoldConfig::default()
        .with_chunk_size(chunk_size)
        .with_parallel_threshold(0)
}

proptest! {
    #[test]
    fn sum_is_lawful(xs in small_ints(6)) {
        prop_assert_eq!(laws::check_all(&sum::<i64>(), &xs), Ok(()));
    }

    #[test]
    fn wrapping_sum_is_lawful(xs in prop::collection::vec(any::<i8>(), 0..6)) {
        prop_assert_eq!(laws::check_all(&sum::<i8>(), &xs), Ok(()));
    }

    #[test]
    fn concat_is_lawful(xs in words(6)) {
        prop_assert_eq!(laws::check_all(&concat_strings(), &xs), Ok(()));
    }

    #[test]
    fn max_and_min_are_lawful(xs in prop::collection::vec(any::<i32>(), 0..6)) {
        let maxes: Vec<_> = xs.iter().copied().map(Max).collect();
        let mins: Vec<_> = xs.iter().copied().map(Min).collect();
        prop_assert_eq!(laws::check_all(&canonical::<Max<i32>>(), &maxes), Ok(()));
        prop_assert_eq!(laws::check_all(&canonical::<Min<i32>>(), &mins), Ok(()));
    }

    #[test]
    fn pair_preserves_laws(xs in small_ints(5), ws in words(5)) {
        let rows: Vec<_> = xs.into_iter().zip(ws).collect();
        prop_assert_eq!(laws::check_all(&pair(sum::<i64>(), concat_strings()), &rows), Ok(()));
    }

    #[test]
    fn triple_preserves_laws(xs in small_ints(5)) {
        let rows: Vec<_> = xs.iter().map(|&x| (x, Max(x), x.to_string())).collect();
        let cap = triple(sum::<i64>(), canonical::<Max<i64>>(), concat_strings());
        prop_assert_eq!(laws::check_all(&cap, &rows), Ok(()));
    }

    #[test]
    fn merge_with_preserves_laws(maps in counts(5)) {
        prop_assert_eq!(laws::check_all(&merge_with::<u8, _>(sum::<i64>()), &maps), Ok(()));
    }

    #[test]
    fn nested_merge_with_preserves_laws(
        maps in prop::collection::vec(
            prop::collection::hash_map(0u8..3, prop::collection::hash_map(0u8..3, "[a-c]{0,2}", 0..3), 0..3),
            0..5,
        )
    ) {
        let cap = merge_with::<u8, _>(merge_with::<u8, _>(concat_strings()));
        prop_assert_eq!(laws::check_all(&cap, &maps), Ok(()));
    }

    #[test]
    fn merge_map_is_associative(maps in counts(4)) {
        let ms: Vec<MergeMap<u8, Sum<i64>>> = maps
            .into_iter()
            .map(|m| m.into_iter().map(|(k, v)| (k, Sum(v))).collect())
            .collect();
        for a in &ms {
            prop_assert_eq!(&MergeMap::empty().combine(a), a);
            prop_assert_eq!(&a.combine(&MergeMap::empty()), a);
            for b in &ms {
                for c in &ms {
                    prop_assert_eq!(a.combine(b).combine(c), a.combine(&b.combine(c)));
                }
            }
        }
    }

    #[test]
    fn merge_map_agrees_with_merge_with(maps in counts(8)) {
        let typed = MergeMap::concat(
            maps.iter().map(|m| m.iter().map(|(&k, &v)| (k, Sum(v))).collect::<MergeMap<_, _>>()),
        );
        let valued = fold(&merge_with::<u8, _>(sum::<i64>()), &maps);
        prop_assert_eq!(typed.len(), valued.len());
        for (k, v) in &valued {
            prop_assert_eq!(typed.get(k), Some(&Sum(*v)));
        }
    }

    #[test]
    fn any_split_point_agrees(xs in words(40), split in any::<prop::sample::Index>()) {
        let cap = concat_strings();
        let k = split.index(xs.len() + 1);
        let (left, right) = xs.split_at(k);
        prop_assert_eq!(cap.combine(&fold(&cap, left), &fold(&cap, right)), fold(&cap, &xs));
    }

    #[test]
    fn tree_fold_agrees(xs in words(64)) {
        prop_assert_eq!(fold_tree(&concat_strings(), &xs), fold(&concat_strings(), &xs));
    }

    #[test]
    fn par_fold_agrees(xs in words(300), chunk_size in 1usize..50) {
        let sequential = fold(&concat_strings(), &xs);
        prop_assert_eq!(par_fold(&concat_strings(), &xs, &parallel(chunk_size)), Ok(sequential));
    }

    #[test]
    fn par_fold_map_agrees(xs in small_ints(300), chunk_size in 1usize..50) {
        let cap = pair(sum::<i64>(), canonical::<Max<i64>>());
        let lift = |x: &i64| (*x, Max(*x));
        let sequential = fold_map(&cap, &xs, lift);
        prop_assert_eq!(par_fold_map(&cap, &xs, lift, &parallel(chunk_size)), Ok(sequential));
    }

    #[test]
    fn empty_reduction_is_identity(chunk_size in 1usize..8) {
        let cap = merge_with::<u8, _>(pair(sum::<i64>(), concat_strings()));
        prop_assert_eq!(fold(&cap, Vec::<HashMap<u8, (i64, String)>>::new()), cap.identity());
        prop_assert_eq!(par_fold(&cap, &[], &parallel(chunk_size)), Ok(cap.identity()));
    }
}
