/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Tuning for parallel reductions.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable                          | Field                |
//! |-----------------------------------|----------------------|
//! | `MONOID_FOLD_CHUNK_SIZE`          | `chunk_size`         |
//! | `MONOID_FOLD_PARALLEL_THRESHOLD`  | `parallel_threshold` |

use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Environment variable overriding [`FoldConfig::chunk_size`].
pub const CHUNK_SIZE_ENV: &str = "MONOID_FOLD_CHUNK_SIZE";

/// Environment variable overriding [`FoldConfig::parallel_threshold`].
pub const PARALLEL_THRESHOLD_ENV: &str = "MONOID_FOLD_PARALLEL_THRESHOLD";

/// Configuration for [`crate::par_fold`] and [`crate::par_fold_map`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    /// Number of contiguous elements reduced by one task. Must be
    /// non-zero.
    pub chunk_size: usize,

    /// Inputs shorter than this are reduced on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            parallel_threshold: 4096,
        }
    }
}

impl FoldConfig {
    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the parallel threshold.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Defaults, overridden by any of the `MONOID_FOLD_*` environment
    /// variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each
    /// variable name. Values that fail to parse are logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        override_from(&lookup, CHUNK_SIZE_ENV, &mut config.chunk_size);
        override_from(&lookup, PARALLEL_THRESHOLD_ENV, &mut config.parallel_threshold);
        config
    }
}

fn override_from<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, slot: &mut T)
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(name) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => {
            tracing::debug!(var = name, %value, "fold config override");
            *slot = value;
        }
        Err(e) => {
            tracing::warn!(
                "failed to override fold config from value \"{}\" in ${}: {}; keeping {}",
                raw,
                name,
                e,
                slot,
            );
        }
    }
}
