/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A lookup table from carrier type to combiner.
//!
//! Calling code that wants "the" combiner for a type, without
//! threading it through every signature, registers it once on a
//! [`Registry`] value and resolves it at the call site. There is no
//! process-global registry: resolution always goes through an explicit
//! `&Registry`.

use std::any::Any;
use std::any::TypeId;
use std::any::type_name;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::Combiner;
use super::concat_strings;
use super::reduce;
use super::sum;

/// A shared, type-erased combiner over `T`.
pub type SharedCombiner<T> = Arc<dyn Combiner<Value = T> + Send + Sync>;

/// Errors from registry lookups.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// No combiner is registered for the requested type.
    #[error("no combiner registered for `{type_name}`")]
    Missing {
        /// Name of the requested carrier type.
        type_name: &'static str,
    },
}

struct Entry {
    type_name: &'static str,
    // Always a `SharedCombiner<T>` for the `T` whose `TypeId` keys
    // this entry.
    combiner: Box<dyn Any + Send + Sync>,
}

/// Map from carrier type to its registered combiner.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<TypeId, Entry>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with string concatenation for `String` and addition
    /// for `i64` and `u64`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(concat_strings());
        registry.register(sum::<i64>());
        registry.register(sum::<u64>());
        registry
    }

    /// Register `combiner` for its carrier type, replacing any existing
    /// entry. Returns whether an entry was replaced.
    pub fn register<C>(&mut self, combiner: C) -> bool
    where
        C: Combiner + Send + Sync + 'static,
        C::Value: 'static,
    {
        let shared: SharedCombiner<C::Value> = Arc::new(combiner);
        let type_name = type_name::<C::Value>();
        let replaced = self
            .entries
            .insert(
                TypeId::of::<C::Value>(),
                Entry {
                    type_name,
                    combiner: Box::new(shared),
                },
            )
            .is_some();
        tracing::debug!(type_name, replaced, "registered combiner");
        replaced
    }

    /// Remove the combiner for `T`. Returns whether one was present.
    pub fn unregister<T: 'static>(&mut self) -> bool {
        self.entries.remove(&TypeId::of::<T>()).is_some()
    }

    /// Look up the combiner for `T`.
    pub fn get<T: 'static>(&self) -> Result<SharedCombiner<T>, RegistryError> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.combiner.downcast_ref::<SharedCombiner<T>>())
            .cloned()
            .ok_or_else(|| {
                let type_name = type_name::<T>();
                tracing::debug!(type_name, "combiner lookup miss");
                RegistryError::Missing { type_name }
            })
    }

    /// Is a combiner registered for `T`?
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Reduce `items` with the combiner registered for `T`.
    pub fn fold<T, I>(&self, items: I) -> Result<T, RegistryError>
    where
        T: 'static,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let combiner = self.get::<T>()?;
        Ok(reduce::fold(&combiner, items))
    }

    /// Names of the registered carrier types, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.type_name)
    }

    /// Number of registered combiners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}
