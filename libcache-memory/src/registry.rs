// Copyright 2026 libcache Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Debug;

use hashbrown::{hash_map::Entry as HashMapEntry, HashMap};
use itertools::Itertools;
use libcache_common::error::{Error, Result};

use crate::{
    eviction::{fifo, lifo, lru, mru},
    evictor::Evictor,
};

/// Builds an [`Evictor`] with the given capacity.
pub type Constructor<K, V> = fn(usize) -> Evictor<K, V>;

/// Table from eviction policy names to their constructors.
///
/// Every policy module exposes a `register` function that adds itself, so new policies are added without touching the
/// registry. The registry is built once at startup and handed to whatever builds caches; a name is resolved once per
/// cache construction.
pub struct Registry<K, V> {
    constructors: HashMap<String, Constructor<K, V>>,
}

impl<K, V> Debug for Registry<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("policies", &self.names().collect_vec()).finish()
    }
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }
}

impl<K, V> Registry<K, V>
where
    K: 'static,
    V: 'static,
{
    /// Create a registry with `lru`, `mru`, `fifo` and `lifo` registered.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::default();
        lru::register(&mut registry)?;
        mru::register(&mut registry)?;
        fifo::register(&mut registry)?;
        lifo::register(&mut registry)?;
        Ok(registry)
    }
}

impl<K, V> Registry<K, V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under a name.
    ///
    /// A name can only be registered once.
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor<K, V>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Config("eviction policy name must not be empty".to_string()));
        }
        match self.constructors.entry(name) {
            HashMapEntry::Occupied(o) => Err(Error::DuplicatePolicy(o.key().clone())),
            HashMapEntry::Vacant(v) => {
                tracing::debug!("[registry]: register eviction policy {:?}", v.key());
                v.insert(constructor);
                Ok(())
            }
        }
    }

    /// Get the constructor registered under the name.
    pub fn lookup(&self, name: &str) -> Option<Constructor<K, V>> {
        self.constructors.get(name).copied()
    }

    /// Build an evictor with the policy registered under the name.
    pub fn build(&self, name: &str, capacity: usize) -> Result<Evictor<K, V>> {
        match self.lookup(name) {
            Some(constructor) => Ok(constructor(capacity)),
            None => {
                tracing::warn!("[registry]: unknown eviction policy {:?}", name);
                Err(Error::unknown_policy(name, self.names()))
            }
        }
    }

    /// Returns `true` if a policy is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.constructors.keys().map(String::as_str).sorted()
    }

    /// Registered policy count.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Returns `true` if no policy is registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}
