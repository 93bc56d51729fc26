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

use std::{
    fmt::Debug,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    rc::Rc,
};

use ahash::RandomState;
use equivalent::Equivalent;
use libcache_common::{
    code::{Key, Value},
    strict_assert, strict_assert_eq,
    error::Result,
    event::{DefaultEventListener, Event, EventListener},
};
use serde::{Deserialize, Serialize};

use crate::{
    entry::{Entry, EntryRef},
    eviction::lru::Lru,
    evictor::Evictor,
    indexer::HashTableIndexer,
    registry::Registry,
};

/// Serializable cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entry capacity, `0` for unbounded.
    pub capacity: usize,
    /// Name of the eviction policy in the [`Registry`].
    pub policy: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            policy: Lru::<(), ()>::NAME.to_string(),
        }
    }
}

/// Builder of [`Cache`].
pub struct CacheBuilder<K, V, L, S>
where
    K: Key,
    V: Value,
    L: EventListener<Key = K, Value = V>,
    S: BuildHasher,
{
    capacity: usize,
    policy: String,
    event_listener: L,
    hash_builder: S,
    _marker: PhantomData<(K, V)>,
}

impl<K, V> CacheBuilder<K, V, DefaultEventListener<K, V>, RandomState>
where
    K: Key,
    V: Value,
{
    /// Start building a cache holding at most `capacity` entries, `0` for unbounded.
    ///
    /// The default eviction policy is `lru`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: Lru::<K, V>::NAME.to_string(),
            event_listener: DefaultEventListener::default(),
            hash_builder: RandomState::default(),
            _marker: PhantomData,
        }
    }
}

impl<K, V> From<CacheConfig> for CacheBuilder<K, V, DefaultEventListener<K, V>, RandomState>
where
    K: Key,
    V: Value,
{
    fn from(config: CacheConfig) -> Self {
        Self::new(config.capacity).with_policy(config.policy)
    }
}

impl<K, V, L, S> CacheBuilder<K, V, L, S>
where
    K: Key,
    V: Value,
    L: EventListener<Key = K, Value = V>,
    S: BuildHasher,
{
    /// Set the name of the eviction policy, resolved against the registry on [`CacheBuilder::build`].
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Set cache event listener.
    pub fn with_event_listener<OL>(self, event_listener: OL) -> CacheBuilder<K, V, OL, S>
    where
        OL: EventListener<Key = K, Value = V>,
    {
        CacheBuilder {
            capacity: self.capacity,
            policy: self.policy,
            event_listener,
            hash_builder: self.hash_builder,
            _marker: PhantomData,
        }
    }

    /// Set cache hash builder.
    pub fn with_hash_builder<OS>(self, hash_builder: OS) -> CacheBuilder<K, V, L, OS>
    where
        OS: BuildHasher,
    {
        CacheBuilder {
            capacity: self.capacity,
            policy: self.policy,
            event_listener: self.event_listener,
            hash_builder,
            _marker: PhantomData,
        }
    }

    /// Build the cache, resolving the eviction policy by name.
    pub fn build(self, registry: &Registry<K, V>) -> Result<Cache<K, V, L, S>> {
        let evictor = registry.build(&self.policy, self.capacity)?;
        tracing::debug!(
            "[cache]: build cache with policy {}, capacity {}",
            evictor.policy(),
            evictor.capacity()
        );
        Ok(Cache {
            indexer: HashTableIndexer::default(),
            evictor,
            hash_builder: self.hash_builder,
            event_listener: self.event_listener,
        })
    }
}

/// Single-threaded key-value cache with a pluggable eviction policy.
///
/// Keys are indexed by hash; the eviction order is kept by the [`Evictor`] the registry built for the configured
/// policy. Entries leaving the cache are reported to the [`EventListener`].
pub struct Cache<K, V, L = DefaultEventListener<K, V>, S = RandomState>
where
    K: Key,
    V: Value,
    L: EventListener<Key = K, Value = V>,
    S: BuildHasher,
{
    indexer: HashTableIndexer<K, V>,
    evictor: Evictor<K, V>,
    hash_builder: S,
    event_listener: L,
}

impl<K, V, L, S> Debug for Cache<K, V, L, S>
where
    K: Key,
    V: Value,
    L: EventListener<Key = K, Value = V>,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("evictor", &self.evictor)
            .field("len", &self.len())
            .finish()
    }
}

impl<K, V, L, S> Cache<K, V, L, S>
where
    K: Key,
    V: Value,
    L: EventListener<Key = K, Value = V>,
    S: BuildHasher,
{
    /// Insert an entry, replacing the entry with the same key.
    ///
    /// Victims discarded to make room are reported as [`Event::Evict`], a replaced entry as [`Event::Replace`].
    pub fn insert(&mut self, key: K, value: V) -> EntryRef<K, V> {
        let hash = self.hash_builder.hash_one(&key);
        let entry = Rc::new(Entry::new(key, value));

        if let Some(old) = self.indexer.insert(hash, entry.clone()) {
            self.evictor.forget(&old);
            tracing::trace!("[cache]: replace entry (hash: {hash})");
            self.event_listener.on_leave(Event::Replace, old.key(), old.value());
        }

        for victim in self.evictor.admit(entry.clone()) {
            let hash = self.hash_builder.hash_one(victim.key());
            let removed = self.indexer.remove_entry(hash, &victim);
            strict_assert!(removed.is_some());
            self.event_listener.on_leave(Event::Evict, victim.key(), victim.value());
        }
        strict_assert_eq!(self.indexer.len(), self.evictor.len());

        entry
    }

    /// Get the value of the key and record the hit.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        let entry = self.indexer.get(hash, key)?;
        self.evictor.touch(entry);
        Some(entry.value())
    }

    /// Get the value of the key without recording a hit.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.indexer.get(hash, key).map(|entry| entry.value())
    }

    /// Returns `true` if the key is cached. Does not record a hit.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.peek(key).is_some()
    }

    /// Remove the entry of the key.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<EntryRef<K, V>>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        let entry = self.indexer.remove(hash, key)?;
        self.evictor.forget(&entry);
        strict_assert_eq!(self.indexer.len(), self.evictor.len());
        self.event_listener.on_leave(Event::Remove, entry.key(), entry.value());
        Some(entry)
    }

    /// Change the capacity, evicting entries that no longer fit.
    pub fn resize(&mut self, capacity: usize) {
        for victim in self.evictor.resize(capacity) {
            let hash = self.hash_builder.hash_one(victim.key());
            self.indexer.remove_entry(hash, &victim);
            self.event_listener.on_leave(Event::Evict, victim.key(), victim.value());
        }
    }

    /// Remove every entry.
    pub fn purge(&mut self) {
        self.evictor.purge();
        for entry in self.indexer.drain() {
            self.event_listener.on_leave(Event::Clear, entry.key(), entry.value());
        }
    }

    /// Iterate cached keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.indexer.iter().map(|entry| entry.key())
    }

    /// Cached entry count.
    pub fn len(&self) -> usize {
        self.indexer.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.indexer.is_empty()
    }

    /// Entry capacity, `0` for unbounded.
    pub fn capacity(&self) -> usize {
        self.evictor.capacity()
    }

    /// Name of the eviction policy.
    pub fn policy(&self) -> &'static str {
        self.evictor.policy()
    }
}
