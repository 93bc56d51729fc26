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

use libcache_common::error::Result;

use super::Collection;
use crate::{
    collection::OrderedCollection,
    entry::{Entry, EntryRef},
    evictor::Evictor,
    registry::Registry,
};

/// Most recently used eviction order.
///
/// Shares the linking of [`Lru`](super::lru::Lru): new entries and hits go to the front. The victim is taken from the
/// front instead, so the entry touched last is discarded first. Suits cyclic scans larger than the cache, where the
/// entry just used is the one needed furthest in the future.
pub struct Mru<K, V> {
    collection: OrderedCollection<K, V>,
}

impl<K, V> Mru<K, V> {
    /// Registered name.
    pub const NAME: &'static str = "mru";

    /// Create an empty mru order.
    pub fn new() -> Self {
        Self {
            collection: OrderedCollection::new(),
        }
    }

    /// Create an empty mru order with room for `capacity` entries, `0` for none.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collection: OrderedCollection::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for Mru<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Collection<K, V> for Mru<K, V> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self) {
        self.collection.clear();
    }

    fn add(&mut self, entry: EntryRef<K, V>) {
        self.collection.push_front(entry);
    }

    fn promote(&mut self, entry: &Entry<K, V>) {
        self.collection.move_to_front(entry);
    }

    fn remove(&mut self, entry: &Entry<K, V>) {
        self.collection.remove(entry);
    }

    fn discard(&mut self) -> Option<EntryRef<K, V>> {
        self.collection.pop_front()
    }

    fn peek(&self) -> Option<&EntryRef<K, V>> {
        self.collection.front()
    }

    fn len(&self) -> usize {
        self.collection.len()
    }
}

/// Register [`Mru`] under [`Mru::NAME`].
pub fn register<K, V>(registry: &mut Registry<K, V>) -> Result<()>
where
    K: 'static,
    V: 'static,
{
    registry.register(Mru::<K, V>::NAME, |capacity| Evictor::new(Mru::with_capacity(capacity), capacity))
}
