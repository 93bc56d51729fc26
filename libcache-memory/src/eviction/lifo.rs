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

/// Last in, first out eviction order.
///
/// Hits do not reorder entries. The victim is always the entry inserted last.
pub struct Lifo<K, V> {
    collection: OrderedCollection<K, V>,
}

impl<K, V> Lifo<K, V> {
    /// Registered name.
    pub const NAME: &'static str = "lifo";

    /// Create an empty lifo order.
    pub fn new() -> Self {
        Self {
            collection: OrderedCollection::new(),
        }
    }

    /// Create an empty lifo order with room for `capacity` entries, `0` for none.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collection: OrderedCollection::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for Lifo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Collection<K, V> for Lifo<K, V> {
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
        self.collection.assert_linked(entry);
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

/// Register [`Lifo`] under [`Lifo::NAME`].
pub fn register<K, V>(registry: &mut Registry<K, V>) -> Result<()>
where
    K: 'static,
    V: 'static,
{
    registry.register(Lifo::<K, V>::NAME, |capacity| Evictor::new(Lifo::with_capacity(capacity), capacity))
}
