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

/// First in, first out eviction order.
///
/// Hits do not reorder entries. The victim is always the entry inserted earliest.
pub struct Fifo<K, V> {
    collection: OrderedCollection<K, V>,
}

impl<K, V> Fifo<K, V> {
    /// Registered name.
    pub const NAME: &'static str = "fifo";

    /// Create an empty fifo order.
    pub fn new() -> Self {
        Self {
            collection: OrderedCollection::new(),
        }
    }

    /// Create an empty fifo order with room for `capacity` entries, `0` for none.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collection: OrderedCollection::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for Fifo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Collection<K, V> for Fifo<K, V> {
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
        self.collection.pop_back()
    }

    fn peek(&self) -> Option<&EntryRef<K, V>> {
        self.collection.back()
    }

    fn len(&self) -> usize {
        self.collection.len()
    }
}

/// Register [`Fifo`] under [`Fifo::NAME`].
pub fn register<K, V>(registry: &mut Registry<K, V>) -> Result<()>
where
    K: 'static,
    V: 'static,
{
    registry.register(Fifo::<K, V>::NAME, |capacity| Evictor::new(Fifo::with_capacity(capacity), capacity))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::eviction::test_utils::{assert_ptr_eq, entries, fuzz, touch_by_key, Dump, Shape};

    impl Dump for Fifo<u64, u64> {
        type Output = Vec<u64>;

        fn dump(&self) -> Self::Output {
            self.collection.iter().map(|e| *e.key()).collect_vec()
        }
    }

    type TestFifo = Fifo<u64, u64>;

    #[test]
    fn test_fifo() {
        let es = entries(0..8);
        let r = |i: usize| es[i].clone();
        let mut fifo = TestFifo::new();

        fifo.add(r(0));
        fifo.add(r(1));
        fifo.add(r(2));
        fifo.add(r(3));

        assert_ptr_eq(&fifo.discard().unwrap(), &es[0]);
        assert_ptr_eq(&fifo.discard().unwrap(), &es[1]);

        fifo.add(r(4));
        fifo.add(r(5));
        fifo.add(r(6));

        fifo.remove(&es[3]);
        fifo.remove(&es[4]);
        fifo.remove(&es[5]);

        assert_ptr_eq(&fifo.discard().unwrap(), &es[2]);
        assert_ptr_eq(&fifo.discard().unwrap(), &es[6]);
        assert!(fifo.discard().is_none());
    }

    #[test]
    fn test_fifo_ignores_promotion() {
        let mut fifo = TestFifo::new();
        let es = touch_by_key(&mut fifo);
        assert_eq!(fifo.dump(), vec![3, 2, 1]);
        assert_ptr_eq(&fifo.discard().unwrap(), &es[0]);
    }

    #[test]
    #[should_panic(expected = "entry is not linked into this collection")]
    fn test_fifo_promote_discarded() {
        let es = entries(0..1);
        let mut fifo = TestFifo::new();
        fifo.add(es[0].clone());
        fifo.discard();
        fifo.promote(&es[0]);
    }

    #[test]
    fn test_fifo_fuzzy() {
        let shape = Shape {
            promote_to_front: false,
            discard_from_front: false,
        };
        for seed in 0..4 {
            fuzz(&mut TestFifo::new(), shape, seed);
        }
    }
}
