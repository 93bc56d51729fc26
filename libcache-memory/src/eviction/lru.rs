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

/// Least recently used eviction order.
///
/// New entries are linked at the front and every hit promotes the entry back to the front, so the back always holds
/// the entry that has gone longest without an access. That entry is the victim.
pub struct Lru<K, V> {
    collection: OrderedCollection<K, V>,
}

impl<K, V> Lru<K, V> {
    /// Registered name.
    pub const NAME: &'static str = "lru";

    /// Create an empty lru order.
    pub fn new() -> Self {
        Self {
            collection: OrderedCollection::new(),
        }
    }

    /// Create an empty lru order with room for `capacity` entries, `0` for none.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collection: OrderedCollection::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for Lru<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Collection<K, V> for Lru<K, V> {
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
        self.collection.pop_back()
    }

    fn peek(&self) -> Option<&EntryRef<K, V>> {
        self.collection.back()
    }

    fn len(&self) -> usize {
        self.collection.len()
    }
}

/// Register [`Lru`] under [`Lru::NAME`].
pub fn register<K, V>(registry: &mut Registry<K, V>) -> Result<()>
where
    K: 'static,
    V: 'static,
{
    registry.register(Lru::<K, V>::NAME, |capacity| Evictor::new(Lru::with_capacity(capacity), capacity))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::eviction::test_utils::{assert_ptr_eq, entries, fuzz, touch_by_key, Dump, Shape};

    impl Dump for Lru<u64, u64> {
        type Output = Vec<u64>;

        fn dump(&self) -> Self::Output {
            self.collection.iter().map(|e| *e.key()).collect_vec()
        }
    }

    type TestLru = Lru<u64, u64>;

    #[test]
    fn test_lru() {
        let es = entries(0..8);
        let r = |i: usize| es[i].clone();
        let mut lru = TestLru::new();

        // 3, 2, 1, 0
        lru.add(r(0));
        lru.add(r(1));
        lru.add(r(2));
        lru.add(r(3));
        assert_eq!(lru.dump(), vec![3, 2, 1, 0]);
        assert_eq!(lru.len(), 4);

        // 1, 3, 2, 0
        lru.promote(&es[1]);
        assert_eq!(lru.dump(), vec![1, 3, 2, 0]);

        // 1, 3, 2
        assert_ptr_eq(lru.peek().unwrap(), &es[0]);
        assert_ptr_eq(&lru.discard().unwrap(), &es[0]);
        assert!(!es[0].is_linked());
        assert_eq!(lru.dump(), vec![1, 3, 2]);

        // 4, 1, 2
        lru.add(r(4));
        lru.remove(&es[3]);
        assert_eq!(lru.dump(), vec![4, 1, 2]);
        assert_eq!(lru.len(), 3);

        // 2, 4, 1
        lru.promote(&es[2]);
        assert_ptr_eq(&lru.discard().unwrap(), &es[1]);
        assert_ptr_eq(&lru.discard().unwrap(), &es[4]);
        assert_ptr_eq(&lru.discard().unwrap(), &es[2]);
        assert!(lru.discard().is_none());
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_touch_by_key() {
        let mut lru = TestLru::new();
        let es = touch_by_key(&mut lru);
        assert_eq!(lru.dump(), vec![3, 2, 1]);

        // The entry promoted longest ago is the victim.
        assert_ptr_eq(&lru.discard().unwrap(), &es[0]);
        lru.remove(&es[1]);
        assert_eq!(lru.len(), 1);
        assert_ptr_eq(lru.peek().unwrap(), &es[2]);
    }

    #[test]
    fn test_lru_promoted_entry_outlives_others() {
        let es = entries(0..5);
        let mut lru = TestLru::new();
        for e in es.iter() {
            lru.add(e.clone());
        }
        lru.promote(&es[0]);

        let order = std::iter::from_fn(|| lru.discard()).map(|e| *e.key()).collect_vec();
        assert_eq!(order, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_lru_with_capacity_grows() {
        let es = entries(0..4);
        let mut lru = TestLru::with_capacity(2);
        for e in es.iter() {
            lru.add(e.clone());
        }
        assert_eq!(lru.dump(), vec![3, 2, 1, 0]);
        assert_ptr_eq(&lru.discard().unwrap(), &es[0]);
    }

    #[test]
    fn test_lru_init() {
        let es = entries(0..3);
        let mut lru = TestLru::new();
        lru.init();
        assert!(lru.discard().is_none());

        for e in es.iter() {
            lru.add(e.clone());
        }
        lru.init();
        assert_eq!(lru.len(), 0);
        assert!(lru.discard().is_none());
        assert!(es.iter().all(|e| !e.is_linked()));

        // Entries can be linked again after a reset.
        lru.add(es[1].clone());
        assert_eq!(lru.dump(), vec![1]);
    }

    #[test]
    #[should_panic(expected = "entry is not linked into this collection")]
    fn test_lru_promote_after_init() {
        let es = entries(0..1);
        let mut lru = TestLru::new();
        lru.add(es[0].clone());
        lru.init();
        lru.promote(&es[0]);
    }

    #[test]
    fn test_lru_fuzzy() {
        let shape = Shape {
            promote_to_front: true,
            discard_from_front: false,
        };
        for seed in 0..4 {
            fuzz(&mut TestLru::new(), shape, seed);
        }
    }
}
