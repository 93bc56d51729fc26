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

use crate::{
    entry::{Entry, EntryRef},
    eviction::Collection,
};

/// An eviction [`Collection`] bound to a capacity.
///
/// `capacity` counts entries; `0` means unbounded. The collection itself never looks at the capacity, the evictor
/// enforces it by discarding victims before admitting new entries.
pub struct Evictor<K, V> {
    collection: Box<dyn Collection<K, V>>,
    capacity: usize,
}

impl<K, V> Debug for Evictor<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evictor")
            .field("policy", &self.policy())
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

impl<K, V> Evictor<K, V>
where
    K: 'static,
    V: 'static,
{
    /// Bind a collection to a capacity.
    pub fn new(collection: impl Collection<K, V> + 'static, capacity: usize) -> Self {
        Self {
            collection: Box::new(collection),
            capacity,
        }
    }
}

impl<K, V> Evictor<K, V> {
    /// Name of the eviction policy.
    pub fn policy(&self) -> &'static str {
        self.collection.name()
    }

    /// Entry capacity, `0` for unbounded.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Linked entry count.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Returns `true` if no entry is linked.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Link a new entry, discarding victims first if the evictor is full.
    ///
    /// Returns the victims in discard order. The admitted entry is never one of them.
    pub fn admit(&mut self, entry: EntryRef<K, V>) -> Vec<EntryRef<K, V>> {
        let mut victims = vec![];
        while self.capacity > 0 && self.collection.len() >= self.capacity {
            match self.collection.discard() {
                Some(victim) => victims.push(victim),
                None => break,
            }
        }
        self.collection.add(entry);

        if !victims.is_empty() {
            tracing::trace!(
                "[evictor]: {} discarded {} victim(s) on admission, len: {}, capacity: {}",
                self.policy(),
                victims.len(),
                self.len(),
                self.capacity
            );
        }

        victims
    }

    /// Record a hit on a linked entry.
    pub fn touch(&mut self, entry: &Entry<K, V>) {
        self.collection.promote(entry);
    }

    /// Unlink an entry that left the cache for a reason other than eviction.
    pub fn forget(&mut self, entry: &Entry<K, V>) {
        self.collection.remove(entry);
    }

    /// Discard the current victim.
    pub fn evict(&mut self) -> Option<EntryRef<K, V>> {
        self.collection.discard()
    }

    /// Get the current victim.
    pub fn peek(&self) -> Option<&EntryRef<K, V>> {
        self.collection.peek()
    }

    /// Change the capacity and discard victims until the evictor fits.
    pub fn resize(&mut self, capacity: usize) -> Vec<EntryRef<K, V>> {
        self.capacity = capacity;
        let mut victims = vec![];
        while capacity > 0 && self.collection.len() > capacity {
            match self.collection.discard() {
                Some(victim) => victims.push(victim),
                None => break,
            }
        }
        tracing::debug!(
            "[evictor]: {} resized to capacity {}, discarded {} victim(s)",
            self.policy(),
            capacity,
            victims.len()
        );
        victims
    }

    /// Unlink every entry.
    pub fn purge(&mut self) {
        self.collection.init();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::eviction::{
        lru::Lru,
        mru::Mru,
        test_utils::{assert_ptr_eq, entries},
    };

    fn keys(victims: Vec<EntryRef<u64, u64>>) -> Vec<u64> {
        victims.iter().map(|e| *e.key()).collect_vec()
    }

    #[test]
    fn test_evictor_lru_capacity() {
        let es = entries(0..6);
        let mut evictor = Evictor::new(Lru::new(), 3);
        assert_eq!(evictor.policy(), "lru");

        for e in es.iter().take(3) {
            assert!(evictor.admit(e.clone()).is_empty());
        }
        evictor.touch(&es[0]);

        // 3, 0, 2 after evicting 1
        assert_eq!(keys(evictor.admit(es[3].clone())), vec![1]);
        assert_eq!(evictor.len(), 3);
        assert_ptr_eq(evictor.peek().unwrap(), &es[2]);

        evictor.forget(&es[2]);
        assert!(evictor.admit(es[4].clone()).is_empty());

        assert_eq!(keys(evictor.resize(1)), vec![0, 3]);
        assert_eq!(evictor.capacity(), 1);
        assert_ptr_eq(evictor.peek().unwrap(), &es[4]);

        assert_eq!(keys(evictor.admit(es[5].clone())), vec![4]);
        assert_ptr_eq(&evictor.evict().unwrap(), &es[5]);
        assert!(evictor.evict().is_none());
        assert!(evictor.is_empty());
    }

    #[test]
    fn test_evictor_mru_never_evicts_admitted() {
        let es = entries(0..4);
        let mut evictor = Evictor::new(Mru::new(), 2);

        assert!(evictor.admit(es[0].clone()).is_empty());
        assert!(evictor.admit(es[1].clone()).is_empty());
        assert_eq!(keys(evictor.admit(es[2].clone())), vec![1]);
        assert_eq!(keys(evictor.admit(es[3].clone())), vec![2]);
        assert!(es[3].is_linked());
        assert!(es[0].is_linked());
    }

    #[test]
    fn test_evictor_unbounded() {
        let es = entries(0..100);
        let mut evictor = Evictor::new(Lru::new(), 0);
        for e in es.iter() {
            assert!(evictor.admit(e.clone()).is_empty());
        }
        assert_eq!(evictor.len(), 100);
        assert!(evictor.resize(0).is_empty());

        evictor.purge();
        assert!(evictor.is_empty());
        assert!(es.iter().all(|e| !e.is_linked()));
    }
}
