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

use std::{hash::Hash, rc::Rc};

use equivalent::Equivalent;
use hashbrown::hash_table::{Entry as HashTableEntry, HashTable};

use crate::entry::EntryRef;

/// Hash index from keys to entries.
///
/// Hashes are computed by the cache and stored next to the entries, so the table never rehashes keys.
pub struct HashTableIndexer<K, V> {
    table: HashTable<(u64, EntryRef<K, V>)>,
}

impl<K, V> Default for HashTableIndexer<K, V> {
    fn default() -> Self {
        Self {
            table: HashTable::new(),
        }
    }
}

impl<K, V> HashTableIndexer<K, V>
where
    K: Eq,
{
    /// Index an entry. Returns the entry previously indexed under the same key.
    pub fn insert(&mut self, hash: u64, mut entry: EntryRef<K, V>) -> Option<EntryRef<K, V>> {
        match self
            .table
            .entry(hash, |(_, e)| e.key() == entry.key(), |(hash, _)| *hash)
        {
            HashTableEntry::Occupied(mut o) => {
                std::mem::swap(&mut o.get_mut().1, &mut entry);
                Some(entry)
            }
            HashTableEntry::Vacant(v) => {
                v.insert((hash, entry));
                None
            }
        }
    }

    /// Get the entry indexed under the key.
    pub fn get<Q>(&self, hash: u64, key: &Q) -> Option<&EntryRef<K, V>>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.table.find(hash, |(_, e)| key.equivalent(e.key())).map(|(_, e)| e)
    }

    /// Remove the entry indexed under the key.
    pub fn remove<Q>(&mut self, hash: u64, key: &Q) -> Option<EntryRef<K, V>>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        match self.table.find_entry(hash, |(_, e)| key.equivalent(e.key())) {
            Ok(o) => {
                let ((_, e), _) = o.remove();
                Some(e)
            }
            Err(_) => None,
        }
    }

    /// Remove exactly the given entry, if it is still the one indexed under its key.
    pub fn remove_entry(&mut self, hash: u64, entry: &EntryRef<K, V>) -> Option<EntryRef<K, V>> {
        match self.table.find_entry(hash, |(_, e)| Rc::ptr_eq(e, entry)) {
            Ok(o) => {
                let ((_, e), _) = o.remove();
                Some(e)
            }
            Err(_) => None,
        }
    }

    /// Remove and return all entries.
    pub fn drain(&mut self) -> impl Iterator<Item = EntryRef<K, V>> + '_ {
        self.table.drain().map(|(_, e)| e)
    }

    /// Iterate indexed entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &EntryRef<K, V>> + '_ {
        self.table.iter().map(|(_, e)| e)
    }

    /// Indexed entry count.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
