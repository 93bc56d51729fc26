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

use crate::entry::{Entry, EntryRef};

/// Uniform contract of an eviction policy over an ordered collection of entries.
///
/// Every operation is O(1) and assumes a single caller. The owning cache calls [`Collection::promote`] on every hit
/// and [`Collection::discard`] on every capacity overflow; the collection never calls back.
///
/// Passing an entry that is not linked into this collection to [`Collection::promote`] or [`Collection::remove`]
/// panics.
pub trait Collection<K, V> {
    /// Name the policy is registered under.
    fn name(&self) -> &'static str;

    /// Reset to empty. Positions recorded by this collection are cleared.
    fn init(&mut self);

    /// Link an entry that is not linked into this collection yet, and record its position in it.
    fn add(&mut self, entry: EntryRef<K, V>);

    /// Relocate a linked entry to the most relevant end. Called on every cache hit.
    fn promote(&mut self, entry: &Entry<K, V>);

    /// Unlink a linked entry.
    fn remove(&mut self, entry: &Entry<K, V>);

    /// Unlink and return the victim, or `None` if the collection is empty.
    fn discard(&mut self) -> Option<EntryRef<K, V>>;

    /// Get the entry the next [`Collection::discard`] returns.
    fn peek(&self) -> Option<&EntryRef<K, V>>;

    /// Linked entry count.
    fn len(&self) -> usize;

    /// Returns `true` if no entry is linked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
pub mod fifo;
/// Last in, first out.
pub mod lifo;
/// Least recently used.
pub mod lru;
/// Most recently used.
pub mod mru;

#[cfg(test)]
pub(crate) mod test_utils;
