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

use std::{ptr, rc::Rc};

use libcache_common::strict_assert;

use crate::{
    arena::Arena,
    entry::{Entry, EntryRef, Position},
};

/// Doubly linked sequence of entries with a front and a back.
///
/// Each linked entry records its [`Position`], so relinking and unlinking never search the sequence. Eviction policies
/// differ only in which end they insert at, promote to, and discard from; they all share this machinery.
///
/// Passing an entry that is not linked into this collection is a programming error and panics.
pub struct OrderedCollection<K, V> {
    arena: Arena<EntryRef<K, V>>,
}

impl<K, V> Default for OrderedCollection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedCollection<K, V> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { arena: Arena::new() }
    }

    /// Create an empty collection with pre-allocated room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
        }
    }

    /// Link an entry at the front and record its position.
    pub fn push_front(&mut self, entry: EntryRef<K, V>) {
        strict_assert!(!self.contains(&entry), "entry is already linked into this collection");
        let token = self.arena.push_front(entry.clone());
        entry.set_position(Some(Position::new(token)));
    }

    /// Relink a linked entry at the front.
    pub fn move_to_front(&mut self, entry: &Entry<K, V>) {
        if !entry.position().is_some_and(|p| self.arena.move_to_front(p.token())) {
            misplaced();
        }
        strict_assert!(self.front().is_some_and(|front| ptr::eq(Rc::as_ptr(front), entry)));
    }

    /// Unlink a linked entry and return the collection's handle of it.
    pub fn remove(&mut self, entry: &Entry<K, V>) -> EntryRef<K, V> {
        match entry.position().and_then(|p| self.arena.remove(p.token())) {
            Some(removed) => {
                strict_assert!(ptr::eq(Rc::as_ptr(&removed), entry));
                removed.set_position(None);
                removed
            }
            None => misplaced(),
        }
    }

    /// Unlink and return the front entry.
    pub fn pop_front(&mut self) -> Option<EntryRef<K, V>> {
        let entry = self.arena.pop_front()?;
        entry.set_position(None);
        Some(entry)
    }

    /// Unlink and return the back entry.
    pub fn pop_back(&mut self) -> Option<EntryRef<K, V>> {
        let entry = self.arena.pop_back()?;
        entry.set_position(None);
        Some(entry)
    }

    /// Get the front entry.
    pub fn front(&self) -> Option<&EntryRef<K, V>> {
        self.arena.front()
    }

    /// Get the back entry.
    pub fn back(&self) -> Option<&EntryRef<K, V>> {
        self.arena.back()
    }

    /// Returns `true` if the entry is linked into this collection.
    pub fn contains(&self, entry: &Entry<K, V>) -> bool {
        entry
            .position()
            .and_then(|p| self.arena.get(p.token()))
            .is_some_and(|linked| ptr::eq(Rc::as_ptr(linked), entry))
    }

    /// Panics unless the entry is linked into this collection.
    #[track_caller]
    pub fn assert_linked(&self, entry: &Entry<K, V>) {
        if !self.contains(entry) {
            misplaced();
        }
    }

    /// Unlink every entry. Positions recorded so far are cleared.
    pub fn clear(&mut self) {
        for entry in self.arena.iter() {
            entry.set_position(None);
        }
        self.arena.clear();
    }

    /// Linked entry count.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if no entry is linked.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterate entries from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &EntryRef<K, V>> + '_ {
        self.arena.iter()
    }
}

#[cold]
#[track_caller]
fn misplaced() -> ! {
    panic!("entry is not linked into this collection: it was removed, discarded, reset, or linked elsewhere")
}
