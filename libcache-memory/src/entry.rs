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

use std::{cell::Cell, rc::Rc};

use crate::arena::Token;

/// Shared handle of an [`Entry`].
///
/// The cache that maps keys to entries and the collection that orders them each hold one.
pub type EntryRef<K, V> = Rc<Entry<K, V>>;

/// Opaque location of an [`Entry`] inside the collection that linked it.
///
/// Only valid for that collection, and only until the entry is removed, discarded, or the collection is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(Token);

impl Position {
    pub(crate) fn new(token: Token) -> Self {
        Self(token)
    }

    pub(crate) fn token(self) -> Token {
        self.0
    }
}

/// [`Entry`] holds one cached key and value together with its place in the eviction order.
#[derive(Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    position: Cell<Option<Position>>,
}

impl<K, V> Entry<K, V> {
    /// Create an entry that is not linked into any collection.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            position: Cell::new(None),
        }
    }

    /// Get the immutable reference of the entry key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Get the immutable reference of the entry value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Get the position recorded by the collection the entry is linked into.
    pub fn position(&self) -> Option<Position> {
        self.position.get()
    }

    /// Returns `true` if a collection currently holds the entry.
    pub fn is_linked(&self) -> bool {
        self.position.get().is_some()
    }

    pub(crate) fn set_position(&self, position: Option<Position>) {
        self.position.set(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    #[test]
    fn test_entry() {
        let entry = Entry::new("k", 42);
        assert_eq!(entry.key(), &"k");
        assert_eq!(entry.value(), &42);
        assert!(!entry.is_linked());

        let mut arena = Arena::new();
        let position = Position::new(arena.push_front(()));
        entry.set_position(Some(position));
        assert!(entry.is_linked());
        assert_eq!(entry.position(), Some(position));

        entry.set_position(None);
        assert!(!entry.is_linked());
    }
}
