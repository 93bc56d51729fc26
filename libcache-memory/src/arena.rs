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

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of arena identifiers, so that tokens issued by one arena are rejected by every other arena.
static ARENA_ID: AtomicU64 = AtomicU64::new(0);

/// Handle of a value linked into an [`Arena`].
///
/// A token stays valid until its value is removed or the arena is cleared. Slots are reused, so the token also carries
/// the stamp of the insertion it was issued for; a stale token never resolves to a newer value in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    arena: u64,
    index: usize,
    stamp: u64,
}

impl Token {
    /// Slot index of the token.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
    stamp: u64,
}

#[derive(Debug)]
enum Slot<T> {
    Vacant { next: Option<usize> },
    Occupied(Node<T>),
}

/// A doubly linked list whose nodes live in a slab.
///
/// `prev`/`next` links and the free list are slot indices instead of pointers. Every operation except
/// [`Arena::clear`] is O(1).
#[derive(Debug)]
pub struct Arena<T> {
    id: u64,
    slots: Vec<Slot<T>>,

    head: Option<usize>,
    tail: Option<usize>,
    /// Head of the vacant slot list.
    free: Option<usize>,

    len: usize,
    /// Monotonic across [`Arena::clear`].
    stamp: u64,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty arena with pre-allocated slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ARENA_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: None,
            len: 0,
            stamp: 0,
        }
    }

    /// Link a value at the front.
    pub fn push_front(&mut self, value: T) -> Token {
        let token = self.alloc(value);
        self.link_front(token.index);
        token
    }

    /// Unlink and return the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let index = self.head?;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Unlink and return the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.tail?;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Get the front value.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).value)
    }

    /// Get the back value.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).value)
    }

    /// Get the value of a token, `None` if the token is stale or issued by another arena.
    pub fn get(&self, token: Token) -> Option<&T> {
        self.resolve(token).map(|index| &self.node(index).value)
    }

    /// Returns `true` if the token refers to a value that is still linked into this arena.
    pub fn contains(&self, token: Token) -> bool {
        self.resolve(token).is_some()
    }

    /// Relink the value of the token at the front.
    ///
    /// Returns `false` and does nothing if the token is not valid for this arena.
    pub fn move_to_front(&mut self, token: Token) -> bool {
        let Some(index) = self.resolve(token) else {
            return false;
        };
        if self.head != Some(index) {
            self.unlink(index);
            self.link_front(index);
        }
        true
    }

    /// Unlink and return the value of the token.
    pub fn remove(&mut self, token: Token) -> Option<T> {
        let index = self.resolve(token)?;
        self.unlink(index);
        Some(self.release(index))
    }

    /// Drop all values. Every token issued so far becomes stale.
    ///
    /// Slot memory is kept for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    /// Linked value count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no value is linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: self,
            next: self.head,
            remaining: self.len,
        }
    }

    fn resolve(&self, token: Token) -> Option<usize> {
        if token.arena != self.id {
            return None;
        }
        match self.slots.get(token.index) {
            Some(Slot::Occupied(node)) if node.stamp == token.stamp => Some(token.index),
            _ => None,
        }
    }

    fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {index} is linked"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {index} is linked"),
        }
    }

    fn alloc(&mut self, value: T) -> Token {
        self.stamp += 1;
        let node = Node {
            value,
            prev: None,
            next: None,
            stamp: self.stamp,
        };

        let index = match self.free {
            Some(index) => {
                self.free = match self.slots[index] {
                    Slot::Vacant { next } => next,
                    Slot::Occupied(_) => unreachable!("occupied slot {index} in free list"),
                };
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };
        self.len += 1;

        Token {
            arena: self.id,
            index,
            stamp: self.stamp,
        }
    }

    /// The slot must be unlinked already.
    fn release(&mut self, index: usize) -> T {
        let slot = std::mem::replace(&mut self.slots[index], Slot::Vacant { next: self.free });
        self.free = Some(index);
        self.len -= 1;
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("release vacant slot {index}"),
        }
    }

    fn link_front(&mut self, index: usize) {
        let head = self.head;
        let node = self.node_mut(index);
        node.prev = None;
        node.next = head;
        match head {
            Some(head) => self.node_mut(head).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    fn unlink(&mut self, index: usize) {
        let node = self.node_mut(index);
        let (prev, next) = (node.prev.take(), node.next.take());
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }
}

/// Front to back iterator of an [`Arena`].
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let node = arena.node(self.next?);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Arena<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
