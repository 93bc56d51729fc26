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

use std::marker::PhantomData;

use crate::code::{Key, Value};

/// Reason for an entry leaving the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Discarded by the eviction policy to make room.
    Evict,
    /// Replaced by an insertion with the same key.
    Replace,
    /// Removed explicitly.
    Remove,
    /// Dropped by a purge of the whole cache.
    Clear,
}

/// Trait for the customized event listener.
pub trait EventListener: 'static {
    /// Associated key type.
    type Key;
    /// Associated value type.
    type Value;

    /// Called when a cache entry leaves the cache with the reason.
    #[expect(unused_variables)]
    fn on_leave(&self, reason: Event, key: &Self::Key, value: &Self::Value)
    where
        Self::Key: Key,
        Self::Value: Value,
    {
    }
}

/// Event listener that ignores every event.
#[derive(Debug)]
pub struct DefaultEventListener<K, V>(PhantomData<(K, V)>);

impl<K, V> Default for DefaultEventListener<K, V> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<K, V> EventListener for DefaultEventListener<K, V>
where
    K: Key,
    V: Value,
{
    type Key = K;
    type Value = V;
}
