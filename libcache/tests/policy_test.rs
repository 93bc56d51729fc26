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

use std::{cell::RefCell, rc::Rc};

use itertools::Itertools;
use libcache::{Cache, CacheBuilder, Collection, Entry, Event, EventListener, Evictor, Lru, Mru, Registry};

const CAPACITY: usize = 64;
const KEYS: u64 = 256;

#[derive(Clone, Default)]
struct Evictions(Rc<RefCell<Vec<u64>>>);

impl EventListener for Evictions {
    type Key = u64;
    type Value = u64;

    fn on_leave(&self, reason: Event, key: &u64, _: &u64) {
        if reason == Event::Evict {
            self.0.borrow_mut().push(*key);
        }
    }
}

fn cache(registry: &Registry<u64, u64>, policy: &str) -> (Cache<u64, u64, Evictions>, Evictions) {
    let evictions = Evictions::default();
    let cache = CacheBuilder::new(CAPACITY)
        .with_policy(policy)
        .with_event_listener(evictions.clone())
        .build(registry)
        .unwrap();
    (cache, evictions)
}

/// Get the key, insert it on miss.
fn access(cache: &mut Cache<u64, u64, Evictions>, key: u64) -> bool {
    if cache.get(&key).is_some() {
        return true;
    }
    cache.insert(key, key);
    false
}

#[test_log::test]
fn test_capacity_is_enforced_for_every_policy() {
    let registry = Registry::builtin().unwrap();
    for policy in registry.names().map(str::to_string).collect_vec() {
        let (mut cache, evictions) = cache(&registry, &policy);
        let mut misses = 0;
        for key in (0..KEYS).chain(0..KEYS).chain((0..KEYS).rev()) {
            if !access(&mut cache, key) {
                misses += 1;
            }
            assert!(cache.len() <= CAPACITY, "{policy}: {} > {CAPACITY}", cache.len());
        }
        assert_eq!(cache.len(), CAPACITY);
        assert_eq!(evictions.0.borrow().len(), misses - CAPACITY, "{policy}");
    }
}

#[test_log::test]
fn test_cyclic_scan_favors_mru() {
    let registry = Registry::builtin().unwrap();
    let hits = |policy: &str| {
        let (mut cache, _) = cache(&registry, policy);
        (0..10)
            .flat_map(|_| 0..CAPACITY as u64 + 1)
            .filter(|key| access(&mut cache, *key))
            .count()
    };

    // A loop one entry larger than the cache defeats lru completely.
    assert_eq!(hits("lru"), 0);
    assert!(hits("mru") > 0);
}

#[test]
fn test_collection_contract_through_facade() {
    let es = (1..=3u64).map(|key| Rc::new(Entry::new(key, ()))).collect_vec();

    let mut mru = Mru::new();
    for e in es.iter() {
        mru.add(e.clone());
    }
    for e in es.iter() {
        for _ in 0..*e.key() {
            mru.promote(e);
        }
    }

    let victim = mru.discard().unwrap();
    mru.remove(&es[1]);
    assert_eq!(*victim.key(), 3);
    assert_eq!(mru.len(), 1);
    assert_eq!(*mru.peek().unwrap().key(), 1);
}

#[test]
fn test_custom_registry() {
    let mut registry = Registry::<u64, u64>::new();
    libcache::memory::lru::register(&mut registry).unwrap();
    registry
        .register("lru-2", |capacity| Evictor::new(Lru::new(), capacity * 2))
        .unwrap();
    assert!(registry.register("lru", |capacity| Evictor::new(Mru::new(), capacity)).is_err());

    let (cache, _) = cache(&registry, "lru-2");
    assert_eq!(cache.capacity(), CAPACITY * 2);
    assert_eq!(cache.policy(), "lru");
}
