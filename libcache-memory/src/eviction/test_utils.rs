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

use std::{collections::VecDeque, rc::Rc};

use itertools::Itertools;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::Collection;
use crate::entry::{Entry, EntryRef};

pub trait Dump {
    type Output;
    fn dump(&self) -> Self::Output;
}

pub fn entries(keys: impl IntoIterator<Item = u64>) -> Vec<EntryRef<u64, u64>> {
    keys.into_iter().map(|key| Rc::new(Entry::new(key, key))).collect_vec()
}

pub fn assert_ptr_eq(a: &EntryRef<u64, u64>, b: &EntryRef<u64, u64>) {
    assert!(Rc::ptr_eq(a, b), "expected key {}, got key {}", b.key(), a.key());
}

/// Add `1, 2, 3` in order, then promote key `k` for `k` times.
pub fn touch_by_key<C>(collection: &mut C) -> Vec<EntryRef<u64, u64>>
where
    C: Collection<u64, u64>,
{
    let es = entries(1..=3);
    collection.init();
    for e in es.iter() {
        collection.add(e.clone());
    }
    for e in es.iter() {
        for _ in 0..*e.key() {
            collection.promote(e);
        }
    }
    es
}

/// Where each policy links and unlinks, front being index `0` of the model.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub promote_to_front: bool,
    pub discard_from_front: bool,
}

/// Drive a collection with random operations and compare it with a [`VecDeque`] model after every step.
pub fn fuzz<C>(collection: &mut C, shape: Shape, seed: u64)
where
    C: Collection<u64, u64>,
{
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut model: VecDeque<EntryRef<u64, u64>> = VecDeque::new();
    let mut next = 0u64;

    collection.init();

    for _ in 0..10_000 {
        match rng.random_range(0..100) {
            0..40 => {
                let e = Rc::new(Entry::new(next, next));
                next += 1;
                collection.add(e.clone());
                model.push_front(e);
            }
            40..70 if !model.is_empty() => {
                let i = rng.random_range(0..model.len());
                collection.promote(&model[i]);
                if shape.promote_to_front {
                    let e = model.remove(i).unwrap();
                    model.push_front(e);
                }
            }
            70..80 if !model.is_empty() => {
                let i = rng.random_range(0..model.len());
                let e = model.remove(i).unwrap();
                collection.remove(&e);
                assert!(!e.is_linked());
            }
            80..99 => {
                let expected = match shape.discard_from_front {
                    true => model.pop_front(),
                    false => model.pop_back(),
                };
                let discarded = collection.discard();
                match (discarded, expected) {
                    (Some(d), Some(e)) => assert_ptr_eq(&d, &e),
                    (None, None) => {}
                    (d, e) => panic!("discarded {:?}, expected {:?}", d.map(|d| *d.key()), e.map(|e| *e.key())),
                }
            }
            99 => {
                collection.init();
                assert!(model.iter().all(|e| !e.is_linked()));
                model.clear();
            }
            _ => {}
        }

        assert_eq!(collection.len(), model.len());
        let victim = match shape.discard_from_front {
            true => model.front(),
            false => model.back(),
        };
        assert_eq!(collection.peek().map(|e| *e.key()), victim.map(|e| *e.key()));
    }
}
