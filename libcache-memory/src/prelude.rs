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

pub use crate::{
    arena::{Arena, Iter as ArenaIter, Token},
    cache::{Cache, CacheBuilder, CacheConfig},
    collection::OrderedCollection,
    entry::{Entry, EntryRef, Position},
    eviction::{
        fifo::{self, Fifo},
        lifo::{self, Lifo},
        lru::{self, Lru},
        mru::{self, Mru},
        Collection,
    },
    evictor::Evictor,
    indexer::HashTableIndexer,
    registry::{Constructor, Registry},
};
