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

//! Eviction order and pluggable eviction policies for libcache.
//!
//! Entries are ordered by an [`OrderedCollection`] whose links live in a slab, so every hit and every eviction is
//! O(1). Policies implement the [`Collection`] contract and register themselves by name in a [`Registry`], which
//! builds [`Evictor`]s for the keyed [`Cache`].
//!
//! Nothing here is thread-safe.

mod arena;
mod cache;
mod collection;
mod entry;
mod eviction;
mod evictor;
mod indexer;
mod registry;

mod prelude;
pub use prelude::*;
