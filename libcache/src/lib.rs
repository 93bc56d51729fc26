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

//! libcache - pluggable eviction policies for Rust.
//!
//! A cache picks its eviction policy by name at construction time:
//!
//! ```
//! use libcache::{CacheBuilder, Registry};
//!
//! let registry: Registry<u64, &str> = Registry::builtin().unwrap();
//! let mut cache = CacheBuilder::new(2).with_policy("lru").build(&registry).unwrap();
//!
//! cache.insert(1, "one");
//! cache.insert(2, "two");
//! cache.get(&1);
//! cache.insert(3, "three");
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! ```

/// Components shared by all libcache crates.
pub mod common {
    pub use libcache_common::*;
}

/// In-memory eviction order, policies and cache.
pub mod memory {
    pub use libcache_memory::*;
}

mod prelude;
pub use prelude::*;
