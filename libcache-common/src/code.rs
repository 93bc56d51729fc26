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

use std::hash::Hash;

/// Key bound of the keyed cache.
///
/// The eviction order never inspects keys; only the hash index of the cache does.
pub trait Key: Hash + Eq + 'static {}
impl<T: Hash + Eq + 'static> Key for T {}

/// Value bound of the keyed cache.
pub trait Value: 'static {}
impl<T: 'static> Value for T {}
