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

/// Cache library error.
///
/// Misuse of entry positions (an entry that is not linked, or linked into another collection) is a programming error
/// and panics instead of surfacing here.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A policy with the same name has already been registered.
    #[error("eviction policy {0:?} is already registered")]
    DuplicatePolicy(String),
    /// No policy is registered under the name.
    #[error("unknown eviction policy {name:?}, registered: [{registered}]")]
    UnknownPolicy {
        /// The requested name.
        name: String,
        /// Comma separated registered names.
        registered: String,
    },
    /// Config error.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::UnknownPolicy`] listing the names that were available.
    pub fn unknown_policy<'a>(name: impl Into<String>, registered: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UnknownPolicy {
            name: name.into(),
            registered: registered.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

/// Cache library result.
pub type Result<T> = std::result::Result<T, Error>;
