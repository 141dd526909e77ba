// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use serde::{Deserialize, Serialize};
use sigreq_core::utils::Redact;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Case-insensitive, case-preserving header map.
///
/// Entries are keyed by the lowercased name, so lookups don't scan and
/// iteration is already in canonical order. The name casing given on the
/// latest insert is kept for the transport.
///
/// Names that collapse to the same lowercase form replace each other: last
/// write wins.
///
/// ```
/// use sigreq_aws_v4::Headers;
///
/// let mut headers = Headers::new();
/// headers.insert("X-Amz-Date", "20150830T123600Z");
///
/// assert_eq!(headers.get("x-amz-date"), Some("20150830T123600Z"));
/// assert_eq!(headers.get("X-AMZ-DATE"), Some("20150830T123600Z"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Headers {
    /// lowercase name => (original name, value)
    entries: BTreeMap<String, (String, String)>,
}

impl Headers {
    /// Create an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, returning the value previously stored under the
    /// same case-insensitive name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        self.entries
            .insert(name.to_lowercase(), (name, value.into()))
            .map(|(_, v)| v)
    }

    /// Get header value by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_lowercase())
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a header is present under any casing.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Remove a header by case-insensitive name.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(&name.to_lowercase()).map(|(_, v)| v)
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` with names as they were inserted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterate `(lowercase name, value)` sorted by lowercase name.
    pub fn iter_lowercase(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, (_, value))| (name.as_str(), value.as_str()))
    }
}

impl Debug for Headers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut m = f.debug_map();
        for (lower, (name, value)) in &self.entries {
            if lower == "authorization" {
                m.entry(name, &Redact::from(value));
            } else {
                m.entry(name, value);
            }
        }
        m.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

impl From<BTreeMap<String, String>> for Headers {
    fn from(value: BTreeMap<String, String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Headers> for BTreeMap<String, String> {
    fn from(value: Headers) -> Self {
        value.entries.into_values().collect()
    }
}
