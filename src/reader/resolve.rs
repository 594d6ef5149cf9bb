// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value resolution.
//!
//! ```text
//! Schema keys --lookup--> EnvSource
//!      |                     |
//!      v                     v
//!   ResolvedEnv[key] = value | ""
//! ```

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::env::EnvSource;
use crate::schema::Schema;

/// The resolved record: one entry per schema key, in schema order.
///
/// Unset variables resolve to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEnv {
    entries: Vec<(String, String)>,
}

impl ResolvedEnv {
    /// Value for `key`, or `None` if the key was not declared.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over `(key, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for ResolvedEnv {
    type Output = str;

    /// # Panics
    ///
    /// Panics if `key` is not part of the schema.
    fn index(&self, key: &str) -> &str {
        self.get(key)
            .unwrap_or_else(|| panic!("variable '{key}' is not declared in the schema"))
    }
}

impl Serialize for ResolvedEnv {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Looks up every schema key in `source`.
///
/// Absent variables resolve to an empty string; values are never coerced.
#[must_use]
pub fn resolve<S>(schema: &Schema, source: &S) -> ResolvedEnv
where
    S: EnvSource + ?Sized,
{
    let entries = schema
        .keys()
        .map(|key| (key.to_string(), source.var(key).unwrap_or_default()))
        .collect();
    ResolvedEnv { entries }
}
