// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owned copy of an environment.
//!
//! ```text
//! EnvSnapshot
//! vars: BTreeMap<EnvKey, String>
//! Sources: capture() | from_map() | from_iter()
//! Ops: set/remove/get/iter
//! ```

use super::EnvSource;
use super::types::EnvKey;
use std::collections::BTreeMap;

/// A fixed set of environment variables.
///
/// Used to read an environment deterministically without touching the
/// process-wide table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<EnvKey, String>,
}

impl EnvSnapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Copies the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are converted lossily.
    #[must_use]
    pub fn capture() -> Self {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    /// Creates a snapshot from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        vars.into_iter().collect()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(EnvKey::new(key), value.into());
        self
    }

    /// Removes a variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (key, value) in iter {
            snapshot.set(key, value);
        }
        snapshot
    }
}

impl EnvSource for EnvSnapshot {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}
