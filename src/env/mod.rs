// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable sources.
//!
//! # Architecture
//!
//! ```text
//! EnvSource (lookup by key)
//!   ProcessEnv       live process table
//!   EnvSnapshot      owned BTreeMap<EnvKey, String>
//!   HashMap/BTreeMap plain maps
//!   &S               any borrowed source
//! ```
//!
//! - **Read-only**: sources are never written back to the process
//! - **Case-insensitive on Windows** for `EnvSnapshot`

pub mod snapshot;
pub mod types;


use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

pub use snapshot::EnvSnapshot;

/// Key-value lookup over an environment.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment.
///
/// Values that are not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<H: BuildHasher> EnvSource for HashMap<String, String, H> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> EnvSnapshot {
    EnvSnapshot::capture()
}
