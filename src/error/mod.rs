// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            EnvError (16 bytes)
//!                  |
//!          +-------+-------+
//!          v               v
//!       Missing          Schema
//!         Box              Box
//!
//! Sub-errors (unboxed internally):
//!   Missing  keys (every absent or empty required variable)
//!   Schema   DuplicateKey, InvalidKey, InvalidDeclaration
//! ```
//!
//! A missing required variable is fatal for [`read`](crate::reader::read):
//! the message goes to stderr and the process exits with
//! [`MISSING_VARIABLE_EXIT_CODE`].

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Result type using [`SchemaError`].
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Exit code used when a required variable is missing.
pub const MISSING_VARIABLE_EXIT_CODE: i32 = 1;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum EnvError {
    /// One or more required variables are absent or empty.
    #[error(transparent)]
    Missing(#[from] Box<MissingVariableError>),

    /// The schema itself is malformed.
    #[error("schema error: {0}")]
    Schema(#[from] Box<SchemaError>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvError {
                fn from(err: $error) -> Self {
                    EnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    MissingVariableError => Missing,
    SchemaError => Schema,
}

// --- Missing Variables ---

/// Required variables that are absent from the environment or set to an
/// empty string.
///
/// Keys are listed in schema order. The list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required environment {}: {}", noun(.keys), .keys.join(", "))]
pub struct MissingVariableError {
    keys: Vec<String>,
}

impl MissingVariableError {
    /// Creates the error from the missing keys, or `None` if there are none.
    #[must_use]
    pub fn from_keys<I, K>(keys: I) -> Option<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            None
        } else {
            Some(Self { keys })
        }
    }

    /// The missing keys.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The first missing key.
    #[must_use]
    pub fn first_key(&self) -> &str {
        self.keys.first().map_or("", String::as_str)
    }
}

fn noun(keys: &[String]) -> &'static str {
    if keys.len() == 1 {
        "variable"
    } else {
        "variables"
    }
}

// --- Schema Errors ---

/// Errors raised while declaring a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The same variable was declared twice.
    #[error("variable '{0}' is declared more than once")]
    DuplicateKey(String),

    /// The variable name cannot be looked up in an environment.
    #[error("invalid variable name '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// A command-line declaration could not be parsed.
    #[error("invalid declaration '{input}': {message}")]
    InvalidDeclaration { input: String, message: String },
}

#[cfg(test)]
mod tests;
