// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable declarations.
//!
//! ```text
//! VariableSpec::builder()
//!   .key("API_PORT")              (required)
//!   .description("...")           (default "")
//!   .with_required(true)          (default false)
//!   .with_secret(false)           (default false)
//!   .build()
//! ```

use bon::Builder;

use crate::error::{SchemaError, SchemaResult};

/// Declaration of a single environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct VariableSpec {
    #[builder(into)]
    key: String,
    #[builder(into, default)]
    description: String,
    /// Absence (or an empty value) is a fatal misconfiguration.
    #[builder(setters(name = with_required), default = false)]
    required: bool,
    /// The value is masked in any human-facing report.
    #[builder(setters(name = with_secret), default = false)]
    secret: bool,
}

impl VariableSpec {
    /// Variable name as looked up in the environment.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn is_secret(&self) -> bool {
        self.secret
    }
}

/// Checks that `key` can be looked up in a process environment.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidKey`] for an empty name or one containing
/// `=` or NUL.
pub fn validate_key(key: &str) -> SchemaResult<()> {
    let reason = if key.is_empty() {
        "name is empty"
    } else if key.contains('=') {
        "contains '='"
    } else if key.contains('\0') {
        "contains a NUL character"
    } else {
        return Ok(());
    };

    Err(SchemaError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}
