// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Required-variable validation.

use crate::env::EnvSource;
use crate::error::MissingVariableError;
use crate::schema::Schema;

/// Returns the required keys that are absent or empty, in schema order.
#[must_use]
pub fn missing_required<'a, S>(schema: &'a Schema, source: &S) -> Vec<&'a str>
where
    S: EnvSource + ?Sized,
{
    schema
        .required()
        .filter(|spec| source.var(spec.key()).is_none_or(|value| value.is_empty()))
        .map(|spec| spec.key())
        .collect()
}

/// Checks that every required variable has a non-empty value.
///
/// # Errors
///
/// Returns a [`MissingVariableError`] listing every offending key.
pub fn validate<S>(schema: &Schema, source: &S) -> Result<(), MissingVariableError>
where
    S: EnvSource + ?Sized,
{
    MissingVariableError::from_keys(missing_required(schema, source)).map_or(Ok(()), Err)
}
