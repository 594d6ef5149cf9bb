// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The read pipeline.
//!
//! ```text
//! read(schema)
//!    |
//!    v
//! validate ---missing---> stderr + exit(1)
//!    |
//!    v
//! resolve --> ResolvedEnv
//!    |
//!    v
//! report (table on stderr) --> return ResolvedEnv
//! ```
//!
//! [`EnvReader::try_read`] is the non-terminating core; [`EnvReader::read`]
//! and [`read`] add the fail-fast exit.

pub mod resolve;
pub mod validate;


use std::io::Write;

use tracing::{debug, info, warn};

use crate::env::{EnvSource, ProcessEnv};
use crate::error::{EnvResult, MISSING_VARIABLE_EXIT_CODE, MissingVariableError, SchemaError};
use crate::report::Report;
use crate::schema::{EnvShape, Schema};

pub use resolve::{ResolvedEnv, resolve};
pub use validate::{missing_required, validate};

/// Runs the validate, resolve and report steps against an environment source.
#[derive(Debug, Clone)]
pub struct EnvReader<S = ProcessEnv> {
    source: S,
    report: bool,
}

impl Default for EnvReader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvReader<ProcessEnv> {
    /// Reader over the live process environment.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl<S: EnvSource> EnvReader<S> {
    /// Reader over an arbitrary source.
    #[must_use]
    pub const fn with_source(source: S) -> Self {
        Self {
            source,
            report: true,
        }
    }

    /// Enables or disables the report table (enabled by default).
    #[must_use]
    pub const fn with_report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Validates, resolves and reports, writing the table to `sink`.
    ///
    /// A failed report write is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`MissingVariableError`] before anything is resolved or
    /// reported if a required variable is absent or empty.
    pub fn try_read<W>(
        &self,
        schema: &Schema,
        sink: &mut W,
    ) -> Result<ResolvedEnv, MissingVariableError>
    where
        W: Write + ?Sized,
    {
        validate(schema, &self.source)?;

        let resolved = resolve(schema, &self.source);
        let unset = resolved.iter().filter(|(_, v)| v.is_empty()).count();
        info!(variables = resolved.len(), unset, "environment resolved");

        if self.report {
            let report = Report::new(schema, &resolved);
            if let Err(e) = report.write_to(sink) {
                warn!(error = %e, "failed to write environment report");
            }
        }

        Ok(resolved)
    }

    /// Reads `schema`, reporting to stderr.
    ///
    /// On a missing required variable the error is printed to stderr and the
    /// process exits with [`MISSING_VARIABLE_EXIT_CODE`]; this function
    /// then never returns.
    #[must_use]
    pub fn read(&self, schema: &Schema) -> ResolvedEnv {
        match self.try_read(schema, &mut std::io::stderr().lock()) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(missing = ?e.keys(), "aborting on missing environment");
                eprintln!("Error: {e}");
                std::process::exit(MISSING_VARIABLE_EXIT_CODE);
            }
        }
    }

    /// Non-terminating counterpart of [`read_shape`](Self::read_shape).
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Schema`](crate::error::EnvError::Schema) if the
    /// declared schema of `T` is invalid and
    /// [`EnvError::Missing`](crate::error::EnvError::Missing) if a required
    /// variable is absent or empty.
    pub fn try_read_shape<T, W>(&self, sink: &mut W) -> EnvResult<T>
    where
        T: EnvShape,
        W: Write + ?Sized,
    {
        let schema = T::schema()?;
        let resolved = self.try_read(&schema, sink)?;
        Ok(T::from_resolved(&resolved))
    }

    /// Reads the schema of `T` and projects the result onto it.
    ///
    /// Exits the process like [`read`](Self::read) on a missing variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared schema of `T` is invalid.
    pub fn read_shape<T: EnvShape>(&self) -> Result<T, SchemaError> {
        let schema = T::schema()?;
        Ok(T::from_resolved(&self.read(&schema)))
    }
}

/// Reads `schema` from the process environment, reporting to stderr.
///
/// Exits the process with status 1 if a required variable is missing.
///
/// # Example
///
/// ```no_run
/// use envread::reader::read;
/// use envread::schema::{Schema, VariableSpec};
///
/// let schema = Schema::new().with(
///     VariableSpec::builder()
///         .key("API_PORT")
///         .description("A number for the port the API will listen on")
///         .with_required(true)
///         .build(),
/// )?;
///
/// let env = read(&schema);
/// println!("listening on {}", &env["API_PORT"]);
/// # Ok::<(), envread::error::SchemaError>(())
/// ```
#[must_use]
pub fn read(schema: &Schema) -> ResolvedEnv {
    EnvReader::new().read(schema)
}

/// Reads the schema declared by `T` from the process environment.
///
/// # Errors
///
/// Returns an error if the declared schema of `T` is invalid.
pub fn read_shape<T: EnvShape>() -> Result<T, SchemaError> {
    EnvReader::new().read_shape()
}
