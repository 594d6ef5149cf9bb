// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `check` command.
//!
//! ```text
//! CheckArgs.vars --> Schema --> reader::read (exit 1 on missing)
//!                                   |
//!                                   v
//!                       stdout: env lines | JSON | nothing
//! ```

use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::Write;

use anyhow::Context;
use tracing::debug;

use crate::cli::check::{CheckArgs, OutputFormat};
use crate::error::Result;
use crate::reader::{EnvReader, ResolvedEnv};
use crate::schema::Schema;

/// Run the check command against the process environment.
///
/// Exits the process with status 1 if a required variable is missing.
///
/// # Errors
///
/// Returns an error if the declarations contain a duplicate variable or if
/// stdout cannot be written.
pub fn run_check_command(args: &CheckArgs) -> Result<()> {
    let schema = Schema::from_specs(args.vars.iter().cloned())?;
    debug!(variables = schema.len(), format = ?args.format, "checking environment");

    let resolved = EnvReader::new().with_report(!args.no_report).read(&schema);

    let mut stdout = std::io::stdout().lock();
    write_resolved(&resolved, args.format, &mut stdout).context("failed to write to stdout")
}

/// Writes the resolved record in the requested format.
///
/// # Errors
///
/// Returns any error from the writer or the JSON encoder.
pub fn write_resolved<W: Write>(
    resolved: &ResolvedEnv,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Env => {
            for (key, value) in resolved.iter() {
                writeln!(out, "{key}={}", env_value(value))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, resolved)?;
            writeln!(out)?;
        }
        OutputFormat::None => {}
    }
    out.flush()?;
    Ok(())
}

/// Formats a value for a `KEY=value` line.
///
/// Values that could break the line apart are written in double quotes with
/// `\n`, `\r`, `\t`, `\"` and `\\` escapes, and other control characters
/// as `\u{..}`. Anything else is written as is.
fn env_value(value: &str) -> Cow<'_, str> {
    if !value.chars().any(|c| c.is_control() || c == '"' || c == '\\') {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{{{:x}}}", u32::from(c));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
