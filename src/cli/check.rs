// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `check` command.
//!
//! ```text
//! -v NAME[:FLAGS][=DESCRIPTION]
//!      |     |         |
//!      |     |         +-- free text, may contain '=' and ':'
//!      |     +-- comma list: required, secret
//!      +-- variable name
//! ```

use clap::{Args, ValueEnum};

use crate::error::SchemaError;
use crate::schema::VariableSpec;
use crate::schema::types::validate_key;

/// Arguments for `check`.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Declares a variable as NAME[:FLAGS][=DESCRIPTION].
    /// Can be specified multiple times.
    #[arg(
        short = 'v',
        long = "var",
        value_name = "DECL",
        required = true,
        action = clap::ArgAction::Append,
        value_parser = parse_declaration
    )]
    pub vars: Vec<VariableSpec>,

    /// How the resolved values are printed on stdout.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Env)]
    pub format: OutputFormat,

    /// Does not print the summary table on stderr.
    #[arg(long)]
    pub no_report: bool,
}

/// Output format for the resolved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=value` lines; values with control characters, quotes or
    /// backslashes are double-quoted and escaped.
    #[default]
    Env,
    /// A JSON object.
    Json,
    /// Nothing; only the exit code matters.
    None,
}

/// Parses a `NAME[:FLAGS][=DESCRIPTION]` declaration.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidDeclaration`] for an unknown flag or an
/// invalid variable name.
pub fn parse_declaration(input: &str) -> Result<VariableSpec, SchemaError> {
    let invalid = |message: String| SchemaError::InvalidDeclaration {
        input: input.to_string(),
        message,
    };

    let (head, description) = input.split_once('=').unwrap_or((input, ""));
    let (key, flags) = head.split_once(':').unwrap_or((head, ""));
    let key = key.trim();
    validate_key(key).map_err(|e| invalid(e.to_string()))?;

    let mut required = false;
    let mut secret = false;
    for flag in flags.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        match flag {
            "required" => required = true,
            "secret" => secret = true,
            other => {
                return Err(invalid(format!(
                    "unknown flag '{other}' (expected 'required' or 'secret')"
                )));
            }
        }
    }

    Ok(VariableSpec::builder()
        .key(key)
        .description(description.trim())
        .with_required(required)
        .with_secret(secret)
        .build())
}
