// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envread using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envread [global options] <command>
//! check -v NAME[:FLAGS][=DESCRIPTION]... [--format env|json|none] [--no-report]
//! version
//! ```

pub mod check;
pub mod global;


use crate::cli::check::CheckArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment schema reader.
///
/// Validates environment variables against a declared schema.
#[derive(Debug, Parser)]
#[command(
    name = "envread",
    author,
    version,
    about = "Read and validate environment variables against a schema",
    long_about = "envread Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the declared environment variables, fails with exit code 1\n\
                  if a required one is missing or empty, prints a summary table\n\
                  on stderr (secrets masked) and the resolved values on stdout.",
    after_help = "DECLARATIONS:\n\n\
                  Variables are declared with -v NAME[:FLAGS][=DESCRIPTION], where\n\
                  FLAGS is a comma-separated list of `required` and `secret`:\n\n\
                  \x20 envread check -v 'API_PORT:required=Port the API listens on' \\\n\
                  \x20               -v 'PAYMENT_SERVICE_KEY:required,secret' \\\n\
                  \x20               -v LOG_LEVEL"
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Validates and prints the declared variables.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
