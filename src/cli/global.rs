// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --log-level N      ← Console verbosity (0-5), also ENVREAD_LOG_LEVEL
//! --file-log-level N ← File verbosity (defaults to 4=debug)
//! --log-file FILE    ← Also log to FILE
//! --show-target      ← Prefix console events with their module path
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::{LogConfig, LogLevel};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        env = "ENVREAD_LOG_LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, only used with --log-file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Show the module path of each console log event.
    #[arg(long = "show-target")]
    pub show_target: bool,
}

impl GlobalOptions {
    /// Logging configuration for these options.
    ///
    /// The console falls back to warnings and the file to debug.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();

        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::DEBUG);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .with_show_target(self.show_target)
            .build()
    }
}
