// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |                   check
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          reader           |
//!              |  validate -> resolve ->   |
//!              |  report -> ResolvedEnv    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              schema        env     report
//!           VariableSpec  EnvSource  masked table
//!           env_shape!    snapshots
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envread::env::EnvSnapshot;
//! use envread::reader::EnvReader;
//! use envread::schema::{Schema, VariableSpec};
//!
//! let schema = Schema::new()
//!     .with(VariableSpec::builder().key("PORT").description("port").with_required(true).build())?
//!     .with(VariableSpec::builder().key("KEY").description("secret key").with_secret(true).build())?;
//!
//! let env: EnvSnapshot = [("PORT", "8080"), ("KEY", "abcdefgh1234")].into_iter().collect();
//! let resolved = EnvReader::with_source(env)
//!     .try_read(&schema, &mut std::io::stderr())?;
//!
//! assert_eq!(&resolved["PORT"], "8080");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod env;
pub mod error;
pub mod logging;
pub mod reader;
pub mod report;
pub mod schema;

pub use reader::{ResolvedEnv, read};
pub use schema::{Schema, VariableSpec};
