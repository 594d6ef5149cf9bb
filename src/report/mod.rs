// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Human-readable summary of a resolved environment.
//!
//! ```text
//! Schema + ResolvedEnv
//!        |
//!        v
//!  ReportRow { Variable, Value, Description }   one per key
//!        |
//!        v
//!  ┌──────────┬──────────────┬─────────────┐
//!  │ Variable │ Value        │ Description │
//!  ├──────────┼──────────────┼─────────────┤
//!  │ API_KEY  │ ****1234     │ ...         │
//!  └──────────┴──────────────┴─────────────┘
//!
//! Value: ""      -> "Missing from environment"
//!        secret  -> "****" + last 4 chars
//!        other   -> raw
//! ```

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reader::ResolvedEnv;
use crate::schema::{Schema, VariableSpec};

/// Shown instead of an empty or unset value.
pub const MISSING_PLACEHOLDER: &str = "Missing from environment";

/// Replaces the hidden part of a secret value.
pub const SECRET_MASK: &str = "****";

/// Number of trailing characters of a secret that stay visible.
pub const VISIBLE_SECRET_CHARS: usize = 4;

/// Returns the text shown for `value` in a report.
#[must_use]
pub fn display_value<'a>(spec: &VariableSpec, value: &'a str) -> Cow<'a, str> {
    if value.is_empty() {
        Cow::Borrowed(MISSING_PLACEHOLDER)
    } else if spec.is_secret() {
        Cow::Owned(mask_secret(value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Masks all but the last [`VISIBLE_SECRET_CHARS`] characters.
///
/// Values shorter than that keep every character after the mask.
#[must_use]
pub fn mask_secret(value: &str) -> String {
    let count = value.chars().count();
    let start = value
        .char_indices()
        .nth(count.saturating_sub(VISIBLE_SECRET_CHARS))
        .map_or(0, |(i, _)| i);
    format!("{SECRET_MASK}{}", &value[start..])
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRow {
    #[tabled(rename = "Variable")]
    pub variable: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

/// Report over every schema key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Builds one row per schema key, in schema order.
    #[must_use]
    pub fn new(schema: &Schema, resolved: &ResolvedEnv) -> Self {
        let rows = schema
            .iter()
            .map(|spec| {
                let value = resolved.get(spec.key()).unwrap_or_default();
                ReportRow {
                    variable: spec.key().to_string(),
                    value: display_value(spec, value).into_owned(),
                    description: spec.description().to_string(),
                }
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Renders the rows as a table.
    #[must_use]
    pub fn render(&self) -> String {
        let mut table = Table::new(self.rows.clone());
        table.with(Style::sharp());
        table.to_string()
    }

    /// Writes the table followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.render())?;
        writer.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
