// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative environment schema.
//!
//! # Architecture
//!
//! ```text
//! Schema (ordered Vec<VariableSpec>, unique keys)
//! Build: Schema::new().with(spec)? | Schema::from_specs(iter)?
//! Typed: env_shape! { struct .. } -> EnvShape::schema()
//! ```
//!
//! Declaration order is kept: it is the order of the report table and of
//! the resolved record.

pub mod shape;
pub mod types;


use crate::error::{SchemaError, SchemaResult};

pub use shape::EnvShape;
pub use types::VariableSpec;

/// Ordered set of variable declarations with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    vars: Vec<VariableSpec>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Builds a schema from declarations, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error on the first invalid or duplicate key.
    pub fn from_specs<I>(specs: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = VariableSpec>,
    {
        let mut schema = Self::new();
        for spec in specs {
            schema.insert(spec)?;
        }
        Ok(schema)
    }

    /// Adds a declaration, consuming and returning the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or already declared.
    pub fn with(mut self, spec: VariableSpec) -> SchemaResult<Self> {
        self.insert(spec)?;
        Ok(self)
    }

    /// Adds a declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or already declared.
    pub fn insert(&mut self, spec: VariableSpec) -> SchemaResult<&mut Self> {
        types::validate_key(spec.key())?;
        if self.contains(spec.key()) {
            return Err(SchemaError::DuplicateKey(spec.key().to_string()));
        }
        self.vars.push(spec);
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VariableSpec> {
        self.vars.iter().find(|spec| spec.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over declarations in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, VariableSpec> {
        self.vars.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(VariableSpec::key)
    }

    /// Declarations whose absence is fatal.
    pub fn required(&self) -> impl Iterator<Item = &VariableSpec> {
        self.vars.iter().filter(|spec| spec.is_required())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a VariableSpec;
    type IntoIter = std::slice::Iter<'a, VariableSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
