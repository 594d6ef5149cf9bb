// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed projection of a resolved environment.
//!
//! ```text
//! env_shape! { struct ApiEnv { api_port: "API_PORT" ... } }
//!        |
//!        v
//!  ApiEnv::schema()          -> Schema
//!  ApiEnv::from_resolved(&r) -> ApiEnv { api_port: r["API_PORT"], .. }
//! ```

use crate::error::SchemaResult;
use crate::reader::ResolvedEnv;

use super::Schema;

/// A struct whose fields mirror a schema.
pub trait EnvShape: Sized {
    /// The schema the fields are read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration has invalid or duplicate keys.
    fn schema() -> SchemaResult<Schema>;

    /// Builds the struct from a record resolved against [`schema`](Self::schema).
    fn from_resolved(resolved: &ResolvedEnv) -> Self;
}

/// Declares a struct with one `String` field per environment variable and
/// implements [`EnvShape`] for it.
///
/// Each field takes the variable name, an optional description and any of
/// the `required` / `secret` markers. Any other marker fails to compile.
///
/// ```
/// envread::env_shape! {
///     /// API settings.
///     pub struct ApiEnv {
///         api_port: "API_PORT" => "A number for the port the API will listen on", required;
///         payment_key: "PAYMENT_SERVICE_KEY" => "A key from PaymentService", required, secret;
///         log_level: "LOG_LEVEL";
///     }
/// }
///
/// use envread::schema::EnvShape;
///
/// let schema = ApiEnv::schema()?;
/// assert!(schema.get("PAYMENT_SERVICE_KEY").is_some_and(|s| s.is_secret()));
/// # Ok::<(), envread::error::SchemaError>(())
/// ```
#[macro_export]
macro_rules! env_shape {
    (@flag required required) => { true };
    (@flag secret secret) => { true };
    (@flag required secret) => { false };
    (@flag secret required) => { false };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $key:literal $(=> $description:literal)? $(, $flag:ident)* ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::std::string::String,
            )*
        }

        impl $crate::schema::EnvShape for $name {
            fn schema() -> $crate::error::SchemaResult<$crate::schema::Schema> {
                $crate::schema::Schema::from_specs([
                    $(
                        $crate::schema::VariableSpec::builder()
                            .key($key)
                            $(.description($description))?
                            .with_required(false $(|| $crate::env_shape!(@flag required $flag))*)
                            .with_secret(false $(|| $crate::env_shape!(@flag secret $flag))*)
                            .build(),
                    )*
                ])
            }

            fn from_resolved(resolved: &$crate::reader::ResolvedEnv) -> Self {
                Self {
                    $(
                        $field: resolved.get($key).unwrap_or_default().to_string(),
                    )*
                }
            }
        }
    };
}
