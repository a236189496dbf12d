//! # mapsql
//!
//! Parameterized SELECT / INSERT / UPDATE / upsert statements assembled from
//! ordered key/value data.
//!
//! ## Features
//!
//! - **Plain data in**: rows and condition maps are ordered `column => value`
//!   maps ([`Row`], [`InGroup`]), buildable in code with [`row!`] or straight
//!   from JSON objects
//! - **Values are always bound**: every value becomes a placeholder; the only
//!   way to put SQL text into a statement is [`raw`], accepted only in upsert
//!   `set_data`
//! - **Identifiers are always quoted**: table and column names are validated
//!   and quoted for the target [`Flavor`]
//! - **Safe defaults**: SELECT and UPDATE require a WHERE clause, batches
//!   must have uniform columns
//! - **Two flavors**: MySQL (`` ` `` quoting, `?`) by default, PostgreSQL
//!   (`"` quoting, `$n`) through [`BuilderConfig`]
//! - **Runs on tokio-postgres**: see [`Executor`]
//!
//! ## Example
//!
//! ```
//! use mapsql::{build_insert_many, build_select, row, Literal};
//!
//! let stmt = build_select(&["id", "name"], "users", &row! { "status" => "active" })?;
//! assert_eq!(stmt.sql(), "SELECT `id`, `name` FROM `users` WHERE `status` = ?");
//!
//! let stmt = build_insert_many(
//!     "logs",
//!     &[row! { "a" => 1, "b" => 2 }, row! { "a" => 3, "b" => 4 }],
//! )?;
//! assert_eq!(stmt.sql(), "INSERT INTO `logs` (`a`, `b`) VALUES (?, ?), (?, ?)");
//! assert_eq!(stmt.params().len(), 4);
//! # Ok::<(), mapsql::SqlError>(())
//! ```
//!
//! An empty string is treated as NULL by default (`""` renders `IS NULL` in a
//! WHERE clause and `NULL` in VALUES / SET lists). Use
//! [`BuilderConfig::keep_empty_strings`] to bind it as-is.
//!
//! ## NULL conditions
//!
//! A condition is an equality, `column = <value>`. Taken literally, a NULL
//! value would give `column = NULL`, which matches no row. This crate
//! deliberately diverges from that literal form and renders `IS NULL` by
//! default. [`NullPredicate::Equals`] restores the literal form for callers
//! that depend on the exact text:
//!
//! ```
//! use mapsql::{BuilderConfig, NullPredicate, QueryBuilder, build_select, row};
//!
//! let stmt = build_select(&["id"], "users", &row! { "deleted_at" => "" })?;
//! assert_eq!(stmt.sql(), "SELECT `id` FROM `users` WHERE `deleted_at` IS NULL");
//!
//! let literal = QueryBuilder::new(BuilderConfig::new().null_predicate(NullPredicate::Equals));
//! let stmt = literal.select(&["id"], "users", &row! { "deleted_at" => "" })?;
//! assert_eq!(stmt.sql(), "SELECT `id` FROM `users` WHERE `deleted_at` = NULL");
//! # Ok::<(), mapsql::SqlError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod flavor;
pub mod ident;
mod monitor;
pub mod predicate;
pub mod qb;
pub mod row;
pub mod sql;
mod types;
pub mod value;

pub use client::Executor;
pub use config::{BuilderConfig, EmptyStringPolicy, NullPredicate};
pub use error::{SqlError, SqlResult};
pub use flavor::Flavor;
pub use ident::Ident;
pub use row::{InGroup, Row};
pub use sql::{Statement, StatementBuilder, StatementKind};
pub use value::{Literal, Value, raw};

pub use qb::{
    QueryBuilder, build_insert_many, build_insert_one, build_select, build_select_compound,
    build_update_many, build_update_one, build_upsert_many, build_upsert_one,
};
