//! Statement assemblers.
//!
//! One assembler per statement shape. Each validates its whole input first,
//! then composes the statement from [`predicate`](crate::predicate) pieces, so
//! a call either returns a complete [`Statement`] or a [`SqlError`] naming the
//! assembler and the offending argument, never anything in between.
//!
//! ```
//! use mapsql::{build_update_one, row, Literal};
//!
//! let stmt = build_update_one(
//!     "users",
//!     &row! { "name" => "Ann", "email" => "" },
//!     &row! { "id" => 7 },
//! )?;
//! assert_eq!(stmt.sql(), "UPDATE `users` SET `name` = ?, `email` = NULL WHERE `id` = ?");
//! assert_eq!(stmt.params(), [Literal::from("Ann"), Literal::from(7)]);
//! # Ok::<(), mapsql::SqlError>(())
//! ```
//!
//! The `build_*` free functions use [`BuilderConfig::default`] (MySQL).
//! Use a [`QueryBuilder`] to pick another flavor or policy.

mod insert;
mod select;
mod shape;
mod update;


use crate::config::BuilderConfig;
use crate::error::{Caller, SqlResult};
use crate::monitor;
use crate::row::{InGroup, Row};
use crate::sql::{Statement, StatementBuilder, StatementKind};

/// Assembles statements under one [`BuilderConfig`].
///
/// Holds no state besides its configuration; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: BuilderConfig,
}

impl QueryBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn empty(&self) -> StatementBuilder {
        StatementBuilder::new(self.config.flavor)
    }

    fn start(&self, sql: &str) -> StatementBuilder {
        StatementBuilder::with_sql(self.config.flavor, sql)
    }

    /// Run `build`, freeze its output and log the outcome.
    fn assemble(
        &self,
        caller: Caller,
        kind: StatementKind,
        build: impl FnOnce() -> SqlResult<StatementBuilder>,
    ) -> SqlResult<Statement> {
        match build().and_then(|b| b.finish(kind, caller.assembler)) {
            Ok(stmt) => {
                monitor::statement_built(&self.config, &stmt);
                Ok(stmt)
            }
            Err(err) => {
                monitor::statement_rejected(caller.assembler, &err);
                Err(err)
            }
        }
    }
}

/// `SELECT <fields> FROM <table> WHERE <conditions ANDed>`.
pub fn build_select<S: AsRef<str>>(
    fields: &[S],
    table: &str,
    conditions: &Row,
) -> SqlResult<Statement> {
    QueryBuilder::default().select(fields, table, conditions)
}

/// `SELECT ... WHERE (<groups ORed>) AND (<where_conditions ANDed>)`.
pub fn build_select_compound<S: AsRef<str>>(
    fields: &[S],
    table: &str,
    in_groups: &[InGroup],
    where_conditions: &Row,
) -> SqlResult<Statement> {
    QueryBuilder::default().select_compound(fields, table, in_groups, where_conditions)
}

/// `INSERT INTO <table> (<columns>) VALUES (<values>)`.
pub fn build_insert_one(table: &str, row: &Row) -> SqlResult<Statement> {
    QueryBuilder::default().insert_one(table, row)
}

/// `INSERT INTO <table> (<columns>) VALUES (...), (...)`.
pub fn build_insert_many(table: &str, rows: &[Row]) -> SqlResult<Statement> {
    QueryBuilder::default().insert_many(table, rows)
}

/// Single-row insert with `ON DUPLICATE KEY UPDATE <set_data>`.
pub fn build_upsert_one(table: &str, row: &Row, set_data: &Row) -> SqlResult<Statement> {
    QueryBuilder::default().upsert_one(table, row, set_data)
}

/// Batch insert with `ON DUPLICATE KEY UPDATE <set_data>`.
pub fn build_upsert_many(table: &str, rows: &[Row], set_data: &Row) -> SqlResult<Statement> {
    QueryBuilder::default().upsert_many(table, rows, set_data)
}

/// `UPDATE <table> SET <row> WHERE <conditions ANDed>`.
pub fn build_update_one(table: &str, row: &Row, conditions: &Row) -> SqlResult<Statement> {
    QueryBuilder::default().update_one(table, row, conditions)
}

/// `UPDATE <table> SET <row> WHERE (<keys>) IN ((...), (...))`.
pub fn build_update_many(table: &str, row: &Row, key_rows: &[Row]) -> SqlResult<Statement> {
    QueryBuilder::default().update_many(table, row, key_rows)
}
