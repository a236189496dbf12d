//! INSERT and upsert assemblers.

use super::QueryBuilder;
use super::shape::{batch_columns, literals};
use crate::error::{Caller, SqlResult};
use crate::predicate;
use crate::row::Row;
use crate::sql::{Statement, StatementBuilder, StatementKind};

impl QueryBuilder {
    /// `INSERT INTO <table> (<columns>) VALUES (<values>)`, columns and values
    /// in the row's order.
    pub fn insert_one(&self, table: &str, row: &Row) -> SqlResult<Statement> {
        let caller = Caller::new("build_insert_one");
        self.assemble(caller, StatementKind::Insert, || {
            self.insert_rows(caller, table, std::slice::from_ref(row), "row")
        })
    }

    /// One INSERT with a value tuple per row.
    ///
    /// Every row must have the same columns, in the same order, as `rows[0]`.
    pub fn insert_many(&self, table: &str, rows: &[Row]) -> SqlResult<Statement> {
        let caller = Caller::new("build_insert_many");
        self.assemble(caller, StatementKind::Insert, || {
            self.insert_rows(caller, table, rows, "rows")
        })
    }

    /// [`insert_one`](Self::insert_one) plus `ON DUPLICATE KEY UPDATE <set_data>`.
    ///
    /// `set_data` may hold [`raw`](crate::raw) expressions such as
    /// `raw("count + 1")`; bound values in it are bound as usual.
    pub fn upsert_one(&self, table: &str, row: &Row, set_data: &Row) -> SqlResult<Statement> {
        let caller = Caller::new("build_upsert_one");
        self.assemble(caller, StatementKind::Insert, || {
            self.upsert_rows(caller, table, std::slice::from_ref(row), "row", set_data)
        })
    }

    /// [`insert_many`](Self::insert_many) plus `ON DUPLICATE KEY UPDATE <set_data>`.
    pub fn upsert_many(&self, table: &str, rows: &[Row], set_data: &Row) -> SqlResult<Statement> {
        let caller = Caller::new("build_upsert_many");
        self.assemble(caller, StatementKind::Insert, || {
            self.upsert_rows(caller, table, rows, "rows", set_data)
        })
    }

    fn insert_rows(
        &self,
        caller: Caller,
        table: &str,
        rows: &[Row],
        argument: &'static str,
    ) -> SqlResult<StatementBuilder> {
        let table = caller.ident("table", table)?;
        let cols = batch_columns(caller, argument, rows)?;

        let mut tuples = Vec::with_capacity(rows.len());
        for row in rows {
            tuples.push(predicate::tuple(&self.config, &literals(caller, argument, row)?));
        }

        let mut q = self.start("INSERT INTO ");
        q.push_ident(&table)
            .push(" ")
            .push_fragment(predicate::column_list(&self.config, &cols))
            .push(" VALUES ")
            .push_fragment(predicate::glue(&self.config, tuples, ", "));
        Ok(q)
    }

    fn upsert_rows(
        &self,
        caller: Caller,
        table: &str,
        rows: &[Row],
        argument: &'static str,
        set_data: &Row,
    ) -> SqlResult<StatementBuilder> {
        if !self.config.flavor.supports_on_duplicate_key() {
            return Err(caller.unsupported("ON DUPLICATE KEY UPDATE", self.config.flavor));
        }
        let mut q = self.insert_rows(caller, table, rows, argument)?;
        let updates = self.assignments(caller, "set_data", set_data, true)?;
        q.push(" ON DUPLICATE KEY UPDATE ").push_fragment(updates);
        Ok(q)
    }
}
