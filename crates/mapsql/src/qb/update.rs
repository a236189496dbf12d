//! UPDATE assemblers.

use super::QueryBuilder;
use super::shape::{batch_columns, literals};
use crate::error::{Caller, SqlResult};
use crate::predicate;
use crate::row::Row;
use crate::sql::{Statement, StatementKind};

impl QueryBuilder {
    /// `UPDATE <table> SET <row> WHERE <conditions ANDed>`.
    ///
    /// `conditions` must be non-empty; an UPDATE without WHERE is refused.
    pub fn update_one(&self, table: &str, row: &Row, conditions: &Row) -> SqlResult<Statement> {
        let caller = Caller::new("build_update_one");
        self.assemble(caller, StatementKind::Update, || {
            let table = caller.ident("table", table)?;
            let set = self.assignments(caller, "row", row, false)?;
            let predicate = self.conjunction(caller, "conditions", conditions)?;

            let mut q = self.start("UPDATE ");
            q.push_ident(&table)
                .push(" SET ")
                .push_fragment(set)
                .push(" WHERE ")
                .push_fragment(predicate);
            Ok(q)
        })
    }

    /// `UPDATE <table> SET <row> WHERE (<k1>, <k2>) IN ((?, ?), (?, ?))`.
    ///
    /// Updates every record whose composite key matches one of `key_rows`.
    /// All key rows must have the same columns, in the same order, as
    /// `key_rows[0]`.
    pub fn update_many(&self, table: &str, row: &Row, key_rows: &[Row]) -> SqlResult<Statement> {
        let caller = Caller::new("build_update_many");
        self.assemble(caller, StatementKind::Update, || {
            let table = caller.ident("table", table)?;
            let set = self.assignments(caller, "row", row, false)?;
            let keys = batch_columns(caller, "key_rows", key_rows)?;

            let mut tuples = Vec::with_capacity(key_rows.len());
            for key_row in key_rows {
                tuples.push(predicate::tuple(
                    &self.config,
                    &literals(caller, "key_rows", key_row)?,
                ));
            }

            let mut q = self.start("UPDATE ");
            q.push_ident(&table)
                .push(" SET ")
                .push_fragment(set)
                .push(" WHERE ")
                .push_fragment(predicate::tuple_in(&self.config, &keys, tuples));
            Ok(q)
        })
    }
}
