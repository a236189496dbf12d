//! Input checks shared by the assemblers.

use super::QueryBuilder;
use crate::error::{Caller, SqlResult};
use crate::ident::Ident;
use crate::predicate;
use crate::row::Row;
use crate::sql::StatementBuilder;
use crate::value::{Literal, Value};

impl QueryBuilder {
    /// `a, b, c` (or `*`) for the SELECT list.
    pub(super) fn field_list<S: AsRef<str>>(
        &self,
        caller: Caller,
        fields: &[S],
    ) -> SqlResult<StatementBuilder> {
        caller.require_non_empty("fields", fields.len())?;
        if fields.len() == 1 && fields[0].as_ref() == "*" {
            return Ok(self.start("*"));
        }

        let mut out = self.empty();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(", ");
            }
            out.push_ident(&caller.ident("fields", field.as_ref())?);
        }
        Ok(out)
    }

    /// Conditions ANDed together. Must be non-empty.
    pub(super) fn conjunction(
        &self,
        caller: Caller,
        argument: &'static str,
        conditions: &Row,
    ) -> SqlResult<StatementBuilder> {
        caller.require_non_empty(argument, conditions.len())?;
        let mut parts = Vec::with_capacity(conditions.len());
        for (column, value) in conditions.iter() {
            let ident = caller.ident(argument, column)?;
            let lit = bound(caller, argument, column, value)?;
            parts.push(predicate::equality(&self.config, &ident, lit));
        }
        Ok(predicate::glue(&self.config, parts, " AND "))
    }

    /// `a = ?, b = NULL, ...`. Raw values only when `allow_raw`.
    pub(super) fn assignments(
        &self,
        caller: Caller,
        argument: &'static str,
        row: &Row,
        allow_raw: bool,
    ) -> SqlResult<StatementBuilder> {
        caller.require_non_empty(argument, row.len())?;
        let mut parts = Vec::with_capacity(row.len());
        for (column, value) in row.iter() {
            let ident = caller.ident(argument, column)?;
            if !allow_raw {
                bound(caller, argument, column, value)?;
            }
            parts.push(predicate::assignment(&self.config, &ident, value));
        }
        Ok(predicate::glue(&self.config, parts, ", "))
    }
}

/// Column identifiers of a non-empty row.
pub(super) fn columns(caller: Caller, argument: &'static str, row: &Row) -> SqlResult<Vec<Ident>> {
    caller.require_non_empty(argument, row.len())?;
    row.columns()
        .map(|column| caller.ident(argument, column))
        .collect()
}

/// Literals of a row, in column order; raw values are rejected.
pub(super) fn literals<'a>(
    caller: Caller,
    argument: &'static str,
    row: &'a Row,
) -> SqlResult<Vec<&'a Literal>> {
    row.iter()
        .map(|(column, value)| bound(caller, argument, column, value))
        .collect()
}

/// Columns shared by every row of a batch.
///
/// The first row defines the column set and order; every other row must match
/// it exactly.
pub(super) fn batch_columns(
    caller: Caller,
    argument: &'static str,
    rows: &[Row],
) -> SqlResult<Vec<Ident>> {
    let Some(first) = rows.first() else {
        return Err(caller.contract(argument, "must contain at least one row"));
    };
    let columns = columns(caller, argument, first)?;
    for (i, row) in rows.iter().enumerate().skip(1) {
        if !row.same_columns(first) {
            return Err(caller.contract(
                argument,
                format!(
                    "row {i} has columns [{}], expected [{}] as in row 0",
                    row.columns().collect::<Vec<_>>().join(", "),
                    first.columns().collect::<Vec<_>>().join(", "),
                ),
            ));
        }
    }
    Ok(columns)
}

fn bound<'a>(
    caller: Caller,
    argument: &'static str,
    column: &str,
    value: &'a Value,
) -> SqlResult<&'a Literal> {
    match value {
        Value::Bound(lit) => Ok(lit),
        Value::Raw(_) => Err(caller.contract(
            argument,
            format!("column '{column}' holds a raw expression; raw SQL is only accepted in upsert set_data"),
        )),
    }
}
