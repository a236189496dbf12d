//! Predicate composition.
//!
//! Small pieces the assemblers are made of: equality and IN predicates,
//! assignments for SET lists, and [`glue`] to join fragments with a separator.
//! Every function renders NULL and empty-string values according to the
//! [`BuilderConfig`], and binds everything else.

use crate::config::{BuilderConfig, NullPredicate};
use crate::error::{Caller, SqlResult};
use crate::ident::Ident;
use crate::sql::StatementBuilder;
use crate::value::{Literal, Value};

/// Push `value` as a placeholder, or as `NULL` when the config says so.
pub fn push_literal(config: &BuilderConfig, out: &mut StatementBuilder, value: &Literal) {
    if config.renders_null(value) {
        out.push_null();
    } else {
        out.push_bind(value.clone());
    }
}

/// `` `column` = ? `` for a WHERE clause.
///
/// NULL values render as `` `column` IS NULL `` (or `= NULL`, see
/// [`NullPredicate`]).
pub fn equality(config: &BuilderConfig, column: &Ident, value: &Literal) -> StatementBuilder {
    let mut out = StatementBuilder::new(config.flavor);
    out.push_ident(column);
    if config.renders_null(value) {
        match config.null_predicate {
            NullPredicate::IsNull => out.push(" IS NULL"),
            NullPredicate::Equals => out.push(" = NULL"),
        };
    } else {
        out.push(" = ").push_bind(value.clone());
    }
    out
}

/// `` `column` = ? `` for a SET or ON DUPLICATE KEY UPDATE list.
///
/// Raw values are written verbatim; NULL values as `= NULL`.
pub fn assignment(config: &BuilderConfig, column: &Ident, value: &Value) -> StatementBuilder {
    let mut out = StatementBuilder::new(config.flavor);
    out.push_ident(column).push(" = ");
    match value {
        Value::Bound(lit) => push_literal(config, &mut out, lit),
        Value::Raw(expr) => {
            out.push(expr);
        }
    }
    out
}

/// `` `column` IN (?, ?, ...) ``.
///
/// An empty `values` is a contract error (`IN ()` is not valid SQL).
pub fn in_list(
    config: &BuilderConfig,
    column: &Ident,
    values: &[Literal],
) -> SqlResult<StatementBuilder> {
    if values.is_empty() {
        return Err(Caller::new("in_list").contract(
            "values",
            format!("IN list for {} must not be empty", column.to_sql(config.flavor)),
        ));
    }
    let mut out = StatementBuilder::new(config.flavor);
    out.push_ident(column).push(" IN (");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(", ");
        }
        push_literal(config, &mut out, value);
    }
    out.push(")");
    Ok(out)
}

/// `(?, ?, ...)` for one row of values.
pub fn tuple(config: &BuilderConfig, values: &[&Literal]) -> StatementBuilder {
    let mut out = StatementBuilder::with_sql(config.flavor, "(");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(", ");
        }
        push_literal(config, &mut out, value);
    }
    out.push(")");
    out
}

/// `` (`a`, `b`) IN ((?, ?), (?, ?)) ``.
pub fn tuple_in(
    config: &BuilderConfig,
    columns: &[Ident],
    tuples: Vec<StatementBuilder>,
) -> StatementBuilder {
    let mut out = column_list(config, columns);
    out.push(" IN (");
    out.push_fragment(glue(config, tuples, ", "));
    out.push(")");
    out
}

/// `` (`a`, `b`, ...) ``
pub fn column_list(config: &BuilderConfig, columns: &[Ident]) -> StatementBuilder {
    let mut out = StatementBuilder::with_sql(config.flavor, "(");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push(", ");
        }
        out.push_ident(column);
    }
    out.push(")");
    out
}

/// Join fragments with `separator`.
pub fn glue(
    config: &BuilderConfig,
    fragments: impl IntoIterator<Item = StatementBuilder>,
    separator: &str,
) -> StatementBuilder {
    StatementBuilder::glue(config.flavor, fragments, separator)
}
