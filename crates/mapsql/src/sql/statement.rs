use crate::client::Executor;
use crate::error::SqlResult;
use crate::flavor::Flavor;
use crate::value::Literal;
use std::fmt;

/// Statement shape, used for logging and to pick the execution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
}

impl StatementKind {
    /// Whether the statement returns rows.
    pub fn returns_rows(self) -> bool {
        matches!(self, StatementKind::Select)
    }
}

/// A finished statement: SQL text plus the parameters for its placeholders,
/// in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Literal>,
    flavor: Flavor,
    kind: StatementKind,
    tag: &'static str,
}

impl Statement {
    pub(crate) fn new(
        sql: String,
        params: Vec<Literal>,
        flavor: Flavor,
        kind: StatementKind,
        tag: &'static str,
    ) -> Self {
        Self {
            sql,
            params,
            flavor,
            kind,
            tag,
        }
    }

    /// SQL text with placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameters in placeholder order.
    pub fn params(&self) -> &[Literal] {
        &self.params
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Name of the assembler that produced this statement.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Split into `(sql, params)` for drivers that want owned values.
    pub fn into_parts(self) -> (String, Vec<Literal>) {
        (self.sql, self.params)
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }

    /// Run the statement and collect the returned rows.
    pub async fn fetch_all<E: Executor>(&self, executor: &E) -> SqlResult<Vec<E::Row>> {
        executor.fetch_all(self).await
    }

    /// Run the statement and return the number of affected rows.
    pub async fn execute<E: Executor>(&self, executor: &E) -> SqlResult<u64> {
        executor.execute(self).await
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
