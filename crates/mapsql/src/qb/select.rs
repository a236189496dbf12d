//! SELECT assemblers.

use super::QueryBuilder;
use crate::error::{Caller, SqlResult};
use crate::predicate;
use crate::row::{InGroup, Row};
use crate::sql::{Statement, StatementBuilder, StatementKind};

impl QueryBuilder {
    /// `SELECT <fields> FROM <table> WHERE <conditions ANDed>`.
    ///
    /// Both `fields` and `conditions` must be non-empty: a select without a
    /// predicate is refused rather than turned into a full-table scan.
    pub fn select<S: AsRef<str>>(
        &self,
        fields: &[S],
        table: &str,
        conditions: &Row,
    ) -> SqlResult<Statement> {
        let caller = Caller::new("build_select");
        self.assemble(caller, StatementKind::Select, || {
            let fields = self.field_list(caller, fields)?;
            let table = caller.ident("table", table)?;
            let predicate = self.conjunction(caller, "conditions", conditions)?;

            let mut q = self.start("SELECT ");
            q.push_fragment(fields)
                .push(" FROM ")
                .push_ident(&table)
                .push(" WHERE ")
                .push_fragment(predicate);
            Ok(q)
        })
    }

    /// `SELECT <fields> FROM <table> WHERE <groups> AND (<where_conditions>)`.
    ///
    /// Inside a group each column becomes `col IN (...)` and the predicates are
    /// ANDed and parenthesized; groups are ORed (and parenthesized together
    /// when there is more than one). Groups may use different columns.
    pub fn select_compound<S: AsRef<str>>(
        &self,
        fields: &[S],
        table: &str,
        in_groups: &[InGroup],
        where_conditions: &Row,
    ) -> SqlResult<Statement> {
        let caller = Caller::new("build_select_compound");
        self.assemble(caller, StatementKind::Select, || {
            let fields = self.field_list(caller, fields)?;
            let table = caller.ident("table", table)?;
            caller.require_non_empty("in_groups", in_groups.len())?;

            let mut groups = Vec::with_capacity(in_groups.len());
            for (i, group) in in_groups.iter().enumerate() {
                groups.push(self.in_group(caller, i, group)?);
            }
            let mut any_group = predicate::glue(&self.config, groups, " OR ");
            if in_groups.len() > 1 {
                any_group = any_group.wrap_parens();
            }

            let filter = self
                .conjunction(caller, "where_conditions", where_conditions)?
                .wrap_parens();

            let mut q = self.start("SELECT ");
            q.push_fragment(fields)
                .push(" FROM ")
                .push_ident(&table)
                .push(" WHERE ")
                .push_fragment(any_group)
                .push(" AND ")
                .push_fragment(filter);
            Ok(q)
        })
    }

    /// `(a IN (...) AND b IN (...))`
    fn in_group(&self, caller: Caller, index: usize, group: &InGroup) -> SqlResult<StatementBuilder> {
        if group.is_empty() {
            return Err(caller.contract("in_groups", format!("group {index} has no columns")));
        }
        let mut parts = Vec::with_capacity(group.len());
        for (column, values) in group.iter() {
            if values.is_empty() {
                return Err(caller.contract(
                    "in_groups",
                    format!("group {index}: IN list for column '{column}' is empty"),
                ));
            }
            let ident = caller.ident("in_groups", column)?;
            parts.push(predicate::in_list(&self.config, &ident, values)?);
        }
        Ok(predicate::glue(&self.config, parts, " AND ").wrap_parens())
    }
}
