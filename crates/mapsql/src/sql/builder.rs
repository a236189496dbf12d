use super::parts::SqlPart;
use super::statement::{Statement, StatementKind};
use crate::error::{Caller, SqlError, SqlResult};
use crate::flavor::Flavor;
use crate::ident::Ident;
use crate::value::Literal;

/// A parameter-safe statement builder.
///
/// Text goes in through [`push`](Self::push) (trusted) and
/// [`push_ident`](Self::push_ident) (quoted); values only through
/// [`push_bind`](Self::push_bind), which records a placeholder and the value
/// in lockstep.
#[must_use]
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    flavor: Flavor,
    parts: Vec<SqlPart>,
    params: Vec<Literal>,
}

impl StatementBuilder {
    /// Create an empty builder.
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            parts: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Create a builder with an initial SQL fragment.
    pub fn with_sql(flavor: Flavor, initial_sql: impl Into<String>) -> Self {
        let mut b = Self::new(flavor);
        let initial = initial_sql.into();
        if !initial.is_empty() {
            b.parts.push(SqlPart::Raw(initial));
        }
        b
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Append raw SQL (no parameters). The text is trusted as-is.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }

        match self.parts.last_mut() {
            Some(SqlPart::Raw(last)) => last.push_str(sql),
            _ => self.parts.push(SqlPart::Raw(sql.to_string())),
        }
        self
    }

    /// Append an identifier, quoted for the flavor the builder renders with.
    pub fn push_ident(&mut self, ident: &Ident) -> &mut Self {
        self.parts.push(SqlPart::Ident(ident.clone()));
        self
    }

    /// Append a parameter placeholder and bind its value.
    pub fn push_bind(&mut self, value: impl Into<Literal>) -> &mut Self {
        self.parts.push(SqlPart::Param);
        self.params.push(value.into());
        self
    }

    /// Append the `NULL` keyword.
    pub fn push_null(&mut self) -> &mut Self {
        self.push("NULL")
    }

    /// Append a comma-separated list of placeholders and bind all values.
    ///
    /// Unlike a silent `IN (NULL)`, an empty list is an error: `IN ()` is not
    /// valid SQL and an empty list almost always means a caller bug.
    pub fn push_bind_list<I>(&mut self, values: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Literal>,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Err(Caller::new("push_bind_list").contract("values", "must not be empty"));
        };

        self.push_bind(first);
        for v in iter {
            self.push(", ");
            self.push_bind(v);
        }
        Ok(self)
    }

    /// Append another fragment, consuming it.
    ///
    /// Identifiers and placeholders of `other` are rendered with this
    /// builder's flavor, whatever flavor `other` was created with.
    pub fn push_fragment(&mut self, other: StatementBuilder) -> &mut Self {
        for part in other.parts {
            match part {
                SqlPart::Raw(s) => {
                    self.push(&s);
                }
                part => self.parts.push(part),
            }
        }
        self.params.extend(other.params);
        self
    }

    /// Join fragments with `separator` (`", "`, `" AND "`, `" OR "`...).
    pub fn glue(
        flavor: Flavor,
        fragments: impl IntoIterator<Item = StatementBuilder>,
        separator: &str,
    ) -> Self {
        let mut out = Self::new(flavor);
        for (i, fragment) in fragments.into_iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_fragment(fragment);
        }
        out
    }

    /// Wrap the whole fragment in parentheses.
    pub fn wrap_parens(self) -> Self {
        let mut out = Self::with_sql(self.flavor, "(");
        out.push_fragment(self);
        out.push(")");
        out
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parameters bound so far, in placeholder order.
    pub fn params(&self) -> &[Literal] {
        &self.params
    }

    pub fn placeholder_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|p| matches!(p, SqlPart::Param))
            .count()
    }

    /// Render the SQL text with the flavor's placeholders.
    pub fn to_sql(&self) -> String {
        // Pre-size to avoid repeated reallocations.
        let mut idx: usize = 0;
        let mut cap: usize = 0;
        for part in &self.parts {
            match part {
                SqlPart::Raw(s) => cap += s.len(),
                SqlPart::Ident(ident) => cap += ident.rendered_len_hint(),
                SqlPart::Param => {
                    idx += 1;
                    cap += self.flavor.placeholder_len(idx);
                }
            }
        }

        let mut out = String::with_capacity(cap);
        idx = 0;
        for part in &self.parts {
            match part {
                SqlPart::Raw(s) => out.push_str(s),
                SqlPart::Ident(ident) => ident.write_sql(self.flavor, &mut out),
                SqlPart::Param => {
                    idx += 1;
                    self.flavor.write_placeholder(&mut out, idx);
                }
            }
        }
        out
    }

    fn validate(&self) -> SqlResult<()> {
        let placeholder_count = self.placeholder_count();
        if placeholder_count != self.params.len() {
            let params_len = self.params.len();
            return Err(SqlError::Validation(format!(
                "placeholders({placeholder_count}) != params({params_len})"
            )));
        }
        Ok(())
    }

    /// Render and freeze into a [`Statement`].
    pub fn finish(self, kind: StatementKind, tag: &'static str) -> SqlResult<Statement> {
        self.validate()?;
        let sql = self.to_sql();
        Ok(Statement::new(sql, self.params, self.flavor, kind, tag))
    }
}
