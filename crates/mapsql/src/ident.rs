//! Safe SQL identifier handling.
//!
//! [`Ident`] represents a table or column name, optionally dotted
//! (`schema.table`). Every segment is always rendered quoted for the target
//! [`Flavor`], with the quote character doubled inside the name, so any
//! non-empty name is safe to interpolate.
//!
//! # Example
//! ```
//! use mapsql::{Flavor, Ident};
//!
//! let t = Ident::parse("shop.orders")?;
//! assert_eq!(t.to_sql(Flavor::MySql), "`shop`.`orders`");
//! assert_eq!(t.to_sql(Flavor::Postgres), "\"shop\".\"orders\"");
//! # Ok::<(), mapsql::SqlError>(())
//! ```

use crate::error::{SqlError, SqlResult};
use crate::flavor::Flavor;

/// A SQL identifier (column, table, or schema name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    parts: Vec<String>,
}

impl Ident {
    /// Parse an identifier, splitting it on `.`.
    ///
    /// Rejects empty names, empty segments (`a..b`, `a.`, `.a`) and NUL.
    pub fn parse(s: &str) -> SqlResult<Self> {
        if s.is_empty() {
            return Err(SqlError::Identifier("identifier cannot be empty".into()));
        }
        if s.trim().is_empty() {
            return Err(SqlError::Identifier("identifier cannot be blank".into()));
        }
        if s.contains('\0') {
            return Err(SqlError::Identifier(
                "identifier cannot contain NUL character".into(),
            ));
        }

        let mut parts = Vec::new();
        for segment in s.split('.') {
            if segment.is_empty() {
                return Err(SqlError::Identifier(format!(
                    "empty segment in identifier '{s}'"
                )));
            }
            parts.push(segment.to_string());
        }
        Ok(Self { parts })
    }

    /// Identifier segments, unquoted.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Render the identifier as SQL for `flavor`.
    pub fn to_sql(&self, flavor: Flavor) -> String {
        let mut out = String::with_capacity(self.rendered_len_hint());
        self.write_sql(flavor, &mut out);
        out
    }

    /// Rendered length, ignoring doubled quote characters.
    pub(crate) fn rendered_len_hint(&self) -> usize {
        self.parts.iter().map(|p| p.len() + 3).sum()
    }

    pub(crate) fn write_sql(&self, flavor: Flavor, out: &mut String) {
        let quote = flavor.quote_char();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push(quote);
            for ch in part.chars() {
                if ch == quote {
                    out.push(quote);
                }
                out.push(ch);
            }
            out.push(quote);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_simple() {
        let ident = Ident::parse("users").unwrap();
        assert_eq!(ident.to_sql(Flavor::MySql), "`users`");
        assert_eq!(ident.to_sql(Flavor::Postgres), r#""users""#);
    }

    #[test]
    fn ident_dotted() {
        let ident = Ident::parse("public.users").unwrap();
        assert_eq!(ident.parts(), ["public", "users"]);
        assert_eq!(ident.to_sql(Flavor::Postgres), r#""public"."users""#);
    }

    #[test]
    fn ident_escapes_quote_char() {
        let ident = Ident::parse("we`ird").unwrap();
        assert_eq!(ident.to_sql(Flavor::MySql), "`we``ird`");

        let ident = Ident::parse(r#"has"quote"#).unwrap();
        assert_eq!(ident.to_sql(Flavor::Postgres), r#""has""quote""#);
        // The other flavor's quote char is harmless inside the name.
        assert_eq!(ident.to_sql(Flavor::MySql), r#"`has"quote`"#);
    }

    #[test]
    fn injection_attempt_stays_inside_quotes() {
        let ident = Ident::parse("name` = 1; DROP TABLE users; --").unwrap();
        assert_eq!(
            ident.to_sql(Flavor::MySql),
            "`name`` = 1; DROP TABLE users; --`"
        );
    }

    #[test]
    fn ident_with_spaces_is_quoted() {
        let ident = Ident::parse("first name").unwrap();
        assert_eq!(ident.to_sql(Flavor::MySql), "`first name`");
    }

    #[test]
    fn ident_rejects_empty() {
        assert!(Ident::parse("").is_err());
        assert!(Ident::parse("   ").is_err());
    }

    #[test]
    fn ident_rejects_empty_segments() {
        assert!(Ident::parse("schema..table").is_err());
        assert!(Ident::parse("schema.").is_err());
        assert!(Ident::parse(".table").is_err());
    }

    #[test]
    fn ident_rejects_nul() {
        assert!(Ident::parse("us\0ers").is_err());
    }
}
