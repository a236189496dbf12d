//! Statement rendering.
//!
//! [`StatementBuilder`] keeps SQL text pieces and bound parameters side by
//! side and only numbers placeholders when the final text is rendered, so
//! fragments built independently can be glued together in any order without
//! tracking indices by hand. [`Statement`] is the finished, immutable result.
//!
//! # Example
//!
//! ```
//! use mapsql::{Flavor, Ident, StatementBuilder};
//!
//! let mut q = StatementBuilder::with_sql(Flavor::Postgres, "SELECT * FROM ");
//! q.push_ident(&Ident::parse("users")?).push(" WHERE id = ").push_bind(7);
//! assert_eq!(q.to_sql(), r#"SELECT * FROM "users" WHERE id = $1"#);
//! # Ok::<(), mapsql::SqlError>(())
//! ```

mod builder;
mod parts;
mod statement;


pub use builder::StatementBuilder;
pub use statement::{Statement, StatementKind};
