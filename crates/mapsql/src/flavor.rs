//! SQL flavors.
//!
//! A [`Flavor`] decides how identifiers are quoted and how placeholders are
//! written. Statement text is otherwise identical across flavors.

use crate::error::SqlError;
use std::fmt;
use std::str::FromStr;

/// Target SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    /// MySQL / MariaDB: `` `ident` `` and `?` placeholders.
    #[default]
    MySql,
    /// PostgreSQL: `"ident"` and `$1, $2, ...` placeholders.
    Postgres,
}

impl Flavor {
    /// Identifier quote character.
    pub const fn quote_char(self) -> char {
        match self {
            Flavor::MySql => '`',
            Flavor::Postgres => '"',
        }
    }

    /// Whether `INSERT ... ON DUPLICATE KEY UPDATE` is available.
    pub const fn supports_on_duplicate_key(self) -> bool {
        matches!(self, Flavor::MySql)
    }

    /// Write the placeholder for the 1-based parameter `index`.
    pub(crate) fn write_placeholder(self, out: &mut String, index: usize) {
        match self {
            Flavor::MySql => out.push('?'),
            Flavor::Postgres => {
                out.push('$');
                push_usize(out, index);
            }
        }
    }

    /// Bytes a placeholder for `index` occupies.
    pub(crate) fn placeholder_len(self, index: usize) -> usize {
        match self {
            Flavor::MySql => 1,
            Flavor::Postgres => 1 + decimal_digits(index),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Flavor::MySql => "mysql",
            Flavor::Postgres => "postgres",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Flavor::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Flavor::Postgres),
            other => Err(SqlError::validation(format!("unknown SQL flavor '{other}'"))),
        }
    }
}

#[inline]
fn decimal_digits(n: usize) -> usize {
    if n < 10 {
        1
    } else if n < 100 {
        2
    } else if n < 1000 {
        3
    } else {
        (n.ilog10() as usize) + 1
    }
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push((b'0' + n as u8) as char);
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &b in &buf[pos..] {
        out.push(b as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        let mut out = String::new();
        Flavor::MySql.write_placeholder(&mut out, 12);
        out.push(' ');
        Flavor::Postgres.write_placeholder(&mut out, 1);
        out.push(' ');
        Flavor::Postgres.write_placeholder(&mut out, 120);
        assert_eq!(out, "? $1 $120");
    }

    #[test]
    fn placeholder_len_matches_rendering() {
        for idx in [1, 9, 10, 99, 100, 12345] {
            let mut out = String::new();
            Flavor::Postgres.write_placeholder(&mut out, idx);
            assert_eq!(out.len(), Flavor::Postgres.placeholder_len(idx));
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("MySQL".parse::<Flavor>().unwrap(), Flavor::MySql);
        assert_eq!("mariadb".parse::<Flavor>().unwrap(), Flavor::MySql);
        assert_eq!(" PostgreSQL ".parse::<Flavor>().unwrap(), Flavor::Postgres);
        assert_eq!("pg".parse::<Flavor>().unwrap(), Flavor::Postgres);
        assert!("oracle".parse::<Flavor>().is_err());
    }

    #[test]
    fn default_is_mysql() {
        assert_eq!(Flavor::default(), Flavor::MySql);
        assert!(Flavor::MySql.supports_on_duplicate_key());
        assert!(!Flavor::Postgres.supports_on_duplicate_key());
    }
}
