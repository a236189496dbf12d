//! Error types for mapsql

use crate::flavor::Flavor;
use crate::ident::Ident;
use thiserror::Error;

/// Result type alias for mapsql operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement building and execution
#[derive(Debug, Error)]
pub enum SqlError {
    /// The caller broke an assembler's input contract (empty required
    /// collection, mismatched batch columns, empty IN list, bad identifier...).
    #[error("{assembler}: invalid `{argument}`: {reason}")]
    Contract {
        assembler: &'static str,
        argument: &'static str,
        reason: String,
    },

    /// Invalid identifier
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// Statement shape not expressible in the selected flavor
    #[error("{assembler}: {feature} is not supported by the {flavor} flavor")]
    Unsupported {
        assembler: &'static str,
        feature: &'static str,
        flavor: Flavor,
    },

    /// Statement rendered for one flavor handed to a connection of another
    #[error("Flavor mismatch: statement was built for {found}, connection expects {expected}")]
    FlavorMismatch { expected: Flavor, found: Flavor },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Query execution error, passed through from the driver unchanged
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),
}

impl SqlError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a caller-contract error
    pub fn is_contract(&self) -> bool {
        matches!(self, Self::Contract { .. })
    }

    /// Check if this error came from the database driver
    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// The assembler that rejected the call, if any.
    pub fn assembler(&self) -> Option<&'static str> {
        match self {
            Self::Contract { assembler, .. } | Self::Unsupported { assembler, .. } => {
                Some(assembler)
            }
            _ => None,
        }
    }

    /// The offending argument of a contract error.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Self::Contract { argument, .. } => Some(argument),
            _ => None,
        }
    }
}

/// Names the assembler a check runs on behalf of, so failures can say who
/// rejected which argument.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Caller {
    pub assembler: &'static str,
}

impl Caller {
    pub(crate) const fn new(assembler: &'static str) -> Self {
        Self { assembler }
    }

    pub(crate) fn contract(self, argument: &'static str, reason: impl Into<String>) -> SqlError {
        SqlError::Contract {
            assembler: self.assembler,
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(self, feature: &'static str, flavor: Flavor) -> SqlError {
        SqlError::Unsupported {
            assembler: self.assembler,
            feature,
            flavor,
        }
    }

    /// Parse an identifier, reporting failures against `argument`.
    pub(crate) fn ident(self, argument: &'static str, name: &str) -> SqlResult<Ident> {
        Ident::parse(name).map_err(|err| match err {
            SqlError::Identifier(reason) => self.contract(argument, reason),
            other => other,
        })
    }

    /// Fail unless `len > 0`.
    pub(crate) fn require_non_empty(self, argument: &'static str, len: usize) -> SqlResult<()> {
        if len == 0 {
            return Err(self.contract(argument, "must not be empty"));
        }
        Ok(())
    }
}
