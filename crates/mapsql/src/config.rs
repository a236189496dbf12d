//! Builder configuration.

use crate::flavor::Flavor;
use crate::value::Literal;
use tracing::Level;

/// How a `""` value is treated by the assemblers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStringPolicy {
    /// `""` means NULL: `SET c = NULL`, `VALUES (NULL)`, NULL comparisons.
    #[default]
    AsNull,
    /// `""` is an ordinary string and is bound like any other value.
    Keep,
}

/// How a NULL-valued condition is rendered in a WHERE clause.
///
/// The plain equality shape is `column = <bound-or-null>`, which for NULL
/// gives `column = NULL`: a comparison that is never true. The default
/// deliberately departs from that shape and renders `IS NULL`; choose
/// [`NullPredicate::Equals`] to get the literal `= NULL` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPredicate {
    /// `` `c` IS NULL ``
    #[default]
    IsNull,
    /// `` `c` = NULL `` (never true in SQL; kept for callers relying on it)
    Equals,
}

/// Configuration for [`QueryBuilder`](crate::QueryBuilder).
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Target SQL flavor.
    pub flavor: Flavor,
    /// Treatment of empty strings.
    pub empty_string: EmptyStringPolicy,
    /// Rendering of NULL conditions.
    pub null_predicate: NullPredicate,
    /// Level of the event emitted for each built statement (`None` = silent).
    pub log_level: Option<Level>,
    /// Truncate logged SQL (in bytes, on a char boundary). `None` = no truncation.
    pub max_logged_sql: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::MySql,
            empty_string: EmptyStringPolicy::AsNull,
            null_predicate: NullPredicate::IsNull,
            log_level: Some(Level::DEBUG),
            max_logged_sql: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a default configuration targeting `flavor`.
    pub fn for_flavor(flavor: Flavor) -> Self {
        Self::default().flavor(flavor)
    }

    /// Set the SQL flavor.
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Set the empty-string policy.
    pub fn empty_string(mut self, policy: EmptyStringPolicy) -> Self {
        self.empty_string = policy;
        self
    }

    /// Bind `""` as an ordinary string instead of NULL.
    pub fn keep_empty_strings(self) -> Self {
        self.empty_string(EmptyStringPolicy::Keep)
    }

    /// Set how NULL conditions render.
    pub fn null_predicate(mut self, predicate: NullPredicate) -> Self {
        self.null_predicate = predicate;
        self
    }

    /// Set the statement log level.
    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Do not log built statements.
    pub fn no_logging(mut self) -> Self {
        self.log_level = None;
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_logged_sql(mut self, len: usize) -> Self {
        self.max_logged_sql = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql = None;
        self
    }

    /// Whether `value` must be written as NULL rather than bound.
    pub(crate) fn renders_null(&self, value: &Literal) -> bool {
        value.is_null()
            || (self.empty_string == EmptyStringPolicy::AsNull && value.is_empty_text())
    }
}
