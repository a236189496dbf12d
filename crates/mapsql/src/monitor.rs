//! `tracing` events for built and rejected statements.
//!
//! Built statements are logged on target `mapsql.sql` at the configured level
//! with their tag, kind, flavor, parameter count and (truncated) SQL.
//! Parameter values are never logged.

use crate::config::BuilderConfig;
use crate::error::SqlError;
use crate::sql::Statement;
use tracing::Level;

/// Dispatch a tracing event at a runtime-determined level.
macro_rules! emit_at_level {
    ($level:expr, $($field:tt)*) => {
        match $level {
            Level::ERROR => tracing::error!($($field)*),
            Level::WARN  => tracing::warn!($($field)*),
            Level::INFO  => tracing::info!($($field)*),
            Level::DEBUG => tracing::debug!($($field)*),
            Level::TRACE => tracing::trace!($($field)*),
        }
    };
}

/// Truncate to at most `max` bytes without splitting a character.
pub(crate) fn truncate_sql_bytes(sql: &str, max: usize) -> &str {
    if sql.len() <= max {
        return sql;
    }
    let mut end = max;
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn display_sql(config: &BuilderConfig, sql: &str) -> String {
    match config.max_logged_sql {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

pub(crate) fn statement_built(config: &BuilderConfig, stmt: &Statement) {
    let Some(level) = config.log_level else {
        return;
    };
    let sql = display_sql(config, stmt.sql());
    emit_at_level!(
        level,
        target: "mapsql.sql",
        tag = stmt.tag(),
        kind = ?stmt.kind(),
        flavor = %stmt.flavor(),
        param_count = stmt.params().len(),
        sql = %sql,
    );
}

pub(crate) fn statement_rejected(assembler: &'static str, err: &SqlError) {
    tracing::warn!(target: "mapsql", assembler, error = %err, "statement rejected");
}
