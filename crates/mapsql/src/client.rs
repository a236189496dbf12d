//! Running statements against a database.

use crate::error::{SqlError, SqlResult};
use crate::flavor::Flavor;
use crate::sql::Statement;

/// Something a [`Statement`] can be executed on.
///
/// Implemented for `tokio_postgres::Client` and `tokio_postgres::Transaction`,
/// so code can take either and compose into a transaction. Both require
/// statements built for [`Flavor::Postgres`].
pub trait Executor: Send + Sync {
    /// Row type returned by queries.
    type Row: Send;

    /// Run a statement and collect all returned rows.
    fn fetch_all(
        &self,
        stmt: &Statement,
    ) -> impl std::future::Future<Output = SqlResult<Vec<Self::Row>>> + Send;

    /// Run a statement and return the number of affected rows.
    fn execute(&self, stmt: &Statement) -> impl std::future::Future<Output = SqlResult<u64>> + Send;

    /// Run a statement and return the first row, if any.
    fn fetch_opt(
        &self,
        stmt: &Statement,
    ) -> impl std::future::Future<Output = SqlResult<Option<Self::Row>>> + Send {
        async move { Ok(self.fetch_all(stmt).await?.into_iter().next()) }
    }
}

fn require_postgres(stmt: &Statement) -> SqlResult<()> {
    match stmt.flavor() {
        Flavor::Postgres => Ok(()),
        found => Err(SqlError::FlavorMismatch {
            expected: Flavor::Postgres,
            found,
        }),
    }
}

impl Executor for tokio_postgres::Client {
    type Row = tokio_postgres::Row;

    async fn fetch_all(&self, stmt: &Statement) -> SqlResult<Vec<Self::Row>> {
        require_postgres(stmt)?;
        let params = stmt.params_ref();
        Ok(tokio_postgres::Client::query(self, stmt.sql(), &params).await?)
    }

    async fn execute(&self, stmt: &Statement) -> SqlResult<u64> {
        require_postgres(stmt)?;
        let params = stmt.params_ref();
        Ok(tokio_postgres::Client::execute(self, stmt.sql(), &params).await?)
    }
}

impl Executor for tokio_postgres::Transaction<'_> {
    type Row = tokio_postgres::Row;

    async fn fetch_all(&self, stmt: &Statement) -> SqlResult<Vec<Self::Row>> {
        require_postgres(stmt)?;
        let params = stmt.params_ref();
        Ok(tokio_postgres::Transaction::query(self, stmt.sql(), &params).await?)
    }

    async fn execute(&self, stmt: &Statement) -> SqlResult<u64> {
        require_postgres(stmt)?;
        let params = stmt.params_ref();
        Ok(tokio_postgres::Transaction::execute(self, stmt.sql(), &params).await?)
    }
}
