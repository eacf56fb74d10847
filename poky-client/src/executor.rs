/// Scoped call execution.
///
/// Every statement runs against a connection checked out for exactly the
/// duration of the call: the pooled connection is returned on drop on every
/// exit path. `Client::query` materializes the full row set before it
/// returns, so no result ever outlives its connection.
use crate::error::{Error, Result};
use crate::pool::PoolHandle;
use poky_core::sql::Call;
use postgres::error::DbError;
use postgres::types::FromSql;
use postgres::Row;
use tracing::error;

/// Run one parameterized call and return the materialized rows.
///
/// Backend statement errors are logged cause-by-cause and surfaced as
/// `Error::Backend`; the connection itself stays healthy and is returned to
/// the pool. Pool-level acquire failures propagate untouched.
pub fn run(handle: &PoolHandle, call: &Call) -> Result<Vec<Row>> {
    let mut conn = handle.acquire()?;
    match conn.query(call.sql.as_str(), &call.borrowed_params()) {
        Ok(rows) => Ok(rows),
        Err(err) => {
            log_backend_error(&err);
            Err(Error::Backend(err.to_string()))
        }
    }
}

/// Walk the full chain of causes, logging each one as
/// `{class, code, message}`. Database errors carry their severity class and
/// SQLSTATE code; other causes log their display form.
fn log_backend_error(err: &postgres::Error) {
    let mut cause: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = cause {
        match e.downcast_ref::<DbError>() {
            Some(db) => error!(
                class = db.severity(),
                code = db.code().code(),
                message = db.message(),
                "backend call failed"
            ),
            None => error!(message = %e, "backend call failed"),
        }
        cause = e.source();
    }
}

/// Decode one column of a row, mapping decode failures to `Backend` errors.
pub(crate) fn decode<'a, T>(row: &'a Row, column: &str) -> Result<T>
where
    T: FromSql<'a>,
{
    row.try_get(column)
        .map_err(|e| Error::Backend(format!("failed to decode column {:?}: {}", column, e)))
}

/// Decode the `result` column of a single-row reply, `None` when the reply
/// carried no rows.
pub(crate) fn scalar<T>(rows: &[Row], column: &str) -> Result<Option<T>>
where
    T: for<'a> FromSql<'a>,
{
    rows.first().map(|row| decode(row, column)).transpose()
}
