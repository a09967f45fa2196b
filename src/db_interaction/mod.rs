mod user;
mod good;
mod order;

use std::{error::Error, fmt::Debug};

use thiserror::Error;

pub use user::*;
pub use good::*;
pub use order::*;

use crate::{telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error returned by every query function in this module
#[derive(Error)]
pub enum QueryError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("{table} row with id {id} doesn't exist")]
    RowNotFound{
        table: &'static str,
        id: i32
    }
}

impl Debug for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Moves the pooled connection onto the blocking pool and runs `query` there
pub(crate) async fn run_query<F, R>(
    mut conn: DbConnection,
    query: F
) -> Result<R, QueryError>
where
    F: FnOnce(&mut DbConnection) -> Result<R, QueryError> + Send + 'static,
    R: Send + 'static
{
    spawn_blocking_with_tracing(move || query(&mut conn)).await?
}

// Maps "0 rows affected" from an update / delete to RowNotFound
pub(crate) fn expect_affected(
    affected_rows: usize,
    table: &'static str,
    id: i32
) -> Result<(), QueryError> {
    if affected_rows == 0 {
        return Err(QueryError::RowNotFound{ table, id })
    }

    Ok(())
}
