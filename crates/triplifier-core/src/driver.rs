mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::{Operation, Sql, Transaction};

use crate::{model::ConnectionInfo, Result};

use std::{borrow::Cow, fmt::Debug};

/// A database driver: knows how to open connections to one database.
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL the driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    /// Describes the database for the mapping document's connection block.
    fn connection_info(&self) -> ConnectionInfo;

    /// Open a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A live connection to a relational database.
///
/// The three `list_*` methods are the schema inspection contract; everything
/// else goes through [`Connection::exec`].
pub trait Connection: Debug + Send {
    /// Names of all user tables.
    fn list_tables(&mut self) -> Result<Vec<String>>;

    /// Column names of `table`, in declaration order.
    fn list_columns(&mut self, table: &str) -> Result<Vec<String>>;

    /// Primary key column names of `table`.
    fn list_primary_key_columns(&mut self, table: &str) -> Result<Vec<String>>;

    /// Execute a database operation
    fn exec(&mut self, op: Operation) -> Result<Response>;
}

/// Run `f` inside a transaction on `connection`.
///
/// The transaction commits when `f` returns `Ok` and rolls back otherwise.
pub fn transaction<T>(
    connection: &mut dyn Connection,
    f: impl FnOnce(&mut dyn Connection) -> Result<T>,
) -> Result<T> {
    connection.exec(Transaction::Start.into())?;

    match f(connection) {
        Ok(ret) => {
            connection.exec(Transaction::Commit.into())?;
            Ok(ret)
        }
        Err(e) => {
            if let Err(rollback) = connection.exec(Transaction::Rollback.into()) {
                tracing::warn!(error = %rollback, "rollback failed");
            }
            Err(e)
        }
    }
}
