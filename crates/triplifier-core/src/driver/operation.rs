mod sql;
pub use sql::Sql;

mod transaction;
pub use transaction::Transaction;

/// An operation sent to a [`Connection`](super::Connection).
///
/// Statements arrive already serialized in the driver's SQL dialect, together
/// with the values bound to their placeholders.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a statement, returning the number of rows it changed.
    Execute(Sql),

    /// Run a query and return its rows.
    Query(Sql),

    /// Transaction control
    Transaction(Transaction),
}
