mod exec_log;
pub use exec_log::ExecLog;

mod logging_connection;
pub use logging_connection::LoggingConnection;

use triplifier::{Sheet, TableImporter};
use triplifier_core::{
    driver::{Operation, Sql},
    Connection, Value,
};
use triplifier_driver_sqlite::Connection as SqliteConnection;

/// Install a `tracing` subscriber honoring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh in-memory database.
pub fn sqlite() -> Box<dyn Connection> {
    init_tracing();
    Box::new(SqliteConnection::in_memory().unwrap())
}

/// A fresh in-memory database holding `sheet`, whose first table is named
/// `table`.
pub fn sqlite_with(table: &str, mut sheet: Sheet) -> Box<dyn Connection> {
    let mut connection = sqlite();
    TableImporter::new()
        .table_name(table)
        .import(&mut *connection, &mut sheet)
        .unwrap();
    connection
}

/// Run a raw query, returning every row.
pub fn rows(connection: &mut dyn Connection, sql: &str) -> Vec<Vec<Value>> {
    connection
        .exec(Operation::Query(Sql::from(sql)))
        .unwrap()
        .into_values()
        .unwrap()
}

/// Run a raw query, rendering every cell as text. `NULL` becomes `"NULL"`.
pub fn text_rows(connection: &mut dyn Connection, sql: &str) -> Vec<Vec<String>> {
    rows(connection, sql)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|value| match value {
                    Value::Null => "NULL".to_string(),
                    Value::Integer(v) => v.to_string(),
                    Value::Text(v) => v,
                })
                .collect()
        })
        .collect()
}
