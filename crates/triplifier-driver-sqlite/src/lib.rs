mod value;
use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use triplifier_core::{
    driver::{
        operation::{Operation, Sql, Transaction},
        Driver, Response,
    },
    model::{ConnectionInfo, DbSystem},
    Error, Result,
};
use triplifier_sql::Serializer;
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),

    /// Every connection opens its own, empty database.
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connection_info(&self) -> ConnectionInfo {
        match self {
            Sqlite::File(path) => ConnectionInfo::sqlite(path),
            Sqlite::InMemory => ConnectionInfo::new(DbSystem::Sqlite, "", ":memory:"),
        }
    }

    fn connect(&self) -> Result<Box<dyn triplifier_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!(path = %path.as_ref().display(), "opening sqlite database");

        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        let sqlite = Self { connection };
        Ok(sqlite)
    }

    /// Runs a single-column text query, returning the first column of each row.
    fn query_names(&self, sql: &str, table: Option<&str>) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let rows = stmt
            .query_map(rusqlite::params_from_iter(table), |row| row.get(0))
            .map_err(Error::driver_operation_failed)?;

        rows.collect::<rusqlite::Result<Vec<String>>>()
            .map_err(Error::driver_operation_failed)
    }

    fn execute(&self, op: &Sql) -> Result<u64> {
        tracing::trace!(sql = %op.sql, params = op.params.len(), "execute");

        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver_operation_failed)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(op.params.iter().map(Value)))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    fn query(&self, op: &Sql) -> Result<Vec<Vec<triplifier_core::Value>>> {
        tracing::trace!(sql = %op.sql, params = op.params.len(), "query");

        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver_operation_failed)?;

        let width = stmt.column_count();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(op.params.iter().map(Value)))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        let value = row.get_ref(index).map_err(Error::driver_operation_failed)?;
                        items.push(Value::from_sql(value));
                    }

                    ret.push(items);
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(Error::driver_operation_failed(err));
                }
            }
        }

        Ok(ret)
    }
}

impl triplifier_core::driver::Connection for Connection {
    fn list_tables(&mut self) -> Result<Vec<String>> {
        self.query_names(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
            None,
        )
    }

    fn list_columns(&mut self, table: &str) -> Result<Vec<String>> {
        self.query_names(
            "SELECT name FROM pragma_table_info(?1) ORDER BY cid",
            Some(table),
        )
    }

    fn list_primary_key_columns(&mut self, table: &str) -> Result<Vec<String>> {
        self.query_names(
            "SELECT name FROM pragma_table_info(?1) WHERE pk > 0 ORDER BY pk",
            Some(table),
        )
    }

    fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Execute(op) => Ok(Response::count(self.execute(&op)?)),
            Operation::Query(op) => Ok(Response::values(self.query(&op)?)),
            Operation::Transaction(op) => {
                let sql = Serializer::sqlite().serialize_transaction(&op);
                self.connection
                    .execute(&sql, [])
                    .map_err(Error::driver_operation_failed)?;

                if op == Transaction::Rollback {
                    tracing::debug!("transaction rolled back");
                }

                Ok(Response::count(0))
            }
        }
    }
}
