use crate::ExecLog;

use std::sync::{Arc, Mutex};
use triplifier_core::{
    driver::{Connection, Operation, Response},
    Result,
};

/// A connection wrapper that logs every operation for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    /// Log of all operations executed through this connection
    ops_log: Arc<Mutex<Vec<Operation>>>,
}

impl LoggingConnection {
    pub fn new(inner: Box<dyn Connection>) -> Self {
        Self {
            inner,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to the operations log that outlives the connection
    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}

impl Connection for LoggingConnection {
    fn list_tables(&mut self) -> Result<Vec<String>> {
        self.inner.list_tables()
    }

    fn list_columns(&mut self, table: &str) -> Result<Vec<String>> {
        self.inner.list_columns(table)
    }

    fn list_primary_key_columns(&mut self, table: &str) -> Result<Vec<String>> {
        self.inner.list_primary_key_columns(table)
    }

    fn exec(&mut self, operation: Operation) -> Result<Response> {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(operation.clone());

        self.inner.exec(operation)
    }
}
