use std::sync::{Arc, Mutex};
use triplifier_core::driver::{Operation, Transaction};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<Operation>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// The log rendered one line per operation: the SQL text of statements
    /// and queries, `BEGIN`/`COMMIT`/`ROLLBACK` for transaction control.
    pub fn lines(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| match op {
                Operation::Execute(sql) | Operation::Query(sql) => sql.sql.clone(),
                Operation::Transaction(Transaction::Start) => "BEGIN".to_string(),
                Operation::Transaction(Transaction::Commit) => "COMMIT".to_string(),
                Operation::Transaction(Transaction::Rollback) => "ROLLBACK".to_string(),
            })
            .collect()
    }

    /// Statements that changed data or schema, excluding queries
    pub fn statements(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                Operation::Execute(sql) => Some(sql.sql.clone()),
                _ => None,
            })
            .collect()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(op))
            .count()
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
