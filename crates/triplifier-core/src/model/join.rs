use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed foreign-key edge: `foreign_table.foreign_column` references
/// `primary_table.primary_column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Join {
    pub foreign_table: String,
    pub foreign_column: String,
    pub primary_table: String,
    pub primary_column: String,
}

impl Join {
    pub fn new(
        foreign_table: impl Into<String>,
        foreign_column: impl Into<String>,
        primary_table: impl Into<String>,
        primary_column: impl Into<String>,
    ) -> Self {
        Self {
            foreign_table: foreign_table.into(),
            foreign_column: foreign_column.into(),
            primary_table: primary_table.into(),
            primary_column: primary_column.into(),
        }
    }

    /// Returns `true` if the join's endpoints are `{a, b}`, in either
    /// orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.foreign_table == a && self.primary_table == b)
            || (self.primary_table == a && self.foreign_table == b)
    }

    /// The endpoint opposite to `table`, if the join touches `table`.
    pub fn other_end(&self, table: &str) -> Option<&str> {
        if self.foreign_table == table {
            Some(&self.primary_table)
        } else if self.primary_table == table {
            Some(&self.foreign_table)
        } else {
            None
        }
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} => {}.{}",
            self.foreign_table, self.foreign_column, self.primary_table, self.primary_column
        )
    }
}
