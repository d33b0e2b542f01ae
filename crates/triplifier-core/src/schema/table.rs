use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A database table, as seen by schema inspection.
///
/// Tables are snapshots: they are built once from the live catalog and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns, in catalog order
    pub columns: IndexSet<String>,

    /// Columns composing the primary key
    pub primary_key: IndexSet<String>,
}

impl Table {
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
        primary_key: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            primary_key: primary_key.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    pub fn is_primary_key(&self, column: &str) -> bool {
        self.primary_key.contains(column)
    }
}
