use super::Table;
use crate::{driver::Connection, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of a database's tables, columns and primary keys.
///
/// Tables are kept sorted by name so that two snapshots of the same database
/// compare equal regardless of the order the driver listed them in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tables: IndexMap<String, Table>,
}

impl Catalog {
    /// Snapshot the live database behind `connection`.
    pub fn inspect(connection: &mut dyn Connection) -> Result<Self> {
        let mut catalog = Catalog::default();

        for name in connection.list_tables()? {
            let columns = connection.list_columns(&name)?;
            let primary_key = connection.list_primary_key_columns(&name)?;
            catalog.insert(Table::new(name, columns, primary_key));
        }

        tracing::debug!(tables = catalog.len(), "inspected schema catalog");
        Ok(catalog)
    }

    pub fn from_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        let mut catalog = Catalog::default();
        for table in tables {
            catalog.insert(table);
        }
        catalog
    }

    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
        self.tables.sort_keys();
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.values()
    }

    /// Returns `true` if `table` exists and has a column named `column`.
    pub fn has_column(&self, table: &str, column: &str) -> bool {
        self.table(table).is_some_and(|t| t.has_column(column))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
