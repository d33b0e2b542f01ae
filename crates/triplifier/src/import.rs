//! Loading tabular files into the database.

mod sheet;
pub use sheet::Sheet;

mod source;
pub use source::TabularSource;

use crate::exec::execute;

use indexmap::IndexSet;
use triplifier_core::{driver, schema::sanitize, Connection, Result, Value};
use triplifier_sql::{
    stmt::{ColumnDef, InsertSource, Name},
    Statement,
};

/// SQLite's default bound-parameter limit on older builds
const MAX_PARAMS: usize = 999;

/// Copies every table of a [`TabularSource`] into the database.
///
/// Each table replaces any table of the same name. All columns are untyped and
/// every cell is stored as text.
#[derive(Debug, Clone, Default)]
pub struct TableImporter {
    /// Name given to the first table instead of the source's own
    table_name: Option<String>,
}

impl TableImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the first imported table `name`.
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Import every table of `source`, returning the created table names in
    /// source order.
    pub fn import(
        &self,
        connection: &mut dyn Connection,
        source: &mut dyn TabularSource,
    ) -> Result<Vec<String>> {
        let mut imported: Vec<String> = vec![];

        while source.next_table()? {
            let name = match (&self.table_name, imported.is_empty()) {
                (Some(name), true) => name.clone(),
                _ if !source.table_name().is_empty() => source.table_name().to_string(),
                _ => format!("table{}", imported.len() + 1),
            };
            let name = sanitize(&name).into_owned();

            if source.header().is_empty() {
                tracing::warn!(table = %name, "table has no header; skipping");
                continue;
            }

            let rows = driver::transaction(connection, |conn| import_table(conn, &name, source))?;

            tracing::info!(table = %name, rows, "imported table");
            imported.push(name);
        }

        Ok(imported)
    }
}

fn import_table(
    connection: &mut dyn Connection,
    table: &str,
    source: &mut dyn TabularSource,
) -> Result<u64> {
    let columns = column_names(source.header());

    execute(connection, Statement::drop_table_if_exists(table))?;
    execute(
        connection,
        Statement::create_table(table, columns.iter().map(ColumnDef::new).collect()),
    )?;

    let batch_size = (MAX_PARAMS / columns.len()).max(1);
    let mut batch: Vec<Vec<Value>> = Vec::with_capacity(batch_size);
    let mut count = 0;

    while let Some(mut row) = source.next_row()? {
        if row.len() > columns.len() {
            tracing::warn!(
                table,
                cells = row.len(),
                columns = columns.len(),
                "row is wider than the header; dropping extra cells"
            );
        }
        row.resize(columns.len(), String::new());
        batch.push(row.into_iter().map(Value::Text).collect());

        if batch.len() == batch_size {
            count += insert(connection, table, &columns, std::mem::take(&mut batch))?;
        }
    }

    if !batch.is_empty() {
        count += insert(connection, table, &columns, batch)?;
    }

    Ok(count)
}

fn insert(
    connection: &mut dyn Connection,
    table: &str,
    columns: &[String],
    rows: Vec<Vec<Value>>,
) -> Result<u64> {
    let columns = columns.iter().map(Name::from).collect();
    execute(
        connection,
        Statement::insert(table, columns, InsertSource::Values(rows)),
    )
}

/// Sanitized, distinct column names for `header`. Blank headers are named by
/// position; repeated names get a numeric suffix.
fn column_names(header: &[String]) -> Vec<String> {
    let mut names = IndexSet::with_capacity(header.len());

    for (i, column) in header.iter().enumerate() {
        let base = match column.trim() {
            "" => format!("column{}", i + 1),
            column => sanitize(column).into_owned(),
        };

        let mut name = base.clone();
        let mut n = 2;
        while names.contains(&name) {
            name = format!("{base}_{n}");
            n += 1;
        }
        names.insert(name);
    }

    names.into_iter().collect()
}
