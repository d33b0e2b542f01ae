//! Splits a flat Darwin Core style table into per-concept tables.
//!
//! Each concept whose member terms appear as columns, but whose identifier
//! column is missing or empty, gets identifiers: shared concepts are moved
//! into their own table of distinct instances and referenced by key, per-row
//! concepts are numbered by row. Each concept is fixed in its own
//! transaction. Afterwards the flat table is rebuilt without the moved
//! columns.

mod concept;
pub use concept::{Concept, ConceptKind};

mod report;
pub use report::Report;

use crate::exec::{execute, query};

use triplifier_core::{driver::transaction, schema::sanitize, Connection, Error, Result};
use triplifier_sql::{
    stmt::{ColumnDef, Expr, InsertSource, Name, Select, Update},
    Statement,
};

#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Identifier column of the flat table's own rows
    root_id: String,

    concepts: Vec<Concept>,

    /// Rename the rebuilt flat table
    root_table: Option<String>,
}

impl Normalizer {
    pub fn new(root_id: impl Into<String>, concepts: Vec<Concept>) -> Self {
        Self {
            root_id: root_id.into(),
            concepts,
            root_table: None,
        }
    }

    /// Event, location, geological context, identification and taxon
    /// concepts of an occurrence table.
    pub fn darwin_core() -> Self {
        Self::new("occurrenceID", concept::darwin_core())
    }

    pub fn root_table(mut self, name: impl Into<String>) -> Self {
        self.root_table = Some(name.into());
        self
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Normalize the database behind `connection`.
    ///
    /// A database that is not exactly one table is left alone. Running this
    /// on an already normalized database changes nothing.
    pub fn run(&self, connection: &mut dyn Connection) -> Result<Report> {
        let tables = connection.list_tables()?;

        let [table] = &tables[..] else {
            tracing::info!(
                tables = tables.len(),
                "not a single flat table; skipping normalization"
            );
            return Ok(Report::default());
        };

        let table = table.clone();

        let target = match &self.root_table {
            Some(name) => sanitize(name).into_owned(),
            None => table.clone(),
        };

        let collides = self
            .concepts
            .iter()
            .any(|concept| concept.kind == ConceptKind::Shared && concept.table_name() == target);

        if target != table && collides {
            return Err(Error::invalid_config(format!(
                "root table `{target}` collides with a concept table"
            )));
        }

        let mut columns = connection.list_columns(&table)?;
        let mut report = Report {
            root_table: Some(table.clone()),
            ..Report::default()
        };

        for concept in &self.concepts {
            let included = concept.included_terms(&columns);

            if included.is_empty() {
                continue;
            }

            let has_id = columns.contains(&concept.id_column);

            if has_id && is_populated(connection, &table, &concept.id_column)? {
                tracing::debug!(concept = %concept.id_column, "identifier already populated");
                continue;
            }

            if concept.kind == ConceptKind::Shared && concept.table_name() == table {
                tracing::warn!(
                    concept = %concept.id_column,
                    %table,
                    "concept table would replace the flat table; skipping concept"
                );
                continue;
            }

            tracing::info!(
                concept = %concept.id_column,
                terms = included.len(),
                "fixing missing identifier column"
            );

            let changed = transaction(connection, |conn| {
                if !has_id {
                    execute(
                        conn,
                        Statement::add_column(&table, ColumnDef::new(&concept.id_column)),
                    )?;
                }

                match concept.kind {
                    ConceptKind::Shared => split(conn, &table, concept, &included).map(|_| true),
                    ConceptKind::PerRow => {
                        number_rows(conn, &table, concept, &included).map(|rows| rows > 0)
                    }
                }
            })?;

            if !has_id {
                columns.push(concept.id_column.clone());
            } else if !changed {
                // No row has any of the terms to number
                continue;
            }

            report.fixed.push(concept.id_column.clone());

            if concept.kind == ConceptKind::Shared {
                report.tables.push(concept.table_name());
                report
                    .relocated
                    .extend(included.iter().map(|term| term.to_string()));
            }
        }

        let surrogate_key = !columns.contains(&self.root_id)
            || !is_populated(connection, &table, &self.root_id)?;

        if report.relocated.is_empty() && !surrogate_key && target == table {
            return Ok(report);
        }

        let keep: Vec<&String> = columns
            .iter()
            .filter(|column| !report.relocated.contains(column))
            .filter(|column| !(surrogate_key && **column == self.root_id))
            .collect();

        if keep.is_empty() {
            tracing::warn!(%table, "no columns left to keep; not rebuilding flat table");
            return Ok(report);
        }

        tracing::info!(
            %table,
            %target,
            dropped = report.relocated.len(),
            surrogate_key,
            "rebuilding flat table"
        );

        transaction(connection, |conn| {
            rebuild(conn, &table, &target, &keep, surrogate_key.then_some(&self.root_id))
        })?;

        report.surrogate_key = surrogate_key;
        report.renamed = target != table;
        report.root_table = Some(target);

        Ok(report)
    }
}

/// Returns `true` if at least one row has a non-blank `column`.
fn is_populated(connection: &mut dyn Connection, table: &str, column: &str) -> Result<bool> {
    let rows = query(
        connection,
        Select::new(table)
            .returning([Expr::column(column)])
            .filter(Expr::is_not_blank(Expr::column(column)))
            .limit(1),
    )?;

    Ok(!rows.is_empty())
}

/// Move the concept's columns into a new table of distinct instances and
/// point the flat table at them.
fn split(
    conn: &mut dyn Connection,
    table: &str,
    concept: &Concept,
    included: &[&str],
) -> Result<()> {
    let name = concept.table_name();

    let mut columns = vec![ColumnDef::surrogate_key("id")];
    columns.extend(included.iter().map(|term| ColumnDef::new(*term)));
    execute(conn, Statement::create_table(&name, columns))?;

    let distinct = Select::new(table)
        .distinct()
        .returning(included.iter().map(|term| Expr::column(*term)));

    let inserted = execute(
        conn,
        Statement::insert(
            &name,
            included.iter().map(|term| Name::from(*term)).collect(),
            InsertSource::from(distinct),
        ),
    )?;

    // Rows with none of the terms filled in are not an instance
    let blank = execute(
        conn,
        Statement::delete(
            &name,
            Expr::and(included.iter().map(|term| Expr::is_blank(Expr::column(*term)))),
        ),
    )?;

    tracing::debug!(table = %name, instances = inserted - blank, "created concept table");

    // `IS` so that rows with NULL terms still find their instance
    let lookup = Select::new(&name)
        .returning([Expr::qualified(&name, "id")])
        .filter(Expr::and(included.iter().map(|term| {
            Expr::is_not_distinct_from(Expr::qualified(&name, *term), Expr::qualified(table, *term))
        })));

    execute(conn, Update::new(table).set(&concept.id_column, lookup))?;

    Ok(())
}

/// Give every row with any of the concept's terms filled in its own
/// identifier, the row's `rowid`.
fn number_rows(
    conn: &mut dyn Connection,
    table: &str,
    concept: &Concept,
    included: &[&str],
) -> Result<u64> {
    let numbered = execute(
        conn,
        Update::new(table)
            .set(&concept.id_column, Expr::RowId)
            .filter(Expr::or(
                included
                    .iter()
                    .map(|term| Expr::is_not_blank(Expr::column(*term))),
            )),
    )?;

    tracing::debug!(concept = %concept.id_column, rows = numbered, "numbered rows");
    Ok(numbered)
}

/// Recreate `table` as `target` with only the `keep` columns, optionally
/// prefixed by an integer primary key named `key`.
fn rebuild(
    conn: &mut dyn Connection,
    table: &str,
    target: &str,
    keep: &[&String],
    key: Option<&String>,
) -> Result<()> {
    let tmp = format!("{table}_tmp");

    let mut columns: Vec<_> = key.into_iter().map(ColumnDef::surrogate_key).collect();
    columns.extend(keep.iter().map(|column| ColumnDef::new(*column)));

    execute(conn, Statement::drop_table_if_exists(&tmp))?;
    execute(conn, Statement::create_table(&tmp, columns))?;

    let copy = Select::new(table).returning(keep.iter().map(|column| Expr::column(*column)));
    execute(
        conn,
        Statement::insert(
            &tmp,
            keep.iter().map(|column| Name::from(*column)).collect(),
            InsertSource::from(copy),
        ),
    )?;

    execute(conn, Statement::drop_table(table))?;
    execute(conn, Statement::rename_table(&tmp, target))?;

    Ok(())
}
