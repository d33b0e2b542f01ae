use triplifier_core::{
    driver::{operation::Sql, Operation},
    Connection, Result, Value,
};
use triplifier_sql::{stmt::Select, Serializer, Statement};

fn serialize(stmt: &Statement) -> Sql {
    let mut params = vec![];
    let sql = Serializer::sqlite().serialize(stmt, &mut params);
    tracing::debug!(%sql, params = params.len(), "sql");
    Sql::new(sql, params)
}

/// Execute a statement, returning the number of rows it changed.
pub(crate) fn execute(connection: &mut dyn Connection, stmt: impl Into<Statement>) -> Result<u64> {
    let sql = serialize(&stmt.into());
    connection.exec(Operation::Execute(sql))?.into_count()
}

pub(crate) fn query(connection: &mut dyn Connection, select: Select) -> Result<Vec<Vec<Value>>> {
    let sql = serialize(&select.into());
    connection.exec(Operation::Query(sql))?.into_values()
}
