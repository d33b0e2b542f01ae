use rusqlite::types::{ToSql, ToSqlOutput, ValueRef};
use triplifier_core::Value as CoreValue;

/// Binds a core value as a SQLite parameter.
#[derive(Debug)]
pub struct Value<'a>(pub &'a CoreValue);

impl Value<'_> {
    /// Converts a SQLite value within a row to a core value.
    ///
    /// Reals and blobs are read back as text.
    pub fn from_sql(value: ValueRef<'_>) -> CoreValue {
        match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::Integer(value),
            ValueRef::Real(value) => CoreValue::Text(value.to_string()),
            ValueRef::Text(value) | ValueRef::Blob(value) => {
                CoreValue::Text(String::from_utf8_lossy(value).into_owned())
            }
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Borrowed(ValueRef::Null)),
            CoreValue::Integer(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Integer(*v))),
            CoreValue::Text(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
        }
    }
}
