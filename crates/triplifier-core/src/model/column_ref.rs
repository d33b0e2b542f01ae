use crate::{err, Error};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// A `table.column` reference.
///
/// Relations name their subject and object entities this way; the reference
/// resolves to the entity whose table and identifier column are equal to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

impl FromStr for ColumnRef {
    type Err = Error;

    /// Parses `table.column`. Anything after a second period is ignored, so
    /// `table.column.label` also parses.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.splitn(3, '.');

        match (parts.next(), parts.next()) {
            (Some(table), Some(column)) if !table.is_empty() && !column.is_empty() => {
                Ok(ColumnRef::new(table, column))
            }
            _ => Err(err!("expected `table.column`, got `{s}`")),
        }
    }
}

impl Serialize for ColumnRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColumnRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
