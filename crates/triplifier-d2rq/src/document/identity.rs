use triplifier_core::model::Entity;

use serde::Serialize;

/// How a row's resource URI is formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    /// The column already holds an absolute URI
    UriColumn(String),

    /// `prefix` followed by the column value
    UriPattern { prefix: String, column: String },
}

impl Identity {
    /// The identity rule of `entity`'s own resources.
    pub fn of(entity: &Entity) -> Self {
        match &entity.id_prefix {
            Some(prefix) => Identity::UriPattern {
                prefix: prefix.clone(),
                column: entity.column(),
            },
            None => Identity::UriColumn(entity.column()),
        }
    }

    /// The `table.column` the identity reads.
    pub fn column(&self) -> &str {
        match self {
            Identity::UriColumn(column) => column,
            Identity::UriPattern { column, .. } => column,
        }
    }

    /// The `d2rq:uriPattern` template, `prefix@@table.column@@`.
    pub fn pattern(&self) -> Option<String> {
        match self {
            Identity::UriColumn(_) => None,
            Identity::UriPattern { prefix, column } => Some(format!("{prefix}@@{column}@@")),
        }
    }
}
