use crate::Value;

/// Serialized SQL plus the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Sql {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Sql {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

impl From<&str> for Sql {
    fn from(value: &str) -> Self {
        Sql::new(value, vec![])
    }
}
