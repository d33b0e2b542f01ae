use super::{Name, Select, Statement, Value};

#[derive(Debug, Clone)]
pub struct Insert {
    pub target: Name,

    /// Target columns, in source order
    pub columns: Vec<Name>,

    pub source: InsertSource,
}

#[derive(Debug, Clone)]
pub enum InsertSource {
    Select(Box<Select>),
    Values(Vec<Vec<Value>>),
}

impl Statement {
    pub fn insert(target: impl Into<Name>, columns: Vec<Name>, source: InsertSource) -> Self {
        Insert {
            target: target.into(),
            columns,
            source,
        }
        .into()
    }
}

impl From<Select> for InsertSource {
    fn from(value: Select) -> Self {
        Self::Select(Box::new(value))
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
