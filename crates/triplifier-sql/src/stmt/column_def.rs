use super::Name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Integer,
}

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: Name,

    /// Declared type. SQLite columns may be left untyped.
    pub ty: Option<Type>,

    /// An integer primary key, assigned automatically on insert.
    pub surrogate_key: bool,
}

impl ColumnDef {
    /// An untyped column.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            surrogate_key: false,
        }
    }

    /// An auto-assigned integer primary key.
    pub fn surrogate_key(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ty: Some(Type::Integer),
            surrogate_key: true,
        }
    }
}
