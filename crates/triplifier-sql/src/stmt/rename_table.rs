use super::{Name, Statement};

#[derive(Debug, Clone)]
pub struct RenameTable {
    pub from: Name,
    pub to: Name,
}

impl Statement {
    pub fn rename_table(from: impl Into<Name>, to: impl Into<Name>) -> Self {
        RenameTable {
            from: from.into(),
            to: to.into(),
        }
        .into()
    }
}

impl From<RenameTable> for Statement {
    fn from(value: RenameTable) -> Self {
        Self::RenameTable(value)
    }
}
