use super::{Expr, Name, Statement};

#[derive(Debug, Clone)]
pub struct Delete {
    pub from: Name,
    pub filter: Expr,
}

impl Statement {
    pub fn delete(from: impl Into<Name>, filter: Expr) -> Self {
        Delete {
            from: from.into(),
            filter,
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
