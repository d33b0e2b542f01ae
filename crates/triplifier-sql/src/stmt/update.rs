use super::{Expr, Name, Statement};

#[derive(Debug, Clone)]
pub struct Update {
    pub table: Name,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Expr>,
}

/// `column = expr`
#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: Name,
    pub expr: Expr,
}

impl Update {
    pub fn new(table: impl Into<Name>) -> Self {
        Self {
            table: table.into(),
            assignments: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, column: impl Into<Name>, expr: impl Into<Expr>) -> Self {
        self.assignments.push(Assignment {
            column: column.into(),
            expr: expr.into(),
        });
        self
    }

    pub fn filter(mut self, filter: Expr) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
