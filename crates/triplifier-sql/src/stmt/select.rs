use super::{Expr, Name, Statement};

/// `SELECT [DISTINCT] <columns> FROM <table> [WHERE <filter>] [LIMIT <n>]`
#[derive(Debug, Clone)]
pub struct Select {
    pub distinct: bool,

    /// Projected expressions. Empty means `*`.
    pub returning: Vec<Expr>,

    pub from: Name,

    pub filter: Option<Expr>,

    pub limit: Option<u64>,
}

impl Select {
    pub fn new(from: impl Into<Name>) -> Self {
        Self {
            distinct: false,
            returning: vec![],
            from: from.into(),
            filter: None,
            limit: None,
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn returning(mut self, returning: impl IntoIterator<Item = Expr>) -> Self {
        self.returning = returning.into_iter().collect();
        self
    }

    pub fn filter(mut self, filter: Expr) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Query(value)
    }
}
