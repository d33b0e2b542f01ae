use super::{Name, Select, Value};

#[derive(Debug, Clone)]
pub enum Expr {
    /// All expressions must be true
    And(Vec<Expr>),

    BinaryOp {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },

    Column(ExprColumn),

    /// `COALESCE(expr, '') = ''`, or `<> ''` when negated
    IsBlank { expr: Box<Expr>, negate: bool },

    /// Any expression may be true
    Or(Vec<Expr>),

    /// The row's internal, unique row number
    RowId,

    /// A scalar subquery
    Subquery(Box<Select>),

    /// Bound as a statement parameter
    Value(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,

    /// Equality that treats two `NULL`s as equal
    IsNotDistinctFrom,
}

/// A column, optionally qualified by its table.
#[derive(Debug, Clone)]
pub struct ExprColumn {
    pub table: Option<Name>,
    pub column: Name,
}

impl Expr {
    pub fn column(column: impl Into<Name>) -> Self {
        Expr::Column(ExprColumn {
            table: None,
            column: column.into(),
        })
    }

    pub fn qualified(table: impl Into<Name>, column: impl Into<Name>) -> Self {
        Expr::Column(ExprColumn {
            table: Some(table.into()),
            column: column.into(),
        })
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Expr::Value(value.into())
    }

    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Self {
        Expr::BinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn is_not_distinct_from(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary_op(lhs, BinaryOp::IsNotDistinctFrom, rhs)
    }

    pub fn is_blank(expr: impl Into<Expr>) -> Self {
        Expr::IsBlank {
            expr: Box::new(expr.into()),
            negate: false,
        }
    }

    pub fn is_not_blank(expr: impl Into<Expr>) -> Self {
        Expr::IsBlank {
            expr: Box::new(expr.into()),
            negate: true,
        }
    }

    /// Combine with `AND`. A single operand is returned unwrapped.
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Self {
        let mut operands: Vec<_> = operands.into_iter().collect();
        match operands.len() {
            1 => operands.remove(0),
            _ => Expr::And(operands),
        }
    }

    /// Combine with `OR`. A single operand is returned unwrapped.
    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Self {
        let mut operands: Vec<_> = operands.into_iter().collect();
        match operands.len() {
            1 => operands.remove(0),
            _ => Expr::Or(operands),
        }
    }
}

impl From<Select> for Expr {
    fn from(value: Select) -> Self {
        Expr::Subquery(Box::new(value))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}
