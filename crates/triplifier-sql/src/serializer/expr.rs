use super::{Delimited, Params, ToSql};

use crate::stmt::{self, Expr};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Expr::And(operands) => {
                fmt!(f, "(" Delimited(operands, " AND ") ")")
            }
            Expr::BinaryOp { lhs, op, rhs } => {
                fmt!(f, lhs " " op " " rhs)
            }
            Expr::Column(column) => column.to_sql(f),
            Expr::IsBlank { expr, negate } => {
                let op = if *negate { " <> ''" } else { " = ''" };
                fmt!(f, "COALESCE(" expr ", '')" op)
            }
            Expr::Or(operands) => {
                fmt!(f, "(" Delimited(operands, " OR ") ")")
            }
            Expr::RowId => fmt!(f, "rowid"),
            Expr::Subquery(query) => {
                fmt!(f, "(" query ")")
            }
            Expr::Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(
            f,
            match self {
                stmt::BinaryOp::Eq => "=",
                stmt::BinaryOp::IsNotDistinctFrom => "IS",
            }
        )
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = self.table.as_ref().map(|table| (table, "."));
        fmt!(f, table self.column)
    }
}
