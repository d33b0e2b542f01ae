use super::{value::Record, Comma, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::RenameTable(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "ALTER TABLE " self.table " ADD COLUMN " self.column);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(&self.columns);
        fmt!(f, "CREATE TABLE " self.name " (" columns ")");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "DELETE FROM " self.from " WHERE " self.filter);
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        fmt!(f, "DROP TABLE " if_exists self.name);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(&self.columns);
        fmt!(f, "INSERT INTO " self.target " (" columns ") " self.source);
    }
}

impl ToSql for &stmt::InsertSource {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::InsertSource::Select(select) => select.to_sql(f),
            stmt::InsertSource::Values(rows) => {
                let rows = Comma(rows.iter().map(|row| Record(row)));
                fmt!(f, "VALUES " rows)
            }
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let distinct = if self.distinct { "DISTINCT " } else { "" };
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));

        fmt!(f, "SELECT " distinct);

        if self.returning.is_empty() {
            fmt!(f, "*");
        } else {
            fmt!(f, Comma(&self.returning));
        }

        fmt!(f, " FROM " self.from filter);

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit.to_string().as_str());
        }
    }
}

impl ToSql for &stmt::RenameTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "ALTER TABLE " self.from " RENAME TO " self.to);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let assignments = Comma(&self.assignments);
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));

        fmt!(f, "UPDATE " self.table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.column " = " self.expr);
    }
}
