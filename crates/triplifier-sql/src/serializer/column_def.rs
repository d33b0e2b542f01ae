use super::{Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let ty = self.ty.as_ref().map(|ty| (" ", ty));
        let pk = if self.surrogate_key {
            " PRIMARY KEY"
        } else {
            ""
        };

        fmt!(f, self.name ty pk)
    }
}
