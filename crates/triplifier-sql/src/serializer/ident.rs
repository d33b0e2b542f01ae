use super::{Formatter, Params, ToSql};

use crate::stmt::Name;

/// A double-quoted identifier. Embedded quotes are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = self.0.as_ref();

        f.dst.push('"');
        for ch in name.chars() {
            if ch == '"' {
                f.dst.push('"');
            }
            f.dst.push(ch);
        }
        f.dst.push('"');
    }
}

impl ToSql for &Name {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        Ident(self.as_str()).to_sql(f);
    }
}
