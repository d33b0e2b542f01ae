use super::{Comma, Params, ToSql};

use triplifier_core::Value;

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder)
    }
}

/// A single `VALUES` record
pub(super) struct Record<'a>(pub(super) &'a [Value]);

impl ToSql for Record<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "(" Comma(self.0) ")")
    }
}
