mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::{ColumnDef, Type};

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod expr;
pub use expr::{BinaryOp, Expr, ExprColumn};

mod insert;
pub use insert::{Insert, InsertSource};

mod name;
pub use name::Name;

mod rename_table;
pub use rename_table::RenameTable;

mod select;
pub use select::Select;

mod update;
pub use update::{Assignment, Update};

pub use triplifier_core::Value;

#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Query(Select),
    RenameTable(RenameTable),
    Update(Update),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }
}
