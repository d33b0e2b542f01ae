mod catalog;
pub use catalog::Catalog;

mod name;
pub use name::{sanitize, Name};

mod table;
pub use table::Table;
