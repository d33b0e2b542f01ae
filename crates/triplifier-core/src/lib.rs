pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod model;
pub use model::Mapping;

pub mod schema;
pub use schema::Catalog;

mod value;
pub use value::Value;

/// A Result type alias that uses Triplifier's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
