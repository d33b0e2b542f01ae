//! The concept model: what a relational database means as RDF.
//!
//! A [`Mapping`] aggregates the catalog snapshot with the [`Entity`],
//! [`Join`] and [`Relation`] declarations that the mapping compiler turns
//! into a mapping document. Collections preserve insertion order, which makes
//! dataset root selection and join tie-breaks deterministic.

mod column_ref;
pub use column_ref::ColumnRef;

mod connection;
pub use connection::{ConnectionInfo, DbSystem};

mod dataset;
pub use dataset::DatasetBinding;

mod entity;
pub use entity::{Attribute, Entity};

mod join;
pub use join::Join;

mod join_path;
pub use join_path::{find_path, JoinPath};

mod mapping;
pub use mapping::Mapping;

mod relation;
pub use relation::Relation;
