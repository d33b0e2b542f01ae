//! Compiles a [`Mapping`](triplifier_core::Mapping) into a D2RQ mapping
//! document.
//!
//! The document is built as structured blocks first ([`Document`]) and only
//! rendered to the D2RQ Turtle dialect by its `Display` implementation, so
//! callers can inspect what was emitted and what was skipped.

mod compiler;
pub use compiler::{compile, Compiler};

pub mod document;
pub use document::Document;

mod serializer;

pub mod vocab;
pub use vocab::D2RQ;
