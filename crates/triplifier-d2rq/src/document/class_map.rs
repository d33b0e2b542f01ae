use super::Identity;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMap {
    pub name: String,
    pub subject: Subject,

    /// RDF class URI or CURIE
    pub class: String,

    /// SQL conditions, each emitted as its own `d2rq:condition`
    pub conditions: Vec<String>,
}

/// What resources a class map produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// One resource per row
    Identity(Identity),

    /// A single fixed resource
    Constant(String),
}
