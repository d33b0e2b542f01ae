use super::ColumnRef;

use serde::{Deserialize, Serialize};

/// A directed RDF property from one entity to another.
///
/// Both ends name an entity by its `table.id_column`. Resolution happens when
/// the mapping is compiled; a relation naming no entity produces no output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub subject: ColumnRef,

    /// RDF property URI or CURIE
    pub predicate: String,

    pub object: ColumnRef,
}

impl Relation {
    pub fn new(subject: ColumnRef, predicate: impl Into<String>, object: ColumnRef) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}
