use super::Identity;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyBridge {
    pub name: String,

    /// Name of the owning class map
    pub belongs_to: String,

    /// RDF property URI or CURIE
    pub property: String,

    pub object: BridgeObject,

    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeObject {
    /// A literal read from `table.column`
    Column(String),

    /// A resource formed by an identity rule on the subject's own row
    Identity(Identity),

    /// A resource of another class map, reached through joins
    RefersTo {
        class_map: String,

        /// `foreignTable.column => primaryTable.column`, in path order
        joins: Vec<String>,
    },
}
