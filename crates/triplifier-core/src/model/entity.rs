use super::ColumnRef;
use crate::schema::{sanitize, Table};

use indexmap::Equivalent;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A mapped concept: the rows of `table` become RDF resources of `class`,
/// identified by the value of `id_column`.
///
/// Two entities are the same entity when they share a table and identifier
/// column; the remaining fields do not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub table: String,

    pub id_column: String,

    /// When set, subjects are minted as `{id_prefix}{value}` instead of
    /// taking the identifier value as a URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,

    /// RDF class URI or CURIE
    pub class: String,

    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Columns of which at least one must be non-blank for a row to produce
    /// a resource.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_conditions: Vec<String>,
}

/// One column of an entity's table mapped to an RDF property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub column: String,

    /// RDF property URI or CURIE
    pub predicate: String,
}

impl Entity {
    pub fn new(
        table: impl Into<String>,
        id_column: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            id_column: id_column.into(),
            id_prefix: None,
            class: class.into(),
            attributes: vec![],
            extra_conditions: vec![],
        }
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into()).filter(|prefix: &String| !prefix.is_empty());
        self
    }

    pub fn attribute(mut self, column: impl Into<String>, predicate: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(column, predicate));
        self
    }

    pub fn extra_condition(mut self, column: impl Into<String>) -> Self {
        self.extra_conditions.push(column.into());
        self
    }

    pub fn key(&self) -> ColumnRef {
        ColumnRef::new(&self.table, &self.id_column)
    }

    /// `table.id_column`
    pub fn column(&self) -> String {
        format!("{}.{}", self.table, self.id_column)
    }

    /// Name of the class map generated for this entity.
    pub fn class_map(&self) -> String {
        sanitize(&format!("{}_{}", self.table, self.id_column)).into_owned()
    }

    /// Drop every attribute and extra condition that names a column `table`
    /// does not have.
    pub fn retain_columns_of(&mut self, table: &Table) {
        self.attributes.retain(|attribute| {
            let keep = table.has_column(&attribute.column);
            if !keep {
                tracing::debug!(
                    table = %table.name,
                    column = %attribute.column,
                    "dropping attribute for missing column"
                );
            }
            keep
        });
        self.extra_conditions.retain(|column| table.has_column(column));
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.id_column == other.id_column
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    // Must hash exactly like `ColumnRef` so the two are interchangeable keys.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.id_column.hash(state);
    }
}

impl Equivalent<Entity> for ColumnRef {
    fn equivalent(&self, key: &Entity) -> bool {
        self.table == key.table && self.column == key.id_column
    }
}

impl Attribute {
    pub fn new(column: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            predicate: predicate.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn equality_is_table_and_id_column() {
        let a = Entity::new("occurrence", "occurrenceID", "dwc:Occurrence");
        let b = Entity::new("occurrence", "occurrenceID", "dwc:Identification")
            .attribute("recordedBy", "dwc:recordedBy");
        let c = Entity::new("occurrence", "identificationID", "dwc:Identification");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn lookup_by_column_ref() {
        let mut entities = IndexSet::new();
        entities.insert(Entity::new("taxon", "id", "dwc:Taxon"));
        entities.insert(Entity::new("event", "id", "dwc:Event"));

        let found = entities.get(&ColumnRef::new("event", "id")).unwrap();
        assert_eq!(found.class, "dwc:Event");
        assert!(entities.get(&ColumnRef::new("event", "eventID")).is_none());
    }

    #[test]
    fn class_map_is_sanitized() {
        let entity = Entity::new("field notes", "sample.id", "bsc:Sample");
        assert_eq!(entity.class_map(), "field_notes_sample_id");
    }

    #[test]
    fn empty_prefix_means_no_prefix() {
        let entity = Entity::new("taxon", "id", "dwc:Taxon").id_prefix("");
        assert_eq!(entity.id_prefix, None);
    }

    #[test]
    fn retain_columns_of_drops_unknown_columns() {
        let table = Table::new("occurrence", ["occurrenceID", "recordedBy"], ["occurrenceID"]);
        let mut entity = Entity::new("occurrence", "occurrenceID", "dwc:Occurrence")
            .attribute("recordedBy", "dwc:recordedBy")
            .attribute("catalogNumber", "dwc:catalogNumber")
            .extra_condition("recordedBy")
            .extra_condition("fieldNumber");

        entity.retain_columns_of(&table);

        assert_eq!(
            entity.attributes,
            [Attribute::new("recordedBy", "dwc:recordedBy")]
        );
        assert_eq!(entity.extra_conditions, ["recordedBy"]);
    }
}
