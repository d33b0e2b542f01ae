use triplifier_core::{
    model::{Attribute, ColumnRef, Entity},
    schema::Catalog,
};

use serde::{Deserialize, Serialize};

/// Declares one entity of a provider's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityRule {
    /// Name relations refer to the entity by
    pub name: String,

    pub table: String,

    pub id_column: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,

    pub class: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_conditions: Vec<String>,

    #[serde(default, rename = "attribute", skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl EntityRule {
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        id_column: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            id_column: id_column.into(),
            id_prefix: None,
            class: class.into(),
            extra_conditions: vec![],
            attributes: vec![],
        }
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into());
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

    /// Build the entity, restricted to what `catalog` has. `None` if the
    /// table or its identifier column is missing.
    pub fn build(&self, catalog: &Catalog) -> Option<Entity> {
        let table = catalog.table(&self.table)?;

        if !table.has_column(&self.id_column) {
            return None;
        }

        let mut entity = Entity::new(&self.table, &self.id_column, &self.class);
        if let Some(prefix) = &self.id_prefix {
            entity = entity.id_prefix(prefix);
        }
        entity.attributes = self.attributes.clone();
        entity.extra_conditions = self.extra_conditions.clone();

        entity.retain_columns_of(table);
        Some(entity)
    }
}
