use super::{find_path, ColumnRef, ConnectionInfo, DatasetBinding, Entity, Join, JoinPath, Relation};
use crate::{driver::Driver, schema::Catalog, Result};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The aggregate compiled into one mapping document.
///
/// A mapping starts out holding only the connection descriptor and the catalog
/// snapshot. Entities, joins and relations are added afterwards and are then
/// read, never modified, by the compiler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mapping {
    /// When the catalog snapshot was taken
    pub date_time: String,

    pub connection: ConnectionInfo,

    pub schema: Catalog,

    #[serde(default)]
    joins: IndexSet<Join>,

    #[serde(default)]
    entities: IndexSet<Entity>,

    #[serde(default)]
    relations: IndexSet<Relation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetBinding>,
}

impl Mapping {
    pub fn new(connection: ConnectionInfo, schema: Catalog) -> Self {
        Self {
            date_time: jiff::Timestamp::now().to_string(),
            connection,
            schema,
            joins: IndexSet::new(),
            entities: IndexSet::new(),
            relations: IndexSet::new(),
            dataset: None,
        }
    }

    /// Open a connection through `driver` and snapshot its catalog.
    pub fn inspect(driver: &dyn Driver) -> Result<Self> {
        let mut connection = driver.connect()?;
        let schema = Catalog::inspect(&mut *connection)?;
        Ok(Self::new(driver.connection_info(), schema))
    }

    /// Add an entity, replacing (and returning) any entity with the same
    /// table and identifier column. The replacement keeps the original's
    /// position.
    pub fn add_entity(&mut self, entity: Entity) -> Option<Entity> {
        let (_, replaced) = self.entities.replace_full(entity);
        if let Some(replaced) = &replaced {
            tracing::debug!(entity = %replaced.column(), "replacing entity");
        }
        replaced
    }

    pub fn add_join(&mut self, join: Join) {
        self.joins.insert(join);
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.insert(relation);
    }

    pub fn set_dataset(&mut self, dataset: DatasetBinding) {
        self.dataset = Some(dataset);
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn joins(&self) -> impl ExactSizeIterator<Item = &Join> + '_ {
        self.joins.iter()
    }

    pub fn relations(&self) -> impl ExactSizeIterator<Item = &Relation> + '_ {
        self.relations.iter()
    }

    pub fn find_entity(&self, key: &ColumnRef) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Find the joins connecting `a` and `b`. See [`find_path`].
    pub fn find_joins(&self, a: &str, b: &str) -> Option<JoinPath<'_>> {
        find_path(a, b, &self.joins)
    }

    /// The entity the dataset binding attaches to: the subject of the first
    /// relation whose subject resolves, or else the first entity.
    pub fn root_entity(&self) -> Option<&Entity> {
        self.relations
            .iter()
            .find_map(|relation| self.find_entity(&relation.subject))
            .or_else(|| self.entities.first())
    }
}
