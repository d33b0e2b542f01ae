//! Declarative provider rule sets.
//!
//! A rule set names the entities, joins and relations a data provider's
//! tables are expected to hold. [`ProviderRules::apply`] checks it against the
//! live catalog and populates a [`Mapping`] with whatever is actually there.

mod entity;
pub use entity::EntityRule;

mod relation;
pub use relation::RelationRule;

use triplifier_core::{
    model::{ColumnRef, DatasetBinding, Join, Relation},
    Error, Mapping, Result,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

const DARWIN_CORE: &str = include_str!("rules/darwin_core.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderRules {
    #[serde(default, rename = "entity", skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityRule>,

    #[serde(default, rename = "join", skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<Join>,

    #[serde(default, rename = "relation", skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<RelationRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetBinding>,
}

impl ProviderRules {
    /// Names of the built-in rule sets.
    pub const BUILTIN: &'static [&'static str] = &["darwin-core"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for a normalized Darwin Core occurrence table.
    pub fn darwin_core() -> Self {
        DARWIN_CORE
            .parse()
            .expect("built-in Darwin Core rule set is valid")
    }

    /// Look up a built-in rule set by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "darwin-core" => Some(Self::darwin_core()),
            _ => None,
        }
    }

    /// Load a rule set from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        contents.parse().map_err(|err: Error| {
            err.context(Error::from_args(format_args!(
                "loading rule set `{}`",
                path.display()
            )))
        })
    }

    pub fn entity(mut self, entity: EntityRule) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn relation(mut self, relation: RelationRule) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn dataset(mut self, dataset: DatasetBinding) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Check that entity names are unique and that every relation names a
    /// declared entity.
    pub fn validate(&self) -> Result<()> {
        self.entities_by_name().map(|_| ())
    }

    fn entities_by_name(&self) -> Result<IndexMap<&str, &EntityRule>> {
        let mut by_name = IndexMap::new();

        for entity in &self.entities {
            if by_name.insert(entity.name.as_str(), entity).is_some() {
                return Err(Error::invalid_rules(format!(
                    "entity `{}` is declared more than once",
                    entity.name
                )));
            }
        }

        for relation in &self.relations {
            for name in [&relation.subject, &relation.object] {
                if !by_name.contains_key(name.as_str()) {
                    return Err(Error::invalid_rules(format!(
                        "relation names unknown entity `{name}`"
                    )));
                }
            }
        }

        Ok(by_name)
    }

    /// Populate `mapping` from these rules, keeping only what its catalog
    /// has.
    ///
    /// Entities whose table or identifier column is missing are dropped, as
    /// are attributes and joins naming missing columns. Relations are always
    /// added: one whose entity was dropped is skipped later, at compile time.
    pub fn apply(&self, mapping: &mut Mapping) -> Result<()> {
        let by_name = self.entities_by_name()?;

        for rule in &self.entities {
            match rule.build(&mapping.schema) {
                Some(entity) => {
                    mapping.add_entity(entity);
                }
                None => {
                    tracing::debug!(
                        entity = %rule.name,
                        table = %rule.table,
                        "entity not in catalog; dropping"
                    );
                }
            }
        }

        if !self.entities.is_empty() && mapping.entities().len() == 0 {
            tracing::warn!(
                entities = self.entities.len(),
                tables = mapping.schema.len(),
                "no rule entity matches the catalog; the mapping will be empty"
            );
        }

        for join in &self.joins {
            let schema = &mapping.schema;
            if schema.has_column(&join.foreign_table, &join.foreign_column)
                && schema.has_column(&join.primary_table, &join.primary_column)
            {
                mapping.add_join(join.clone());
            } else {
                tracing::debug!(%join, "join not in catalog; dropping");
            }
        }

        for relation in &self.relations {
            let key = |name: &str| -> ColumnRef { by_name[name].key() };

            mapping.add_relation(Relation::new(
                key(&relation.subject),
                &relation.predicate,
                key(&relation.object),
            ));
        }

        if let Some(dataset) = &self.dataset {
            if mapping.dataset.is_none() {
                mapping.set_dataset(dataset.clone());
            }
        }

        tracing::info!(
            entities = mapping.entities().len(),
            joins = mapping.joins().len(),
            relations = mapping.relations().len(),
            "applied provider rules"
        );

        Ok(())
    }
}

impl FromStr for ProviderRules {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rules: ProviderRules = toml::from_str(s)?;
        rules.validate()?;
        Ok(rules)
    }
}

impl fmt::Display for ProviderRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}
