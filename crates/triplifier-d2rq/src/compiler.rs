use crate::{
    document::{
        BridgeObject, ClassMap, Database, Identity, Prefix, PropertyBridge, SkipReason, Skipped,
        Subject,
    },
    vocab, Document,
};

use triplifier_core::{
    model::{Entity, JoinPath, Relation},
    schema::sanitize,
    Mapping,
};

/// Compile `mapping` into a D2RQ document.
///
/// Never fails: relations that cannot be resolved are left out and recorded
/// in [`Document::skipped`].
pub fn compile(mapping: &Mapping) -> Document {
    Compiler::new(mapping).compile()
}

/// Walks a [`Mapping`] and emits D2RQ blocks.
#[derive(Debug)]
pub struct Compiler<'a> {
    mapping: &'a Mapping,
    document: Document,
}

impl<'a> Compiler<'a> {
    pub fn new(mapping: &'a Mapping) -> Self {
        let document = Document {
            generated_at: mapping.date_time.clone(),
            prefixes: vocab::PREFIXES
                .iter()
                .map(|(name, iri)| Prefix::new(*name, *iri))
                .collect(),
            database: Database::new(&mapping.connection),
            blocks: vec![],
            skipped: vec![],
        };

        Self { mapping, document }
    }

    pub fn compile(mut self) -> Document {
        let mapping = self.mapping;

        for entity in mapping.entities() {
            self.entity(entity);
        }

        for relation in mapping.relations() {
            self.relation(relation);
        }

        self.dataset();

        tracing::debug!(
            blocks = self.document.blocks.len(),
            skipped = self.document.skipped.len(),
            "compiled mapping document"
        );

        self.document
    }

    fn entity(&mut self, entity: &Entity) {
        let class_map = entity.class_map();

        let mut conditions = vec![non_blank(&entity.column())];
        conditions.extend(extra_conditions(entity));

        self.push(ClassMap {
            name: class_map.clone(),
            subject: Subject::Identity(Identity::of(entity)),
            class: entity.class.clone(),
            conditions,
        });

        for attribute in &entity.attributes {
            let column = format!("{}.{}", entity.table, attribute.column);

            self.push(PropertyBridge {
                name: sanitize(&format!("{class_map}_{}", attribute.column)).into_owned(),
                belongs_to: class_map.clone(),
                property: attribute.predicate.clone(),
                conditions: vec![non_blank(&column)],
                object: BridgeObject::Column(column),
            });
        }
    }

    fn relation(&mut self, relation: &Relation) {
        let mapping = self.mapping;

        let Some(subject) = mapping.find_entity(&relation.subject) else {
            return self.skip(relation, SkipReason::UnknownSubject);
        };

        let Some(object) = mapping.find_entity(&relation.object) else {
            return self.skip(relation, SkipReason::UnknownObject);
        };

        let subject_map = subject.class_map();
        let object_map = object.class_map();
        let name = format!("{subject_map}_{object_map}_rel");

        if subject.table == object.table {
            // The object is the resource this same row forms as `object`
            let mut conditions = vec![non_blank(&object.column())];
            conditions.extend(extra_conditions(object));
            conditions.extend(extra_conditions(subject));

            self.push(PropertyBridge {
                name,
                belongs_to: subject_map,
                property: relation.predicate.clone(),
                object: BridgeObject::Identity(Identity::of(object)),
                conditions,
            });
            return;
        }

        let Some(path) = mapping.find_joins(&subject.table, &object.table) else {
            return self.skip(relation, SkipReason::NoJoinPath);
        };

        if let JoinPath::TwoHop(..) = path {
            tracing::debug!(%name, "relation joined through an intermediate table");
        }

        self.push(PropertyBridge {
            name,
            belongs_to: subject_map,
            property: relation.predicate.clone(),
            object: BridgeObject::RefersTo {
                class_map: object_map,
                joins: path.joins().map(ToString::to_string).collect(),
            },
            conditions: vec![],
        });
    }

    fn dataset(&mut self) {
        let mapping = self.mapping;

        let Some(dataset) = &mapping.dataset else {
            return;
        };

        let Some(root) = mapping.root_entity() else {
            tracing::debug!(uri = %dataset.uri, "no entities; omitting dataset binding");
            return;
        };

        let root_map = root.class_map();

        self.push(ClassMap {
            name: vocab::DATASET_BLOCK.to_string(),
            subject: Subject::Constant(dataset.uri.clone()),
            class: dataset.class.clone(),
            conditions: vec![],
        });

        self.push(PropertyBridge {
            name: format!("{}_{root_map}", vocab::DATASET_BLOCK),
            belongs_to: vocab::DATASET_BLOCK.to_string(),
            property: dataset.predicate.clone(),
            object: BridgeObject::Identity(Identity::of(root)),
            conditions: vec![],
        });
    }

    fn push(&mut self, block: impl Into<crate::document::Block>) {
        self.document.blocks.push(block.into());
    }

    fn skip(&mut self, relation: &Relation, reason: SkipReason) {
        let skipped = Skipped {
            relation: relation.clone(),
            reason,
        };
        tracing::warn!(%skipped, "skipping relation");
        self.document.skipped.push(skipped);
    }
}

/// `column <> ''`. SQL `NULL` fails the comparison as well.
fn non_blank(column: &str) -> String {
    format!("{column} <> ''")
}

/// The entity's extra conditions OR-ed into one, if it has any.
fn extra_conditions(entity: &Entity) -> Option<String> {
    if entity.extra_conditions.is_empty() {
        return None;
    }

    let columns: Vec<_> = entity
        .extra_conditions
        .iter()
        .map(|column| non_blank(&format!("{}.{column}", entity.table)))
        .collect();

    Some(columns.join(" OR "))
}
