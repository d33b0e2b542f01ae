mod block;
pub use block::Block;

mod class_map;
pub use class_map::{ClassMap, Subject};

mod database;
pub use database::Database;

mod identity;
pub use identity::Identity;

mod prefix;
pub use prefix::Prefix;

mod property_bridge;
pub use property_bridge::{BridgeObject, PropertyBridge};

mod skipped;
pub use skipped::{SkipReason, Skipped};

use serde::Serialize;

/// A compiled D2RQ mapping document.
///
/// Blocks are kept in emission order: entity class maps each followed by
/// their attribute bridges, then relation bridges, then the dataset blocks.
/// `Display` renders the D2RQ text.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Timestamp of the mapping this document was compiled from
    pub generated_at: String,

    pub prefixes: Vec<Prefix>,

    pub database: Database,

    pub blocks: Vec<Block>,

    /// Relations that could not be compiled. Not part of the rendered text.
    pub skipped: Vec<Skipped>,
}

impl Document {
    pub fn class_maps(&self) -> impl Iterator<Item = &ClassMap> + '_ {
        self.blocks.iter().filter_map(Block::as_class_map)
    }

    pub fn property_bridges(&self) -> impl Iterator<Item = &PropertyBridge> + '_ {
        self.blocks.iter().filter_map(Block::as_property_bridge)
    }

    /// Find a block by its name (without the `map:` prefix).
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.name() == name)
    }

    /// Property bridges belonging to the class map `class_map`.
    pub fn bridges_of<'a>(
        &'a self,
        class_map: &'a str,
    ) -> impl Iterator<Item = &'a PropertyBridge> + 'a {
        self.property_bridges()
            .filter(move |bridge| bridge.belongs_to == class_map)
    }
}
