use super::{ClassMap, PropertyBridge};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    ClassMap(ClassMap),
    PropertyBridge(PropertyBridge),
}

impl Block {
    pub fn name(&self) -> &str {
        match self {
            Block::ClassMap(class_map) => &class_map.name,
            Block::PropertyBridge(bridge) => &bridge.name,
        }
    }

    pub fn as_class_map(&self) -> Option<&ClassMap> {
        match self {
            Block::ClassMap(class_map) => Some(class_map),
            _ => None,
        }
    }

    pub fn as_property_bridge(&self) -> Option<&PropertyBridge> {
        match self {
            Block::PropertyBridge(bridge) => Some(bridge),
            _ => None,
        }
    }
}

impl From<ClassMap> for Block {
    fn from(value: ClassMap) -> Self {
        Block::ClassMap(value)
    }
}

impl From<PropertyBridge> for Block {
    fn from(value: PropertyBridge) -> Self {
        Block::PropertyBridge(value)
    }
}
