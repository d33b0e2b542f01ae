use serde::{Deserialize, Serialize};

/// Binds the whole ingested dataset to one root entity.
///
/// The dataset becomes a constant resource of class `class`, linked through
/// `predicate` to every instance of the root entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetBinding {
    /// Constant URI naming the dataset
    pub uri: String,

    #[serde(default = "DatasetBinding::default_class")]
    pub class: String,

    #[serde(default = "DatasetBinding::default_predicate")]
    pub predicate: String,
}

impl DatasetBinding {
    pub const DEFAULT_CLASS: &'static str = "http://rs.tdwg.org/dwc/terms/DataSet";
    pub const DEFAULT_PREDICATE: &'static str = "http://biscicol.org/terms/index.html#isSourceOf";

    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            class: Self::default_class(),
            predicate: Self::default_predicate(),
        }
    }

    fn default_class() -> String {
        Self::DEFAULT_CLASS.to_string()
    }

    fn default_predicate() -> String {
        Self::DEFAULT_PREDICATE.to_string()
    }
}
