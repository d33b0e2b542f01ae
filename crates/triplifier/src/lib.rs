pub mod config;
pub use config::{Config, ConnectionConfig, NormalizeConfig, RulesConfig};

mod exec;

pub mod import;
pub use import::{Sheet, TableImporter, TabularSource};

pub mod normalize;
pub use normalize::{Normalizer, Report};

pub mod rules;
pub use rules::{EntityRule, ProviderRules, RelationRule};

mod triplifier;
pub use triplifier::Triplifier;

pub use triplifier_core::{bail, err, Error, Mapping, Result};
pub use triplifier_d2rq::Document;

#[cfg(feature = "sqlite")]
pub use triplifier_driver_sqlite::Sqlite;
