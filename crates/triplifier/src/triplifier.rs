use crate::{normalize::Report, Config, Normalizer};

use triplifier_core::{model::ConnectionInfo, Catalog, Connection, Mapping, Result};
use triplifier_d2rq::Document;

/// One triplification of one database.
///
/// Opening a session normalizes the database (when enabled), snapshots its
/// catalog and populates a [`Mapping`] from the configured rule set. The
/// session keeps its connection open so that in-memory databases outlive
/// schema inspection.
#[derive(Debug)]
pub struct Triplifier {
    connection: Box<dyn Connection>,
    mapping: Mapping,
    report: Report,
}

impl Triplifier {
    /// Connect to the database `config` names and prepare its mapping.
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let driver = config.driver()?;
        let connection = driver.connect()?;
        let info = config.connection.connection_info(&*driver);

        tracing::debug!(url = %driver.url(), "opened triplifier session");
        Self::with_connection(config, info, connection)
    }

    /// Prepare the mapping of an already open connection.
    ///
    /// `config.connection` is not used; `info` describes the database to the
    /// mapping engine instead.
    pub fn with_connection(
        config: &Config,
        info: ConnectionInfo,
        mut connection: Box<dyn Connection>,
    ) -> Result<Self> {
        let rules = config.rules.resolve()?;

        let report = if config.normalize.enabled {
            let mut normalizer = Normalizer::darwin_core();
            let root_table = config.normalize.root_table.as_deref();
            if let Some(name) = root_table.or_else(|| config.rules.root_table()) {
                normalizer = normalizer.root_table(name);
            }
            normalizer.run(&mut *connection)?
        } else {
            Report::default()
        };

        let schema = Catalog::inspect(&mut *connection)?;
        let mut mapping = Mapping::new(info, schema);

        // Set first so the rule set's own dataset only fills a gap
        if let Some(dataset) = &config.dataset {
            mapping.set_dataset(dataset.clone());
        }
        rules.apply(&mut mapping)?;

        Ok(Self {
            connection,
            mapping,
            report,
        })
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// What normalization changed. Empty when normalization is disabled.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// The session's connection, for running the mapping against.
    pub fn connection(&mut self) -> &mut dyn Connection {
        &mut *self.connection
    }

    pub fn compile(&self) -> Document {
        triplifier_d2rq::compile(&self.mapping)
    }
}
