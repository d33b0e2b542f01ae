use crate::ProviderRules;

use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};
use triplifier_core::{
    driver::Driver,
    err,
    model::{ConnectionInfo, DatasetBinding},
    Error, Result,
};
use url::Url;

/// Configuration for a triplification session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Provider rule set used to populate the mapping
    pub rules: RulesConfig,

    /// Source database
    pub connection: ConnectionConfig,

    /// Binds the whole dataset to the root entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetBinding>,

    /// Flat-table normalization
    pub normalize: NormalizeConfig,
}

/// Where the source database lives and how the mapping engine logs in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Driver URL, e.g. `sqlite:/data/upload.sqlite` or `sqlite::memory:`
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    /// Run the normalizer before inspecting the catalog
    pub enabled: bool,

    /// Name the rebuilt flat table is renamed to. Defaults to the table
    /// the selected rule set expects, if it expects one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_table: Option<String>,
}

/// Either the name of a built-in rule set or an inline one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RulesConfig {
    Builtin(String),
    Inline(ProviderRules),
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        contents
            .parse()
            .map_err(|e: Error| e.context(err!("loading config `{}`", path.display())))
    }

    /// Set the connection configuration
    pub fn connection(mut self, connection: ConnectionConfig) -> Self {
        self.connection = connection;
        self
    }

    /// Set the connection URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.connection.url = url.into();
        self
    }

    /// Set the dataset binding
    pub fn dataset(mut self, dataset: DatasetBinding) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Set the normalizer configuration
    pub fn normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the rule set
    pub fn rules(mut self, rules: impl Into<RulesConfig>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Check everything that can be checked without touching the database.
    pub fn validate(&self) -> Result<()> {
        if self.connection.url.is_empty() {
            return Err(Error::invalid_config("`connection.url` is required"));
        }

        self.rules.resolve()?;
        Ok(())
    }

    /// Pick a driver by the connection URL's scheme.
    pub fn driver(&self) -> Result<Box<dyn Driver>> {
        let url = &self.connection.url;
        let parsed = Url::parse(url)
            .map_err(|e| Error::invalid_connection_url(format!("{e}; url={url}")))?;

        match parsed.scheme() {
            "sqlite" => connect_sqlite(url),
            scheme => Err(Error::unsupported_feature(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(triplifier_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}

impl ConnectionConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// The driver's connection descriptor with the configured credentials.
    pub fn connection_info(&self, driver: &dyn Driver) -> ConnectionInfo {
        let mut info = driver.connection_info();
        if self.username.is_some() {
            info.username.clone_from(&self.username);
        }
        if self.password.is_some() {
            info.password.clone_from(&self.password);
        }
        info
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root_table: None,
        }
    }
}

impl NormalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn root_table(mut self, name: impl Into<String>) -> Self {
        self.root_table = Some(name.into());
        self
    }
}

impl RulesConfig {
    /// The rule set this configuration names.
    pub fn resolve(&self) -> Result<ProviderRules> {
        match self {
            RulesConfig::Builtin(name) => ProviderRules::builtin(name).ok_or_else(|| {
                Error::invalid_config(format!(
                    "unknown rule set `{name}`; expected one of {:?}",
                    ProviderRules::BUILTIN
                ))
            }),
            RulesConfig::Inline(rules) => Ok(rules.clone()),
        }
    }

    /// The table name the rule set expects the normalized flat table to have.
    pub fn root_table(&self) -> Option<&str> {
        match self {
            RulesConfig::Builtin(name) if name == "darwin-core" => Some("occurrence"),
            _ => None,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig::Builtin("darwin-core".to_string())
    }
}

impl From<ProviderRules> for RulesConfig {
    fn from(rules: ProviderRules) -> Self {
        RulesConfig::Inline(rules)
    }
}

impl From<&str> for RulesConfig {
    fn from(name: &str) -> Self {
        RulesConfig::Builtin(name.to_string())
    }
}
