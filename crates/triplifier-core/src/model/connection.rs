use serde::{Deserialize, Serialize};
use std::path::Path;

/// Database systems the external mapping engine knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbSystem {
    Sqlite,
    Mysql,
    Postgresql,
    Oracle,
    Sqlserver,
}

impl DbSystem {
    /// JDBC driver class the mapping engine loads for this system.
    pub fn jdbc_driver(self) -> &'static str {
        match self {
            DbSystem::Sqlite => "org.sqlite.JDBC",
            DbSystem::Mysql => "com.mysql.jdbc.Driver",
            DbSystem::Postgresql => "org.postgresql.Driver",
            DbSystem::Oracle => "oracle.jdbc.OracleDriver",
            DbSystem::Sqlserver => "com.microsoft.sqlserver.jdbc.SQLServerDriver",
        }
    }

    /// Row fetch size hint. MySQL streams rows only with `Integer.MIN_VALUE`.
    pub fn fetch_size(self) -> i32 {
        match self {
            DbSystem::Mysql => i32::MIN,
            _ => 500,
        }
    }
}

/// Describes how the mapping engine should connect to the source database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub system: DbSystem,

    /// Host name, or the parent directory for file databases
    pub host: String,

    /// Database name, or the file name for file databases
    pub database: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ConnectionInfo {
    pub fn new(system: DbSystem, host: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            system,
            host: host.into(),
            database: database.into(),
            username: None,
            password: None,
        }
    }

    /// Describe a SQLite database file.
    pub fn sqlite(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let host = path
            .parent()
            .map(|parent| parent.display().to_string().replace('\\', "/"))
            .unwrap_or_default();
        let database = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::new(DbSystem::Sqlite, host, database)
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn jdbc_url(&self) -> String {
        let Self { host, database, .. } = self;

        match self.system {
            DbSystem::Mysql => format!("jdbc:mysql://{host}/{database}"),
            DbSystem::Postgresql => format!("jdbc:postgresql://{host}/{database}"),
            DbSystem::Oracle => format!("jdbc:oracle:thin:@{host}:{database}"),
            DbSystem::Sqlserver => format!("jdbc:sqlserver://{host};databaseName={database}"),
            DbSystem::Sqlite if host.is_empty() => format!("jdbc:sqlite:{database}"),
            DbSystem::Sqlite => format!("jdbc:sqlite:{host}/{database}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_file() {
        let info = ConnectionInfo::sqlite("/data/uploads/vertnet.sqlite");
        assert_eq!(info.host, "/data/uploads");
        assert_eq!(info.database, "vertnet.sqlite");
        assert_eq!(info.jdbc_url(), "jdbc:sqlite:/data/uploads/vertnet.sqlite");

        let info = ConnectionInfo::new(DbSystem::Sqlite, "", ":memory:");
        assert_eq!(info.jdbc_url(), "jdbc:sqlite::memory:");
    }

    #[test]
    fn jdbc_urls() {
        let url = |system| ConnectionInfo::new(system, "db.example.org", "biocode").jdbc_url();

        assert_eq!(url(DbSystem::Mysql), "jdbc:mysql://db.example.org/biocode");
        assert_eq!(
            url(DbSystem::Postgresql),
            "jdbc:postgresql://db.example.org/biocode"
        );
        assert_eq!(url(DbSystem::Oracle), "jdbc:oracle:thin:@db.example.org:biocode");
        assert_eq!(
            url(DbSystem::Sqlserver),
            "jdbc:sqlserver://db.example.org;databaseName=biocode"
        );
    }

    #[test]
    fn mysql_streams_rows() {
        assert_eq!(DbSystem::Mysql.fetch_size(), i32::MIN);
        assert_eq!(DbSystem::Sqlite.fetch_size(), 500);
    }
}
