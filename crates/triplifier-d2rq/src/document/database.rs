use triplifier_core::model::ConnectionInfo;

use serde::Serialize;

/// The `map:database` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Database {
    pub jdbc_driver: String,
    pub jdbc_dsn: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub fetch_size: i32,
}

impl Database {
    pub fn new(connection: &ConnectionInfo) -> Self {
        let non_empty = |s: &Option<String>| s.clone().filter(|s| !s.is_empty());

        Self {
            jdbc_driver: connection.system.jdbc_driver().to_string(),
            jdbc_dsn: connection.jdbc_url(),
            username: non_empty(&connection.username),
            password: non_empty(&connection.password),
            fetch_size: connection.system.fetch_size(),
        }
    }
}
