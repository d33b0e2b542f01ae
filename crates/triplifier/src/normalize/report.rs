/// What a normalizer run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Name of the flat table after the run. `None` when the database was not
    /// a single flat table and nothing was done.
    pub root_table: Option<String>,

    /// Identifier columns that were filled in
    pub fixed: Vec<String>,

    /// Concept tables created
    pub tables: Vec<String>,

    /// Columns moved out of the flat table
    pub relocated: Vec<String>,

    /// Whether the flat table was given an integer root key
    pub surrogate_key: bool,

    /// Whether the flat table was renamed
    pub renamed: bool,
}

impl Report {
    /// `true` when the run left the schema untouched.
    pub fn is_noop(&self) -> bool {
        self.fixed.is_empty() && self.relocated.is_empty() && !self.surrogate_key && !self.renamed
    }
}
