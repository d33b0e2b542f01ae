use triplifier_core::Result;

/// Row-by-row access to the tables of a tabular file.
///
/// A source is a cursor over its tables. Call [`next_table`] to move to the
/// first (and each following) table, then read its rows with [`next_row`].
/// The first row of the file is the header and is never returned by
/// `next_row`.
///
/// [`next_table`]: TabularSource::next_table
/// [`next_row`]: TabularSource::next_row
pub trait TabularSource {
    /// Move to the next table. Returns `false` once every table was visited.
    fn next_table(&mut self) -> Result<bool>;

    /// Name of the current table. May be empty.
    fn table_name(&self) -> &str;

    /// Column names of the current table.
    fn header(&self) -> &[String];

    /// Next data row of the current table, or `None` at its end.
    fn next_row(&mut self) -> Result<Option<Vec<String>>>;
}
