use super::TabularSource;

use triplifier_core::Result;

/// A tabular source held in memory.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    tables: Vec<SheetTable>,

    /// Index of the current table
    cursor: Option<usize>,

    /// Index of the next row of the current table
    row: usize,
}

#[derive(Debug, Clone)]
struct SheetTable {
    name: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table.
    pub fn table<H, R, C>(mut self, name: impl Into<String>, header: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.tables.push(SheetTable {
            name: name.into(),
            header: header.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        });
        self
    }

    fn current(&self) -> Option<&SheetTable> {
        self.tables.get(self.cursor?)
    }
}

impl TabularSource for Sheet {
    fn next_table(&mut self) -> Result<bool> {
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        self.cursor = Some(next);
        self.row = 0;
        Ok(next < self.tables.len())
    }

    fn table_name(&self) -> &str {
        self.current()
            .map(|table| table.name.as_str())
            .unwrap_or_default()
    }

    fn header(&self) -> &[String] {
        self.current()
            .map(|table| table.header.as_slice())
            .unwrap_or_default()
    }

    fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        let Some(table) = self.current() else {
            return Ok(None);
        };
        let row = table.rows.get(self.row).cloned();
        if row.is_some() {
            self.row += 1;
        }
        Ok(row)
    }
}
