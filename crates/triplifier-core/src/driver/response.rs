use crate::{err, Result, Value};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Query result rows
    Values(Vec<Vec<Value>>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<Vec<Value>>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }

    /// Consume the response, expecting a row count.
    pub fn into_count(self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(err!("expected a row count, got values")),
        }
    }

    /// Consume the response, expecting query rows.
    pub fn into_values(self) -> Result<Vec<Vec<Value>>> {
        match self.rows {
            Rows::Values(values) => Ok(values),
            Rows::Count(_) => Err(err!("expected values, got a row count")),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }
}
