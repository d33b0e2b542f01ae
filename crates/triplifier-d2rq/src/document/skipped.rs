use triplifier_core::model::Relation;

use serde::Serialize;
use std::fmt;

/// A relation left out of the compiled document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub relation: Relation,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnknownSubject,
    UnknownObject,

    /// Subject and object tables are not connected by one or two joins
    NoJoinPath,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::UnknownSubject => "subject is not a mapped entity",
            SkipReason::UnknownObject => "object is not a mapped entity",
            SkipReason::NoJoinPath => "no join path between subject and object tables",
        })
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Relation {
            subject,
            predicate,
            object,
        } = &self.relation;
        write!(f, "{subject} {predicate} {object}: {}", self.reason)
    }
}
