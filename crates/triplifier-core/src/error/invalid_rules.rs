use super::Error;

/// Error when a provider rule set is inconsistent with itself.
///
/// This occurs when:
/// - Two entities share the same name
/// - A relation names an entity the rule set does not declare
///
/// Rules that merely do not match the live catalog are not errors; those
/// entries are dropped while building the mapping.
#[derive(Debug)]
pub(super) struct InvalidRules {
    message: Box<str>,
}

impl std::error::Error for InvalidRules {}

impl core::fmt::Display for InvalidRules {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid rules: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid rules error.
    pub fn invalid_rules(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRules(InvalidRules {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid rules error.
    pub fn is_invalid_rules(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRules(_))
    }
}
