use std::{borrow::Cow, fmt};

/// A table or column identifier that is safe to splice into generated SQL and
/// mapping documents.
///
/// Source data may carry names with spaces, periods or a leading digit.
/// Sanitizing replaces every character outside `[A-Za-z0-9_]` with `_` and
/// prefixes a leading digit with `_`. Sanitizing is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(src: &str) -> Self {
        Self(sanitize(src).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Sanitize `src`, borrowing it when it is already a valid identifier.
pub fn sanitize(src: &str) -> Cow<'_, str> {
    let leading_digit = src.starts_with(|c: char| c.is_ascii_digit());
    let clean = src.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if clean && !leading_digit {
        return Cow::Borrowed(src);
    }

    let mut ret = String::with_capacity(src.len() + 1);
    if leading_digit {
        ret.push('_');
    }
    ret.extend(src.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    Cow::Owned(ret)
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Self {
        Name::new(src)
    }
}

impl From<&String> for Name {
    fn from(src: &String) -> Self {
        Name::new(src)
    }
}
