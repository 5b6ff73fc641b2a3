//! Identifiers for hyperlink targets inside the generated document.

use std::fmt;
use std::sync::Arc;

/// The name of a `\hypertarget`, always a slug so it is safe inside TeX.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AnchorId(Arc<str>);

impl AnchorId {
    /// Builds an anchor from free text, e.g. `"Mon Jan 2"` becomes `mon-jan-2`.
    pub fn new(label: &str) -> Self {
        Self(slug::slugify(label).into())
    }

    /// Builds an anchor from several parts joined with `-`.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = parts
            .into_iter()
            .map(|part| part.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
