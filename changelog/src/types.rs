use crate::error::ChangelogError;
use std::fmt::{self, Display, Formatter};

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Normalized bullet lines taken from the top of a changelog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestChanges {
    entries: Vec<String>,
}

impl LatestChanges {
    pub(crate) fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Bullet lines in their original order, without line terminators
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every entry followed by a newline, including the last one
    #[must_use]
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.as_text()
    }
}

impl Display for LatestChanges {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
