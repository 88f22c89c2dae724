use crate::error::ChangelogError;
use crate::types::{LatestChanges, Result};
use crate::utils::split_lines;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A changelog loaded as an ordered list of lines
#[derive(Debug, Clone)]
pub struct ChangelogDocument {
    path: Option<PathBuf>,
    lines: Vec<String>,
}

impl ChangelogDocument {
    /// Reads a changelog file from disk
    ///
    /// # Errors
    /// Returns [`ChangelogError::Read`] if the file is missing or unreadable
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| ChangelogError::Read {
            path: path.clone(),
            source,
        })?;

        let mut document = Self::from_text(&content);
        debug!(path = %path.display(), lines = document.len(), "read changelog");
        document.path = Some(path);
        Ok(document)
    }

    /// Builds a document from in-memory text, splitting on `\n`, `\r\n` and `\r`
    #[must_use]
    pub fn from_text(content: &str) -> Self {
        Self {
            path: None,
            lines: split_lines(content).into_iter().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Where the document was read from, if it came from disk
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Writes the changes to `path`, replacing whatever was there
///
/// # Errors
/// Returns [`ChangelogError::Write`] if the file cannot be created or written
pub fn write_latest_changes(path: &Path, changes: &LatestChanges) -> Result<()> {
    fs::write(path, changes.as_text()).map_err(|source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), entries = changes.len(), "wrote latest changes");
    Ok(())
}
