use crate::config::ExtractConfig;
use crate::document::ChangelogDocument;
use crate::error::ChangelogError;
use crate::types::{LatestChanges, Result};
use crate::utils::{is_heading, normalize_bullet};
use tracing::debug;

/// Pulls the bullet points under the top header of a changelog
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    #[must_use]
    pub const fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Drops the header line, trims every remaining line, skips blank ones
    /// and makes sure each entry starts with a dash.
    ///
    /// Without `stop_at_next_header` everything after the first line is
    /// treated as the latest section, so older sections are included too.
    ///
    /// # Errors
    /// Returns [`ChangelogError::EmptyDocument`] when there is no header line to drop
    pub fn extract_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<LatestChanges> {
        let (_header, body) = lines.split_first().ok_or(ChangelogError::EmptyDocument)?;

        let mut changes = LatestChanges::default();
        let mut skipped = 0usize;

        for line in body {
            let line = line.as_ref().trim();
            if line.is_empty() {
                skipped += 1;
                continue;
            }
            if self.config.stop_at_next_header && is_heading(line) {
                debug!(heading = line, "stopping at next section");
                break;
            }
            changes.push(normalize_bullet(line));
        }

        debug!(entries = changes.len(), skipped, "extracted latest changes");
        Ok(changes)
    }

    /// # Errors
    /// Returns [`ChangelogError::EmptyDocument`] when the document has no lines
    pub fn extract_document(&self, document: &ChangelogDocument) -> Result<LatestChanges> {
        self.extract_lines(document.lines()).map_err(|err| match document.path() {
            Some(path) => err.with_context(format!("Extracting from {}", path.display())),
            None => err,
        })
    }
}

/// Extracts the latest changes with the default configuration and returns them as text
///
/// # Errors
/// Returns [`ChangelogError::EmptyDocument`] when `lines` is empty
pub fn extract<S: AsRef<str>>(lines: &[S]) -> Result<String> {
    Extractor::default().extract_lines(lines).map(LatestChanges::into_text)
}
