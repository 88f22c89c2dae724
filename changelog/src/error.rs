use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting the latest changes
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write latest changes to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Changelog is empty, expected a section header on the first line")]
    EmptyDocument,

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                format!("Could not write {}: {source}", path.display())
            }
            Self::EmptyDocument => {
                "The changelog is empty. Add a header line followed by the changes".to_string()
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_context_wraps_user_message() {
        let err = ChangelogError::EmptyDocument.with_context("Extracting changes");
        assert_eq!(
            err.user_message(),
            "Extracting changes: The changelog is empty. Add a header line followed by the changes"
        );
    }

    #[test]
    fn test_read_error_mentions_path() {
        let err = ChangelogError::Read {
            path: PathBuf::from("changelog.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("changelog.txt"));
        assert!(err.user_message().starts_with("Could not read changelog.txt"));
    }
}
