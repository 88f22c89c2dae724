//! Extracts the entries under the top header of a plain-text changelog and
//! normalizes them into a bullet list for release notes.

pub mod config;
pub mod document;
pub mod error;
pub mod extractor;
pub mod types;
pub mod utils;

pub use config::ExtractConfig;
pub use document::{write_latest_changes, ChangelogDocument};
pub use error::ChangelogError;
pub use extractor::{extract, Extractor};
pub use types::{LatestChanges, Result};

/// Default changelog file name, relative to the working directory
pub const DEFAULT_CHANGELOG_FILE: &str = "changelog.txt";

/// Default output file name, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "latest_changes";
