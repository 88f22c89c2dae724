use changelog::{DEFAULT_CHANGELOG_FILE, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "latest-changes")]
#[command(
    author,
    version,
    about = "Extract the latest entries of a changelog as a bullet list for release notes"
)]
pub struct Cli {
    /// Changelog to read; the first line is treated as the section header
    #[clap(short, long, default_value = DEFAULT_CHANGELOG_FILE)]
    pub input: PathBuf,

    /// File the extracted bullet list is written to (overwritten on every run)
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Only take entries up to the next markdown heading
    #[clap(long, default_value_t = false)]
    pub stop_at_next_header: bool,

    /// Print the changes without writing the output file
    #[clap(long, default_value_t = false)]
    pub dry_run: bool,

    /// Do not print the changes to standard output
    #[clap(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_file_names() {
        let cli = Cli::try_parse_from(["latest-changes"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("changelog.txt"));
        assert_eq!(cli.output, PathBuf::from("latest_changes"));
        assert!(!cli.stop_at_next_header);
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "latest-changes",
            "-i",
            "CHANGES.txt",
            "--output",
            "notes/latest",
            "--stop-at-next-header",
            "--dry-run",
            "-q",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("CHANGES.txt"));
        assert_eq!(cli.output, PathBuf::from("notes/latest"));
        assert!(cli.stop_at_next_header);
        assert!(cli.dry_run);
        assert!(cli.quiet);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["latest-changes", "changelog.txt"]).is_err());
    }
}
