use crate::cli::Cli;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use changelog::{write_latest_changes, ChangelogDocument, ExtractConfig, Extractor};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads the changelog, prints the latest changes and writes them to the output file.
/// The output file is left untouched when reading or extracting fails.
pub fn execute(cli: &Cli) -> Result<()> {
    if !cli.dry_run && same_file(&cli.input, &cli.output)? {
        return Err(CliError::Other(format!(
            "Refusing to overwrite the changelog {} with its own latest changes",
            cli.input.display()
        ))
        .with_context("Choose a different --output path"));
    }

    if cli.verbose {
        ui::section_header("Latest changes");
        ui::info_message(&format!("Reading {}", cli.input.display()));
    }

    let document = ChangelogDocument::from_path(&cli.input)
        .with_context(|| "Failed to load the changelog")?;

    let config = ExtractConfig::default().with_stop_at_next_header(cli.stop_at_next_header);
    let changes = Extractor::new(config)
        .extract_document(&document)
        .with_context(|| "Failed to extract the latest changes")?;

    debug!(
        lines = document.len(),
        entries = changes.len(),
        stop_at_next_header = cli.stop_at_next_header,
        "extraction finished"
    );

    if cli.verbose {
        ui::info_message(&format!(
            "Found {} entries in {} lines",
            changes.len(),
            document.len()
        ));
        if changes.is_empty() {
            ui::warning_message("No entries found below the header line");
        }
    }

    let text = changes.as_text();
    if !cli.quiet {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
    }

    if cli.dry_run {
        info!(path = %cli.output.display(), "dry run, output file not written");
        if cli.verbose {
            ui::warning_message(&format!(
                "Dry run: {} was not written",
                cli.output.display()
            ));
        }
        return Ok(());
    }

    write_latest_changes(&cli.output, &changes)
        .with_context(|| "Failed to save the latest changes")?;

    if cli.verbose {
        ui::success_message(&format!("Wrote {}", cli.output.display()));
    }

    Ok(())
}

/// True when both paths point at the same file once `.`/`..` and symlinks are resolved.
/// The output may not exist yet, so only its parent directory has to.
fn same_file(input: &Path, output: &Path) -> io::Result<bool> {
    Ok(resolve(input)? == resolve(output)?)
}

fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    if let Ok(canonical) = fs::canonicalize(&absolute) {
        return Ok(canonical);
    }

    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = fs::canonicalize(parent) {
            return Ok(parent.join(name));
        }
    }
    Ok(absolute)
}
