//! Escape command: rewrite every candidate file under a root.

use crate::constants::DEFAULT_EXTENSION;
use crate::output::{create_progress_bar, print_json, print_run_summary, print_would_update};
use crate::encoding::SourceEncoding;
use crate::processor::{process_file, FileOutcome, ProcessOptions};
use crate::utils::{collect_source_files, normalize_display_path};

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Options for an escape run
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct EscapeOptions {
    /// Extension of files to scan, without the leading dot
    pub extension: String,
    /// Directory exclusion patterns
    pub exclude: Vec<String>,
    /// Honour ignore files while walking
    pub respect_gitignore: bool,
    /// Report changes without writing
    pub dry_run: bool,
    /// Verbose diagnostics on stderr
    pub verbose: bool,
    /// Emit the summary as JSON
    pub json: bool,
}

impl Default for EscapeOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_owned(),
            exclude: Vec::new(),
            respect_gitignore: false,
            dry_run: false,
            verbose: false,
            json: false,
        }
    }
}

/// What happened to one scanned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// File path, as displayed
    pub path: String,
    /// Encoding the file was read with
    pub encoding: SourceEncoding,
    /// Outcome for the file
    pub outcome: FileOutcome,
}

/// Run-level counters of an escape run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Root that was scanned, as displayed
    pub root: String,
    /// Extension that was scanned
    pub extension: String,
    /// Number of candidate files
    pub scanned: usize,
    /// Number of files changed (or that would change in a dry run)
    pub updated: usize,
    /// Number of backups created by this run
    pub backups_created: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Files changed (or that would change), as displayed
    pub updated_files: Vec<String>,
    /// Every scanned file in processing order
    pub files: Vec<FileRecord>,
}

fn describe(outcome: FileOutcome) -> String {
    match outcome {
        FileOutcome::Unchanged => "unchanged".to_owned(),
        FileOutcome::Updated {
            literals,
            backup_created,
        } => format!(
            "updated {literals} literal(s), backup {}",
            if backup_created { "created" } else { "kept" }
        ),
        FileOutcome::WouldUpdate { literals } => {
            format!("would update {literals} literal(s)")
        }
    }
}

/// Escape non-ASCII characters in string literals of every matching file
/// under `root`, then print the summary.
///
/// Files are processed one at a time; the first failure aborts the run.
///
/// # Errors
///
/// Returns an error if any file cannot be read, decoded, or written, or if
/// writing the output fails.
pub fn run_escape<W: Write>(
    root: &Path,
    options: &EscapeOptions,
    mut writer: W,
) -> Result<RunSummary> {
    let extension = options.extension.trim_start_matches('.');
    let files = collect_source_files(
        root,
        extension,
        &options.exclude,
        options.respect_gitignore,
        options.verbose,
    );

    if options.verbose {
        eprintln!(
            "[VERBOSE] Found {} .{} file(s) under {}",
            files.len(),
            extension,
            normalize_display_path(root)
        );
    }

    let pb = create_progress_bar(files.len() as u64, options.json);
    let process_options = ProcessOptions {
        dry_run: options.dry_run,
    };

    let mut updated_files = Vec::new();
    let mut records = Vec::with_capacity(files.len());
    let mut backups_created = 0;

    for path in &files {
        let report = process_file(path, process_options)?;
        let display = normalize_display_path(path);

        if let FileOutcome::Updated { backup_created, .. } = report.outcome {
            backups_created += usize::from(backup_created);
        }
        if report.outcome.is_changed() {
            if options.dry_run && !options.json {
                pb.suspend(|| print_would_update(&mut writer, path))?;
            }
            updated_files.push(display.clone());
        }

        if options.verbose {
            pb.suspend(|| {
                eprintln!(
                    "[VERBOSE] {display} ({}): {}",
                    report.encoding,
                    describe(report.outcome)
                );
            });
        }
        records.push(FileRecord {
            path: display,
            encoding: report.encoding,
            outcome: report.outcome,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = RunSummary {
        root: normalize_display_path(root),
        extension: extension.to_owned(),
        scanned: files.len(),
        updated: updated_files.len(),
        backups_created,
        dry_run: options.dry_run,
        updated_files,
        files: records,
    };

    if options.json {
        print_json(&mut writer, &summary)?;
    } else {
        print_run_summary(&mut writer, &summary)?;
    }

    Ok(summary)
}
