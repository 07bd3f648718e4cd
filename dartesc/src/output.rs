use crate::commands::RunSummary;
use crate::constants::BACKUP_SUFFIX;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Create a progress bar with file count.
///
/// In test mode, or when `hidden` is set, returns a hidden progress bar so
/// captured output stays clean.
#[must_use]
pub fn create_progress_bar(total_files: u64, hidden: bool) -> ProgressBar {
    if cfg!(test) || hidden {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("escaping...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.tick(); // Force initial draw
    pb
}

/// Print the line announcing a file a dry run would change.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_would_update(writer: &mut impl Write, path: &Path) -> std::io::Result<()> {
    writeln!(
        writer,
        "  {} {}",
        "Would update:".yellow(),
        crate::utils::normalize_display_path(path)
    )
}

/// Print the end-of-run summary.
///
/// The two plain lines are kept free of colour so scripts can match them.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_run_summary(writer: &mut impl Write, summary: &RunSummary) -> std::io::Result<()> {
    if summary.dry_run {
        writeln!(
            writer,
            "{} Scanned {} .{} files, would update {} file(s).",
            "[DRY-RUN]".yellow(),
            summary.scanned,
            summary.extension,
            summary.updated
        )?;
        return Ok(());
    }

    writeln!(
        writer,
        "Scanned {} .{} files, updated {} file(s).",
        summary.scanned, summary.extension, summary.updated
    )?;
    writeln!(
        writer,
        "Backups saved as *{BACKUP_SUFFIX} next to modified files."
    )?;
    Ok(())
}

/// Print the summary as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json(writer: &mut impl Write, summary: &RunSummary) -> anyhow::Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}
