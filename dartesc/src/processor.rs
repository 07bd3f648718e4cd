//! Per-file processing: decode, transform, back up, write.
//!
//! This is the only part of the library that touches the disk for a single
//! file. The text transformation itself lives in `crate::literal`.

use crate::constants::BACKUP_SUFFIX;
use crate::encoding::{decode_source, SourceEncoding};
use crate::fix::RewriteError;
use crate::literal::transform_source_counted;

use serde::Serialize;
use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Errors raised while processing one file. Any of them aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file is neither valid UTF-8 nor valid UTF-16.
    #[error("Failed to decode {} as UTF-8 or UTF-16", path.display())]
    Decode {
        /// File being decoded.
        path: PathBuf,
    },
    /// Literal replacements could not be spliced into the text.
    #[error("Failed to rewrite {}: {source}", path.display())]
    Rewrite {
        /// File being rewritten.
        path: PathBuf,
        /// Underlying rewrite error.
        #[source]
        source: RewriteError,
    },
    /// The backup or the rewritten file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// No literal needed escaping; nothing was written.
    Unchanged,
    /// The file was rewritten.
    Updated {
        /// Number of literals rewritten.
        literals: usize,
        /// Whether this run created the backup (false if one already existed).
        backup_created: bool,
    },
    /// Dry run: the file would have been rewritten.
    WouldUpdate {
        /// Number of literals that would be rewritten.
        literals: usize,
    },
}

impl FileOutcome {
    /// 1 if the file was (or would be) changed, 0 otherwise.
    #[must_use]
    pub const fn changed_count(&self) -> usize {
        match self {
            Self::Unchanged => 0,
            Self::Updated { .. } | Self::WouldUpdate { .. } => 1,
        }
    }

    /// Whether the file was (or would be) changed.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        self.changed_count() == 1
    }
}

/// Options for processing a single file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessOptions {
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Encoding the file was read with.
    pub encoding: SourceEncoding,
    /// What happened.
    pub outcome: FileOutcome,
}

/// Path of the backup sibling for `path` (the file name plus `.bak`).
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Write `content` to the backup path unless a backup already exists.
///
/// Returns whether a new backup was created.
fn write_backup_once(backup: &Path, content: &str) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(backup) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

/// Escape non-ASCII characters in the literals of one file.
///
/// The original text is saved next to the file as `<name>.bak` the first time
/// the file changes; an existing backup is never overwritten. Output is always
/// written as UTF-8.
///
/// # Errors
///
/// Returns an error if the file cannot be read, decoded, or written.
pub fn process_file(path: &Path, options: ProcessOptions) -> Result<FileReport, ProcessError> {
    let bytes = fs::read(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = decode_source(&bytes).ok_or_else(|| ProcessError::Decode {
        path: path.to_path_buf(),
    })?;

    let (transformed, literals) =
        transform_source_counted(&decoded.text).map_err(|source| ProcessError::Rewrite {
            path: path.to_path_buf(),
            source,
        })?;

    let outcome = match transformed {
        Cow::Borrowed(_) => FileOutcome::Unchanged,
        Cow::Owned(_) if options.dry_run => FileOutcome::WouldUpdate { literals },
        Cow::Owned(new_text) => {
            let backup = backup_path(path);
            let backup_created =
                write_backup_once(&backup, &decoded.text).map_err(|source| {
                    ProcessError::Write {
                        path: backup,
                        source,
                    }
                })?;
            fs::write(path, new_text).map_err(|source| ProcessError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            FileOutcome::Updated {
                literals,
                backup_created,
            }
        }
    };

    Ok(FileReport {
        encoding: decoded.encoding,
        outcome,
    })
}
