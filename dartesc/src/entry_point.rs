use crate::cli::Cli;
use crate::commands::{run_escape, EscapeOptions};
use crate::config::Config;
use crate::constants::DEFAULT_EXTENSION;
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Merge command-line flags over file configuration.
///
/// Flags win for scalar settings; exclusion lists from both sources are combined.
#[must_use]
pub fn resolve_options(cli: &Cli, config: &Config) -> EscapeOptions {
    let file = &config.dartesc;

    let extension = cli
        .extension
        .clone()
        .or_else(|| file.extension.clone())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_owned());

    let mut exclude = file.exclude_folders.clone().unwrap_or_default();
    exclude.extend(cli.exclude.iter().cloned());

    EscapeOptions {
        extension,
        exclude,
        respect_gitignore: cli.respect_gitignore || file.respect_gitignore.unwrap_or(false),
        dry_run: cli.dry_run,
        verbose: cli.output.verbose,
        json: cli.output.json,
    }
}

/// Runs dartesc with the given arguments.
///
/// # Errors
///
/// Returns an error if a file cannot be read, decoded, or written.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run dartesc with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if a file cannot be read, decoded, or written.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["dartesc".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let root = cli_var.root.clone().unwrap_or_else(|| PathBuf::from("."));
    if !root.exists() {
        eprintln!(
            "Error: The file or directory '{}' does not exist.",
            root.display()
        );
        return Ok(1);
    }

    let config = Config::load_from_path(&root);
    let options = resolve_options(&cli_var, &config);

    if options.verbose && !options.json {
        log_run_header(&root, &config, &options);
    }

    run_escape(&root, &options, &mut *writer)?;
    writer.flush()?;
    Ok(0)
}

fn log_run_header(root: &Path, config: &Config, options: &EscapeOptions) {
    eprintln!("[VERBOSE] dartesc v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("[VERBOSE] Root: {}", root.display());
    match &config.config_file_path {
        Some(path) => eprintln!("[VERBOSE] Config: {}", path.display()),
        None => eprintln!("[VERBOSE] Config: defaults"),
    }
    eprintln!("[VERBOSE] Extension: .{}", options.extension);
    eprintln!("[VERBOSE] Excludes: {:?}", options.exclude);
    if options.dry_run {
        eprintln!("[VERBOSE] Dry run: no files will be written");
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DartescConfig;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dartesc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let options = resolve_options(&parse(&[]), &Config::default());
        assert_eq!(options.extension, "dart");
        assert!(options.exclude.is_empty());
        assert!(!options.respect_gitignore);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            dartesc: DartescConfig {
                extension: Some("kt".to_owned()),
                exclude_folders: Some(vec!["build".to_owned()]),
                respect_gitignore: Some(true),
            },
            config_file_path: None,
        };
        let options = resolve_options(
            &parse(&["lib", "--ext", "dart", "--exclude", "gen", "--dry-run"]),
            &config,
        );
        assert_eq!(options.extension, "dart");
        assert_eq!(options.exclude, vec!["build".to_owned(), "gen".to_owned()]);
        assert!(options.respect_gitignore);
        assert!(options.dry_run);
    }

    #[test]
    fn test_config_extension_used_when_flag_absent() {
        let config = Config {
            dartesc: DartescConfig {
                extension: Some("kt".to_owned()),
                ..DartescConfig::default()
            },
            config_file_path: None,
        };
        assert_eq!(resolve_options(&parse(&[]), &config).extension, "kt");
    }

    #[test]
    fn test_root_is_optional_positional() {
        assert!(parse(&[]).root.is_none());
        assert_eq!(parse(&["app"]).root, Some(PathBuf::from("app")));
    }

    #[test]
    fn test_unknown_flag_exits_one() {
        let mut out = Vec::<u8>::new();
        let code = run_with_args_to(vec!["--bogus".to_owned()], &mut out).unwrap();
        assert_eq!(code, 1);
    }
}
