use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.dartesc.toml):
  Searched from ROOT upwards. Command-line flags take precedence.

  [dartesc]
  extension = \"dart\"                      # Extension of files to scan
  exclude_folders = [\".dart_tool\", \"build\"] # Directories to skip
  respect_gitignore = false               # Honour .gitignore while walking
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output the run summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (shows every file and its encoding).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dartesc - Escape non-ASCII characters in Dart string literals as \\uXXXX",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Root directory to scan recursively (defaults to the current directory).
    pub root: Option<PathBuf>,

    /// Extension of files to scan, without the dot (default: dart).
    #[arg(long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Directories to skip (exact name or `*.suffix`). Repeatable.
    #[arg(long, alias = "exclude-folder")]
    pub exclude: Vec<String>,

    /// Skip files matched by .gitignore, .ignore and git exclude files.
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Show which files would change without writing files or backups.
    #[arg(long)]
    pub dry_run: bool,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}
