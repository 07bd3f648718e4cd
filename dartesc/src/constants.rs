/// Extension (without the leading dot) of files scanned by default.
pub const DEFAULT_EXTENSION: &str = "dart";

/// Suffix appended to a file name to form its backup sibling.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Configuration file name, searched from the scan root upwards.
pub const CONFIG_FILENAME: &str = ".dartesc.toml";

/// Markers that turn the following literal into a raw literal.
pub const RAW_PREFIXES: [u8; 2] = [b'r', b'R'];

/// Bytes that open and close a literal.
pub const QUOTES: [u8; 2] = [b'\'', b'"'];

/// Escape introducer inside a literal body.
pub const ESCAPE: u8 = b'\\';
