pub const DEFAULT_SETTINGS_FILE_PATH: &str = "settings.toml";

/// Argument meaning "read the patch body from stdin"
pub const STDIN_ARG: &str = "-";
