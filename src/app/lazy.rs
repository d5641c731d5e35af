pub mod log;

use super::constant::DEFAULT_SETTINGS_FILE_PATH;
use crate::common::utils::parse_from_env;
use std::{path::PathBuf, sync::LazyLock};

/// Settings file to patch, read from environment variable "SETTINGS_FILE_PATH"
pub static SETTINGS_FILE_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    PathBuf::from(&*parse_from_env("SETTINGS_FILE_PATH", DEFAULT_SETTINGS_FILE_PATH))
});

/// Print the patched settings without writing them back
pub static DRY_RUN: LazyLock<bool> = LazyLock::new(|| parse_from_env("DRY_RUN", false));
