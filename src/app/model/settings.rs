use super::VisionAbility;
use crate::common::model::{AppError, Tri};
use serde::{Deserialize, Serialize};
use std::{
    io,
    path::{Path, PathBuf},
};

/// The persisted settings file. Keys missing on disk take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub vision_ability: VisionAbility,
    pub enable_slow_pool: bool,
    pub enable_long_context: bool,
    pub include_web_references: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_check_models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_key_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
}

/// A partial update of [`Settings`].
///
/// An absent key leaves the setting alone, `null` resets it and a value replaces it.
#[derive(Debug, PartialEq, Deserialize)]
#[cfg_attr(test, derive(Default, Serialize))]
#[serde(deny_unknown_fields)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Tri::is_undefined")]
    pub vision_ability: Tri<VisionAbility>,
    #[serde(default, skip_serializing_if = "Tri::is_undefined")]
    pub enable_slow_pool: Tri<bool>,
    #[serde(default, skip_serializing_if = "Tri::is_undefined")]
    pub enable_long_context: Tri<bool>,
    #[serde(default, skip_serializing_if = "Tri::is_undefined")]
    pub include_web_references: Tri<bool>,
    #[serde(default, skip_serializing_if = "Tri::is_undefined")]
    pub usage_check_models: Tri<Vec<String>>,
    #[serde(default, skip_serializing_if = "Tri::is_undefined")]
    pub dynamic_key_secret: Tri<String>,
    #[serde(default, skip_serializing_if = "Tri::is_undefined")]
    pub share_token: Tri<String>,
}

impl Settings {
    /// Reads the settings file. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                crate::debug!("{} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(AppError::ReadSettings(path.to_path_buf(), e)),
        };
        toml::from_str(&content).map_err(|e| AppError::DecodeSettings(path.to_path_buf(), e))
    }

    /// Writes to a sibling `.tmp` file, then renames it over `path`.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let content = toml::to_string(self)?;
        let tmp = temp_path(path);
        let result = std::fs::write(&tmp, content).and_then(|()| std::fs::rename(&tmp, path));
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result.map_err(|e| AppError::WriteSettings(path.to_path_buf(), e))
    }
}

#[inline]
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
