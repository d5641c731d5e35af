use std::{io, path::PathBuf};

pub enum AppError {
    ReadSettings(PathBuf, io::Error),
    WriteSettings(PathBuf, io::Error),
    DecodeSettings(PathBuf, toml::de::Error),
    EncodeSettings(toml::ser::Error),
    ReadPatch(io::Error),
    DecodePatch(serde_json::Error),
    EncodeOutput(serde_json::Error),
}

impl AppError {
    #[inline]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::ReadSettings(..) => "read_settings",
            Self::WriteSettings(..) => "write_settings",
            Self::DecodeSettings(..) => "decode_settings",
            Self::EncodeSettings(_) => "encode_settings",
            Self::ReadPatch(_) => "read_patch",
            Self::DecodePatch(_) => "decode_patch",
            Self::EncodeOutput(_) => "encode_output",
        }
    }
}

impl core::fmt::Display for AppError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ReadSettings(path, err) => {
                write!(f, "Failed to read settings from '{}': {err}", path.display())
            }
            Self::WriteSettings(path, err) => {
                write!(f, "Failed to write settings to '{}': {err}", path.display())
            }
            Self::DecodeSettings(path, err) => {
                write!(f, "Invalid settings file '{}': {err}", path.display())
            }
            Self::EncodeSettings(err) => write!(f, "Failed to encode settings: {err}"),
            Self::ReadPatch(err) => write!(f, "Failed to read patch body: {err}"),
            Self::DecodePatch(err) => write!(f, "Invalid patch body: {err}"),
            Self::EncodeOutput(err) => write!(f, "Failed to encode output: {err}"),
        }
    }
}

impl core::fmt::Debug for AppError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {self}", self.error_type())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadSettings(_, err) | Self::WriteSettings(_, err) | Self::ReadPatch(err) => {
                Some(err)
            }
            Self::DecodeSettings(_, err) => Some(err),
            Self::EncodeSettings(err) => Some(err),
            Self::DecodePatch(err) | Self::EncodeOutput(err) => Some(err),
        }
    }
}

impl From<toml::ser::Error> for AppError {
    #[inline]
    fn from(err: toml::ser::Error) -> Self { Self::EncodeSettings(err) }
}

impl From<serde_json::Error> for AppError {
    #[inline]
    fn from(err: serde_json::Error) -> Self { Self::DecodePatch(err) }
}
