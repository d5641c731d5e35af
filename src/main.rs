extern crate alloc;

mod app;
mod common;

use app::{
    config::apply_patch,
    constant::STDIN_ARG,
    lazy::{DRY_RUN, SETTINGS_FILE_PATH},
    model::{Settings, SettingsPatch},
};
use common::model::AppError;
use std::{ffi::OsString, io::Read as _, path::Path, process::ExitCode};

fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    match run(std::env::args_os().nth(1), &SETTINGS_FILE_PATH, *DRY_RUN) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tri-patch: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Applies the patch to the settings at `path`. Writes back only when a field was
/// touched and `dry_run` is off.
fn run(patch_source: Option<OsString>, path: &Path, dry_run: bool) -> Result<(), AppError> {
    let patch = read_patch(patch_source)?;
    let mut settings = Settings::load(path)?;
    let touched = apply_patch(&mut settings, patch);
    crate::debug!("{} field(s) touched: {touched:?}", touched.len());

    let output = serde_json::to_string_pretty(&settings).map_err(AppError::EncodeOutput)?;
    println!("{output}");

    if dry_run {
        crate::debug!("dry run, {} left as is", path.display());
    } else if !touched.is_empty() {
        settings.save(path)?;
        crate::debug!("saved {}", path.display());
    }
    Ok(())
}

/// Reads the patch body from the given file, or from stdin when no path (or `-`) is given.
fn read_patch(source: Option<OsString>) -> Result<SettingsPatch, AppError> {
    let body = match source {
        Some(path) if path != STDIN_ARG => std::fs::read_to_string(&path),
        _ => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body).map(|_| body)
        }
    }
    .map_err(AppError::ReadPatch)?;
    Ok(serde_json::from_str(&body)?)
}
