use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "rubiks_cube_prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";
const CRASH_REPORT_DIR_NAME: &str = "crash_reports";

/// Environment variable that overrides the preferences file location.
pub const PREFS_FILE_ENV_VAR: &str = "RUBIKS_CUBE_PREFS";

lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> = {
        let dirs = ProjectDirs::from("", "", "RubiksCube");
        if dirs.is_none() {
            log::error!("Error getting project directories");
        }
        dirs
    };
    static ref PREFS_FILE: Option<PathBuf> = prefs_file_path();
    static ref CRASH_REPORT_DIR: Option<PathBuf> = PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.data_local_dir().join(CRASH_REPORT_DIR_NAME));
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE.as_deref().ok_or_eyre("no preferences path")
}

/// Returns the directory where crash reports are written.
pub fn crash_report_dir() -> Result<&'static Path> {
    CRASH_REPORT_DIR.as_deref().ok_or_eyre("no crash report path")
}

fn prefs_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(PREFS_FILE_ENV_VAR) {
        log::info!("Using preferences file from {PREFS_FILE_ENV_VAR}");
        return Some(PathBuf::from(path));
    }
    let dirs = PROJECT_DIRS.as_ref()?;
    Some(
        dirs.config_dir()
            .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
    )
}
