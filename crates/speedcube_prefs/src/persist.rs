use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};
use serde::Serialize;
use speedcube_core::Timestamp;

const PREFS_FILE_NAME: &str = "speedcube";
const PREFS_FILE_EXTENSION: &str = "yaml";

/// Returns the path to the user preferences file in the platform's config
/// directory.
pub fn prefs_file_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("", "", "Speedcube").ok_or_eyre("unable to get preferences path")?;
    let mut p = proj_dirs.config_dir().to_owned();
    p.push(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}"));
    Ok(p)
}

/// Returns a config source for the file at `path`. A missing file is not an
/// error.
pub fn user_config_source(
    path: &Path,
) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path.to_owned())
        .format(crate::PREFS_FILE_FORMAT)
        .required(false)
}

pub fn save(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    log::info!("Saved preferences to {}", path.display());
    Ok(())
}

/// Moves the preferences file at `path` aside so that it is not overwritten.
pub fn backup_prefs_file(path: &Path) {
    if !path.exists() {
        return;
    }
    let stamp = Timestamp::now().to_string().replace(':', "-");
    let backup_path = path.with_file_name(format!(
        "{PREFS_FILE_NAME}_{stamp}_bak.{PREFS_FILE_EXTENSION}"
    ));
    if std::fs::rename(path, &backup_path).is_ok() {
        log::info!(
            "Backup of old preferences stored at {}",
            backup_path.display(),
        );
    }
}
