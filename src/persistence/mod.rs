use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::HealthError;

const APP_NAME: &str = "health-assistant";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        ensure_dir(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// Creates `dir` if needed. Failure is logged; the caller finds out on the next write.
fn ensure_dir(dir: &Path) -> bool {
    match fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to create data directory {}: {}", dir.display(), e);
            false
        }
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), HealthError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    load_json_from_or_default(&get_data_file_path(filename))
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), HealthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    log::info!("Data saved to: {}", path.display());
    Ok(())
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, HealthError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    log::info!("Data loaded from: {}", path.display());
    Ok(data)
}

pub fn load_json_from_or_default<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> T {
    match load_json_from::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}
