use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::STATE_DIR_ENV;

/// Directory holding the shell's JSON state files. The environment override wins over the
/// platform config directory.
pub(crate) fn resolve_state_dir(platform_config_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Ok(root) = env::var(STATE_DIR_ENV) {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    platform_config_dir
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

pub(crate) fn read_json_object(path: &Path) -> Option<Map<String, Value>> {
    match read_json_file::<Value>(path)? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

pub(crate) fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create state directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let serialized = serde_json::to_string_pretty(value)
        .map_err(|error| format!("Failed to serialize {}: {}", path.display(), error))?;
    fs::write(path, serialized)
        .map_err(|error| format!("Failed to write {}: {}", path.display(), error))
}
