use std::path::PathBuf;

use serde_json::Value;

use crate::state_file::read_json_object;

/// Read access to the app's user configuration (`theme`, `language`, ...).
pub(crate) trait ConfigStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone)]
pub(crate) struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigStore for JsonConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        match read_json_object(&self.path)?.remove(key)? {
            Value::String(value) => Some(value),
            _ => None,
        }
    }
}
