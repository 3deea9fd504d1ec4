use log::LevelFilter;
use tauri::{plugin::TauriPlugin, Runtime};
use tauri_plugin_log::{Target, TargetKind};

use crate::DESKTOP_LOG_FILE;

pub(crate) fn append_desktop_log(message: &str) {
    log::info!(target: "desktop", "{message}");
}

pub(crate) fn append_startup_log(message: &str) {
    log::info!(target: "startup", "{message}");
}

/// Logs to stdout and `desktop.log` in the platform log directory.
pub(crate) fn plugin<R: Runtime>() -> TauriPlugin<R> {
    tauri_plugin_log::Builder::default()
        .level(LevelFilter::Info)
        .clear_targets()
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir {
                file_name: Some(DESKTOP_LOG_FILE.to_string()),
            }),
        ])
        .build()
}
