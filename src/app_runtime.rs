use std::sync::Arc;

use tauri::Manager;

use crate::{
    app_config::JsonConfigStore, append_desktop_log, append_startup_log,
    launch_env::LaunchEnvironment, logging, main_window::MainWindowController, state_file,
    tauri_host::TauriHost, window_actions, window_state::JsonWindowStateStore,
    PlatformCapabilities, CONFIG_FILE, WINDOW_STATE_FILE,
};

pub(crate) fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            append_desktop_log("second instance launched, focusing main window");
            window_actions::show_main_window(app_handle, append_desktop_log);
        }))
        .plugin(logging::plugin())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::desktop_bridge_show_context_menu,
            crate::desktop_bridge_commands::desktop_bridge_open_minapp,
            crate::desktop_bridge_commands::desktop_bridge_open_external_url,
        ])
        .setup(|app| {
            let app_handle = app.handle().clone();
            append_startup_log("desktop process starting");

            let state_dir = state_file::resolve_state_dir(app_handle.path().app_config_dir().ok())
                .ok_or_else(|| "Unable to resolve the desktop state directory.".to_string())?;
            append_startup_log(&format!("desktop state dir: {}", state_dir.display()));

            let controller = MainWindowController::new(
                TauriHost::new(app_handle),
                Arc::new(JsonWindowStateStore::new(state_dir.join(WINDOW_STATE_FILE))),
                Arc::new(JsonConfigStore::new(state_dir.join(CONFIG_FILE))),
                PlatformCapabilities::current(),
                LaunchEnvironment::from_env(),
            );
            controller.create_main_window().map_err(|error| {
                append_startup_log(&format!("failed to create main window: {error}"));
                error
            })?;

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
