use tauri::{AppHandle, State, WebviewWindow};

use crate::{
    append_desktop_log, context_menu, external_url, minapp_window::MinAppWindowController,
    tauri_host::{ContextMenuState, TauriHost},
    BridgeResult, MinAppRequest, MinAppWindowOptions,
};

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_show_context_menu(
    window: WebviewWindow,
    state: State<'_, ContextMenuState>,
) -> BridgeResult {
    let entries = match state.entries.lock() {
        Ok(entries) => entries.clone(),
        Err(_) => return BridgeResult::failure("Context menu state is unavailable."),
    };

    match context_menu::popup_context_menu(&window, &entries) {
        Ok(()) => BridgeResult::success(),
        Err(error) => {
            append_desktop_log(&format!("failed to show context menu: {error}"));
            BridgeResult::failure(error)
        }
    }
}

// Must stay async: building a window inside a sync command deadlocks on Windows.
#[tauri::command]
pub(crate) async fn desktop_bridge_open_minapp(
    app_handle: AppHandle,
    url: String,
    window_options: Option<MinAppWindowOptions>,
) -> BridgeResult {
    let parsed = match external_url::parse_web_url(&url) {
        Ok(parsed) => parsed,
        Err(error) => return BridgeResult::failure(error),
    };

    let controller = MinAppWindowController::new(TauriHost::new(app_handle));
    match controller.create_minapp_window(MinAppRequest {
        url: parsed,
        window_options,
    }) {
        Ok(_) => BridgeResult::success(),
        Err(error) => {
            append_desktop_log(&format!("failed to open mini-app {url}: {error}"));
            BridgeResult::failure(error)
        }
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_open_external_url(url: String) -> BridgeResult {
    let parsed = match external_url::parse_openable_url(&url) {
        Ok(parsed) => parsed,
        Err(error) => return BridgeResult::failure(error),
    };

    match external_url::open_external_url(&parsed) {
        Ok(()) => BridgeResult::success(),
        Err(error) => BridgeResult::failure(error),
    }
}
