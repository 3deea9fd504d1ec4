use std::sync::atomic::{AtomicBool, Ordering};

use tauri::{AppHandle, Manager, Runtime, WebviewWindow};

use crate::MAIN_WINDOW_LABEL;

/// Claims the one-time reveal; later page loads (reloads, in-app navigation) leave the
/// window and its focus alone.
pub fn should_reveal(revealed: &AtomicBool) -> bool {
    !revealed.swap(true, Ordering::SeqCst)
}

pub fn reveal_window<R, F>(window: &WebviewWindow<R>, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    if let Err(error) = window.show() {
        log(&format!("failed to show window {}: {error}", window.label()));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus window {}: {error}", window.label()));
    }
}

pub fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("show_main_window skipped: main window not found");
        return;
    };

    if let Ok(true) = window.is_minimized() {
        if let Err(error) = window.unminimize() {
            log(&format!("failed to unminimize main window: {error}"));
        }
    }
    reveal_window(&window, log);
}
