#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_config;
mod app_constants;
mod app_runtime;
mod app_types;
mod chrome;
mod context_menu;
mod desktop_bridge;
mod desktop_bridge_commands;
mod external_url;
mod geometry;
mod header_policy;
mod launch_env;
mod logging;
mod main_window;
mod minapp_window;
mod navigation_policy;
mod query_params;
mod runtime_host;
mod shell_locale;
mod state_file;
mod tauri_host;
#[cfg(test)]
mod test_support;
mod window_actions;
mod window_state;

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    BridgeResult, ContentSurfaceBounds, GeometryDefaults, MinAppRequest, MinAppWindowOptions,
    PlatformCapabilities, ResolvedGeometry, WindowGeometry,
};
pub(crate) use logging::{append_desktop_log, append_startup_log};

fn main() {
    app_runtime::run();
}
