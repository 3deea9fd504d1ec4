use std::{
    path::PathBuf,
    sync::{atomic::AtomicBool, Arc, Mutex},
};

use tauri::{
    path::BaseDirectory,
    webview::{NewWindowResponse, PageLoadEvent, WebviewBuilder},
    window::{Color, WindowBuilder},
    AppHandle, LogicalPosition, LogicalSize, Manager, PhysicalPosition, PhysicalSize, Webview,
    WebviewUrl, WebviewWindow, WebviewWindowBuilder, Window, WindowEvent,
};
use url::Url;

use crate::{
    append_desktop_log,
    chrome::{parse_hex_color, ChromeConfig},
    context_menu::ContextMenuEntry,
    desktop_bridge::CONTEXT_MENU_BRIDGE_SCRIPT,
    external_url::open_external_url,
    launch_env::DocumentSource,
    runtime_host::{MainWindowHandlers, MainWindowSpec, MinAppWindowSpec, RuntimeHost},
    window_actions, ContentSurfaceBounds, WindowGeometry,
};

/// Edit menu shown by the main window's context-menu bridge.
#[derive(Debug, Default)]
pub(crate) struct ContextMenuState {
    pub(crate) entries: Mutex<Vec<ContextMenuEntry>>,
}

#[derive(Clone)]
pub(crate) struct TauriHost {
    app: AppHandle,
}

impl TauriHost {
    pub(crate) fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

fn overlay_color(chrome: &ChromeConfig) -> Option<Color> {
    parse_hex_color(chrome.title_bar_overlay.color).map(|(r, g, b, a)| Color(r, g, b, a))
}

/// Converts host-reported physical bounds to the logical geometry the state store keeps.
pub(crate) fn logical_geometry(
    position: PhysicalPosition<i32>,
    size: PhysicalSize<u32>,
    scale_factor: f64,
    maximized: bool,
) -> WindowGeometry {
    let position = position.to_logical::<f64>(scale_factor);
    let size = size.to_logical::<f64>(scale_factor);
    WindowGeometry {
        x: Some(position.x.round() as i32),
        y: Some(position.y.round() as i32),
        width: Some(size.width.round() as u32),
        height: Some(size.height.round() as u32),
        maximized,
    }
}

fn current_geometry(window: &WebviewWindow) -> Option<WindowGeometry> {
    // Minimized windows report off-screen bounds on some platforms.
    if window.is_minimized().unwrap_or(false) {
        return None;
    }
    let scale_factor = window.scale_factor().unwrap_or(1.0);
    let position = window.outer_position().ok()?;
    let size = window.inner_size().ok()?;
    let maximized = window.is_maximized().unwrap_or(false);
    Some(logical_geometry(position, size, scale_factor, maximized))
}

fn apply_surface_bounds(surface: &Webview, bounds: ContentSurfaceBounds) {
    let position = LogicalPosition::new(f64::from(bounds.x), f64::from(bounds.y));
    let size = LogicalSize::new(f64::from(bounds.width), f64::from(bounds.height));
    if let Err(error) = surface.set_position(position) {
        append_desktop_log(&format!("failed to move content surface: {error}"));
    }
    if let Err(error) = surface.set_size(size) {
        append_desktop_log(&format!("failed to resize content surface: {error}"));
    }
}

#[cfg(target_os = "macos")]
fn apply_vibrancy(window: &WebviewWindow) {
    use window_vibrancy::NSVisualEffectMaterial;

    if let Err(error) =
        window_vibrancy::apply_vibrancy(window, NSVisualEffectMaterial::FullScreenUI, None, None)
    {
        append_desktop_log(&format!("failed to apply window vibrancy: {error}"));
    }
}

#[cfg(not(target_os = "macos"))]
fn apply_vibrancy(_window: &WebviewWindow) {}

impl RuntimeHost for TauriHost {
    type MainWindow = WebviewWindow;
    type MinAppWindow = Window;

    fn build_main_window(
        &self,
        spec: MainWindowSpec,
        handlers: MainWindowHandlers,
    ) -> Result<Self::MainWindow, String> {
        let url = match spec.document {
            DocumentSource::DevServer(url) => WebviewUrl::External(url),
            DocumentSource::Packaged(path) => WebviewUrl::App(path),
        };

        let MainWindowHandlers {
            on_navigate,
            on_window_open,
            on_headers_received,
            on_geometry_changed,
            on_closed,
            context_menu,
            show_on_ready,
        } = handlers;

        let revealed = Arc::new(AtomicBool::new(false));
        let mut builder = WebviewWindowBuilder::new(&self.app, spec.label, url)
            .title(spec.title)
            .inner_size(f64::from(spec.geometry.width), f64::from(spec.geometry.height))
            .min_inner_size(f64::from(spec.min_size.0), f64::from(spec.min_size.1))
            .maximized(spec.geometry.maximized)
            .visible(spec.visible)
            .transparent(spec.chrome.transparent)
            .theme(Some(spec.chrome.theme.into()))
            .on_navigation(move |url: &Url| on_navigate(url))
            .on_new_window(move |url, _features| {
                if on_window_open(&url) {
                    NewWindowResponse::Allow
                } else {
                    NewWindowResponse::Deny
                }
            })
            // Only responses served by the app protocol pass through here; remote pages keep
            // their framing headers.
            .on_web_resource_request(move |_request, response| {
                on_headers_received(response.headers_mut());
            })
            .on_page_load(move |window, payload| {
                if show_on_ready
                    && matches!(payload.event(), PageLoadEvent::Finished)
                    && window_actions::should_reveal(&revealed)
                {
                    window_actions::reveal_window(&window, append_desktop_log);
                }
            });

        if let (Some(x), Some(y)) = (spec.geometry.x, spec.geometry.y) {
            builder = builder.position(f64::from(x), f64::from(y));
        }
        if !spec.chrome.transparent {
            if let Some(color) = overlay_color(&spec.chrome) {
                builder = builder.background_color(color);
            }
        }
        if spec.content_process.context_menu_bridge {
            builder = builder.initialization_script(CONTEXT_MENU_BRIDGE_SCRIPT);
        }

        #[cfg(target_os = "macos")]
        {
            let (inset_x, inset_y) = spec.chrome.traffic_light_inset;
            builder = builder
                .title_bar_style(tauri::TitleBarStyle::Overlay)
                .hidden_title(true)
                .traffic_light_position(LogicalPosition::new(inset_x, inset_y));
        }

        #[cfg(target_os = "windows")]
        {
            if !spec.content_process.same_origin_enforcement {
                builder = builder
                    .additional_browser_args(crate::desktop_bridge::RELAXED_ORIGIN_BROWSER_ARGS);
            }
        }

        let window = builder
            .build()
            .map_err(|error| format!("Failed to create main window: {error}"))?;

        if spec.chrome.vibrancy {
            apply_vibrancy(&window);
        }

        #[cfg(not(target_os = "macos"))]
        {
            if spec.auto_hide_menu_bar {
                if let Err(error) = window.remove_menu() {
                    append_desktop_log(&format!("failed to hide main window menu bar: {error}"));
                }
            }
        }

        if !self.app.manage(ContextMenuState {
            entries: Mutex::new(context_menu.clone()),
        }) {
            if let Some(state) = self.app.try_state::<ContextMenuState>() {
                if let Ok(mut entries) = state.entries.lock() {
                    *entries = context_menu;
                }
            }
        }

        let tracked = window.clone();
        window.on_window_event(move |event| match event {
            WindowEvent::Moved(_) | WindowEvent::Resized(_) => {
                if let Some(geometry) = current_geometry(&tracked) {
                    on_geometry_changed(geometry);
                }
            }
            WindowEvent::CloseRequested { .. } | WindowEvent::Destroyed => on_closed(),
            _ => {}
        });

        Ok(window)
    }

    fn build_minapp_window(&self, spec: MinAppWindowSpec) -> Result<Self::MinAppWindow, String> {
        let width = f64::from(spec.width);
        let height = f64::from(spec.height);

        let mut builder = WindowBuilder::new(&self.app, &spec.label)
            .title(&spec.title)
            .inner_size(width, height)
            .resizable(spec.resizable)
            .always_on_top(spec.always_on_top)
            .theme(Some(spec.chrome.theme.into()));

        if let Some((x, y)) = spec.position {
            builder = builder.position(f64::from(x), f64::from(y));
        }

        #[cfg(target_os = "macos")]
        {
            builder = builder
                .title_bar_style(tauri::TitleBarStyle::Overlay)
                .hidden_title(true);
        }

        let window = builder.build().map_err(|error| {
            format!("Failed to create mini-app window {}: {error}", spec.label)
        })?;

        #[cfg(not(target_os = "macos"))]
        {
            if spec.auto_hide_menu_bar {
                if let Err(error) = window.remove_menu() {
                    append_desktop_log(&format!(
                        "failed to hide menu bar of {}: {error}",
                        spec.label
                    ));
                }
            }
        }

        let frame = WebviewBuilder::new(
            format!("{}-frame", spec.label),
            WebviewUrl::External(spec.wrapper_url),
        )
        .auto_resize();
        window
            .add_child(frame, LogicalPosition::new(0.0, 0.0), LogicalSize::new(width, height))
            .map_err(|error| format!("Failed to load mini-app wrapper page: {error}"))?;

        let bounds = spec.surface_bounds;
        let surface_builder = WebviewBuilder::new(
            format!("{}-content", spec.label),
            WebviewUrl::External(spec.content_url),
        );
        let surface = window
            .add_child(
                surface_builder,
                LogicalPosition::new(f64::from(bounds.x), f64::from(bounds.y)),
                LogicalSize::new(f64::from(bounds.width), f64::from(bounds.height)),
            )
            .map_err(|error| format!("Failed to create mini-app content surface: {error}"))?;

        let on_resize = spec.on_resize;
        let host = window.clone();
        window.on_window_event(move |event| {
            if let WindowEvent::Resized(size) = event {
                let scale_factor = host.scale_factor().unwrap_or(1.0);
                let logical = size.to_logical::<f64>(scale_factor);
                let bounds = on_resize(
                    logical.width.round() as u32,
                    logical.height.round() as u32,
                );
                apply_surface_bounds(&surface, bounds);
            }
        });

        Ok(window)
    }

    fn open_external(&self, url: &Url) -> Result<(), String> {
        open_external_url(url)
    }

    fn packaged_asset_path(&self, relative: &str) -> Result<PathBuf, String> {
        self.app
            .path()
            .resolve(relative, BaseDirectory::Resource)
            .map_err(|error| format!("Failed to resolve packaged asset {relative}: {error}"))
    }
}
