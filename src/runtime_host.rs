use std::{path::PathBuf, sync::Arc};

use url::Url;

use crate::{
    chrome::ChromeConfig, context_menu::ContextMenuEntry, header_policy::ResponseHeaderSet,
    launch_env::DocumentSource, ContentSurfaceBounds, ResolvedGeometry, WindowGeometry,
};

/// Returns `true` to let the navigation proceed.
pub(crate) type NavigationHandler = Arc<dyn Fn(&Url) -> bool + Send + Sync>;
/// Returns `true` only if the host may create its own default popup window.
pub(crate) type WindowOpenHandler = Arc<dyn Fn(&Url) -> bool + Send + Sync>;
pub(crate) type GeometryHandler = Arc<dyn Fn(WindowGeometry) + Send + Sync>;
pub(crate) type CloseHandler = Arc<dyn Fn() + Send + Sync>;
/// Maps a new logical host size to the content surface bounds.
pub(crate) type ResizeHandler = Arc<dyn Fn(u32, u32) -> ContentSurfaceBounds + Send + Sync>;
pub(crate) type HeaderFilter = fn(&mut dyn ResponseHeaderSet);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContentProcessConfig {
    pub(crate) same_origin_enforcement: bool,
    pub(crate) context_menu_bridge: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MainWindowSpec {
    pub(crate) label: &'static str,
    pub(crate) title: &'static str,
    pub(crate) geometry: ResolvedGeometry,
    pub(crate) min_size: (u32, u32),
    pub(crate) visible: bool,
    pub(crate) auto_hide_menu_bar: bool,
    pub(crate) chrome: ChromeConfig,
    pub(crate) content_process: ContentProcessConfig,
    pub(crate) document: DocumentSource,
}

/// Event handlers installed on the main window. The host invokes each one per event.
pub(crate) struct MainWindowHandlers {
    pub(crate) on_navigate: NavigationHandler,
    pub(crate) on_window_open: WindowOpenHandler,
    pub(crate) on_headers_received: HeaderFilter,
    pub(crate) on_geometry_changed: GeometryHandler,
    pub(crate) on_closed: CloseHandler,
    pub(crate) context_menu: Vec<ContextMenuEntry>,
    pub(crate) show_on_ready: bool,
}

pub(crate) struct MinAppWindowSpec {
    pub(crate) label: String,
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) position: Option<(i32, i32)>,
    pub(crate) resizable: bool,
    pub(crate) always_on_top: bool,
    pub(crate) auto_hide_menu_bar: bool,
    pub(crate) chrome: ChromeConfig,
    pub(crate) wrapper_url: Url,
    pub(crate) content_url: Url,
    pub(crate) surface_bounds: ContentSurfaceBounds,
    pub(crate) on_resize: ResizeHandler,
}

/// Window primitives, process shell integration and packaged asset lookup.
pub(crate) trait RuntimeHost: Clone + Send + Sync + 'static {
    type MainWindow;
    type MinAppWindow;

    fn build_main_window(
        &self,
        spec: MainWindowSpec,
        handlers: MainWindowHandlers,
    ) -> Result<Self::MainWindow, String>;

    fn build_minapp_window(&self, spec: MinAppWindowSpec) -> Result<Self::MinAppWindow, String>;

    fn open_external(&self, url: &Url) -> Result<(), String>;

    fn packaged_asset_path(&self, relative: &str) -> Result<PathBuf, String>;
}
