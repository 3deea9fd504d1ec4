use std::sync::Arc;

use url::Url;

use crate::{
    app_config::ConfigStore,
    append_desktop_log, append_startup_log,
    chrome::{chrome_config, Theme},
    context_menu::context_menu_entries,
    header_policy::sanitize_response_headers,
    launch_env::{DocumentSource, LaunchEnvironment},
    minapp_window::MinAppWindowController,
    navigation_policy::{
        classify_window_open, decide_navigation, NavigationDecision, NavigationGuardDecision,
    },
    runtime_host::{ContentProcessConfig, MainWindowHandlers, MainWindowSpec, RuntimeHost},
    shell_locale::{resolve_shell_locale, shell_texts_for_locale},
    window_state::WindowStateStore,
    GeometryDefaults, MinAppRequest, PlatformCapabilities, WindowGeometry, CONFIG_KEY_LANGUAGE,
    CONFIG_KEY_THEME, DEFAULT_SHELL_LOCALE, MAIN_WINDOW_DEFAULT_HEIGHT, MAIN_WINDOW_DEFAULT_WIDTH,
    MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_HEIGHT, MAIN_WINDOW_MIN_WIDTH, PRODUCT_NAME,
};

pub(crate) const MAIN_WINDOW_GEOMETRY_DEFAULTS: GeometryDefaults = GeometryDefaults {
    width: MAIN_WINDOW_DEFAULT_WIDTH,
    height: MAIN_WINDOW_DEFAULT_HEIGHT,
    min_width: MAIN_WINDOW_MIN_WIDTH,
    min_height: MAIN_WINDOW_MIN_HEIGHT,
};

/// Cancels navigations that leave the loaded document and hands them to the OS browser.
pub(crate) fn handle_will_navigate<H: RuntimeHost>(
    host: &H,
    document: &DocumentSource,
    target: &Url,
) -> bool {
    match decide_navigation(document, target) {
        NavigationGuardDecision::Proceed => true,
        NavigationGuardDecision::OpenExternally => {
            if let Err(error) = host.open_external(target) {
                append_desktop_log(&format!(
                    "failed to open navigation target {target} externally: {error}"
                ));
            }
            false
        }
    }
}

/// Routes a popup request. The host's default popup is always suppressed, so whatever
/// window appears comes from here.
pub(crate) fn handle_window_open<H: RuntimeHost>(host: &H, target: &Url) -> NavigationDecision {
    let decision = classify_window_open(target);
    match &decision {
        NavigationDecision::EmbeddedMiniApp { url, options } => {
            let request = MinAppRequest {
                url: url.clone(),
                window_options: Some(options.clone()),
            };
            let controller = MinAppWindowController::new(host.clone());
            if let Err(error) = controller.create_minapp_window(request) {
                append_desktop_log(&format!("failed to open mini-app for {url}: {error}"));
            }
        }
        NavigationDecision::ExternalBrowser(url) => {
            if let Err(error) = host.open_external(url) {
                append_desktop_log(&format!("failed to open popup {url} externally: {error}"));
            }
        }
    }
    decision
}

pub(crate) struct MainWindowController<H> {
    host: H,
    state_store: Arc<dyn WindowStateStore>,
    config_store: Arc<dyn ConfigStore>,
    capabilities: PlatformCapabilities,
    environment: LaunchEnvironment,
}

impl<H: RuntimeHost> MainWindowController<H> {
    pub(crate) fn new(
        host: H,
        state_store: Arc<dyn WindowStateStore>,
        config_store: Arc<dyn ConfigStore>,
        capabilities: PlatformCapabilities,
        environment: LaunchEnvironment,
    ) -> Self {
        Self {
            host,
            state_store,
            config_store,
            capabilities,
            environment,
        }
    }

    pub(crate) fn create_main_window(&self) -> Result<H::MainWindow, String> {
        let geometry = self.state_store.load(MAIN_WINDOW_GEOMETRY_DEFAULTS);
        let theme = Theme::from_config_value(self.config_store.get(CONFIG_KEY_THEME).as_deref());
        let chrome = chrome_config(theme, self.capabilities);
        let document = self.environment.main_document(append_startup_log);

        let locale = resolve_shell_locale(
            DEFAULT_SHELL_LOCALE,
            self.config_store.get(CONFIG_KEY_LANGUAGE).as_deref(),
        );
        let context_menu =
            context_menu_entries(shell_texts_for_locale(locale), self.capabilities.mac_shortcuts);

        let spec = MainWindowSpec {
            label: MAIN_WINDOW_LABEL,
            title: PRODUCT_NAME,
            geometry,
            min_size: (MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_MIN_HEIGHT),
            visible: true,
            auto_hide_menu_bar: true,
            chrome,
            content_process: ContentProcessConfig {
                same_origin_enforcement: false,
                context_menu_bridge: true,
            },
            document: document.clone(),
        };

        let navigate_host = self.host.clone();
        let popup_host = self.host.clone();
        let state_store = Arc::clone(&self.state_store);
        let closing_store = Arc::clone(&self.state_store);
        let handlers = MainWindowHandlers {
            on_navigate: Arc::new(move |target: &Url| {
                handle_will_navigate(&navigate_host, &document, target)
            }),
            on_window_open: Arc::new(move |target: &Url| {
                handle_window_open(&popup_host, target);
                false
            }),
            on_headers_received: sanitize_response_headers,
            on_geometry_changed: Arc::new(move |geometry: WindowGeometry| {
                if let Err(error) = state_store.save(&geometry) {
                    append_desktop_log(&format!("failed to persist window geometry: {error}"));
                }
            }),
            on_closed: Arc::new(move || {
                if let Err(error) = closing_store.flush() {
                    append_desktop_log(&format!("failed to write window geometry: {error}"));
                }
            }),
            context_menu,
            show_on_ready: true,
        };

        append_startup_log(&format!(
            "creating main window: {}x{} theme={:?} locale={}",
            geometry.width, geometry.height, theme, locale
        ));
        self.host.build_main_window(spec, handlers)
    }
}
