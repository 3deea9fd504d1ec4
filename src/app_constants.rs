pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MINAPP_WINDOW_LABEL_PREFIX: &str = "minapp";
pub(crate) const PRODUCT_NAME: &str = "CherryStudio";

pub(crate) const MAIN_WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub(crate) const MAIN_WINDOW_DEFAULT_HEIGHT: u32 = 670;
pub(crate) const MAIN_WINDOW_MIN_WIDTH: u32 = 1080;
pub(crate) const MAIN_WINDOW_MIN_HEIGHT: u32 = 600;

pub(crate) const MINAPP_DEFAULT_WIDTH: u32 = 1000;
pub(crate) const MINAPP_DEFAULT_HEIGHT: u32 = 680;
pub(crate) const MINAPP_HEADER_HEIGHT: u32 = 40;

pub(crate) const TRAFFIC_LIGHT_INSET: (f64, f64) = (8.0, 12.0);

pub(crate) const MAIN_DOCUMENT_PATH: &str = "index.html";
pub(crate) const MINAPP_WRAPPER_PATH: &str = "resources/minapp.html";

pub(crate) const CONFIG_FILE: &str = "config.json";
pub(crate) const WINDOW_STATE_FILE: &str = "window-state.json";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop";

pub(crate) const CONFIG_KEY_THEME: &str = "theme";
pub(crate) const CONFIG_KEY_LANGUAGE: &str = "language";

pub(crate) const DEFAULT_SHELL_LOCALE: &str = "zh-CN";

pub(crate) const DEV_MODE_ENV: &str = "CHERRY_DEV";
pub(crate) const RENDERER_URL_ENV: &str = "CHERRY_RENDERER_URL";
pub(crate) const STATE_DIR_ENV: &str = "CHERRY_DESKTOP_STATE_DIR";
pub(crate) const LOCALE_ENV: &str = "CHERRY_DESKTOP_LOCALE";
