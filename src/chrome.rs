use crate::{PlatformCapabilities, TRAFFIC_LIGHT_INSET};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub(crate) fn from_config_value(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl From<Theme> for tauri::Theme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => tauri::Theme::Light,
            Theme::Dark => tauri::Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TitleBarOverlay {
    pub(crate) color: &'static str,
    pub(crate) symbol_color: &'static str,
    pub(crate) height: u32,
}

pub(crate) const TITLE_BAR_OVERLAY_LIGHT: TitleBarOverlay = TitleBarOverlay {
    color: "#ffffffff",
    symbol_color: "#000000ff",
    height: 40,
};

pub(crate) const TITLE_BAR_OVERLAY_DARK: TitleBarOverlay = TitleBarOverlay {
    color: "#181818ff",
    symbol_color: "#ffffffff",
    height: 40,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChromeConfig {
    pub(crate) theme: Theme,
    pub(crate) title_bar_overlay: TitleBarOverlay,
    pub(crate) traffic_light_inset: (f64, f64),
    pub(crate) transparent: bool,
    pub(crate) vibrancy: bool,
}

pub(crate) fn chrome_config(theme: Theme, capabilities: PlatformCapabilities) -> ChromeConfig {
    let title_bar_overlay = match theme {
        Theme::Light => TITLE_BAR_OVERLAY_LIGHT,
        Theme::Dark => TITLE_BAR_OVERLAY_DARK,
    };

    ChromeConfig {
        theme,
        title_bar_overlay,
        traffic_light_inset: TRAFFIC_LIGHT_INSET,
        transparent: capabilities.transparency,
        vibrancy: capabilities.vibrancy,
    }
}

/// Mini-app windows always use the dark overlay and are never transparent.
pub(crate) fn minapp_chrome_config() -> ChromeConfig {
    ChromeConfig {
        theme: Theme::Dark,
        title_bar_overlay: TITLE_BAR_OVERLAY_DARK,
        traffic_light_inset: TRAFFIC_LIGHT_INSET,
        transparent: false,
        vibrancy: false,
    }
}

/// Parses `#rrggbb` or `#rrggbbaa` into RGBA components.
pub(crate) fn parse_hex_color(raw: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
    match hex.len() {
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 0xff)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}
