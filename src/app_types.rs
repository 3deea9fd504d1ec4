use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WindowGeometry {
    #[serde(default)]
    pub(crate) x: Option<i32>,
    #[serde(default)]
    pub(crate) y: Option<i32>,
    #[serde(default)]
    pub(crate) width: Option<u32>,
    #[serde(default)]
    pub(crate) height: Option<u32>,
    #[serde(default)]
    pub(crate) maximized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GeometryDefaults {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) min_width: u32,
    pub(crate) min_height: u32,
}

/// Geometry after defaults and minimums have been applied; what the host receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedGeometry {
    pub(crate) x: Option<i32>,
    pub(crate) y: Option<i32>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) maximized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContentSurfaceBounds {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Window capabilities of the platform the process runs on, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlatformCapabilities {
    pub(crate) vibrancy: bool,
    pub(crate) transparency: bool,
    pub(crate) mac_shortcuts: bool,
}

impl PlatformCapabilities {
    pub(crate) fn current() -> Self {
        let is_macos = cfg!(target_os = "macos");
        Self {
            vibrancy: is_macos,
            transparency: is_macos,
            mac_shortcuts: is_macos,
        }
    }
}

/// Caller-tunable parts of a mini-app window. Preload wiring and surface isolation are
/// owned by the controller and deliberately have no field here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MinAppWindowOptions {
    pub(crate) title: Option<String>,
    pub(crate) width: Option<u32>,
    pub(crate) height: Option<u32>,
    pub(crate) x: Option<i32>,
    pub(crate) y: Option<i32>,
    pub(crate) resizable: Option<bool>,
    pub(crate) always_on_top: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MinAppRequest {
    pub(crate) url: Url,
    pub(crate) window_options: Option<MinAppWindowOptions>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl BridgeResult {
    pub(crate) fn success() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failure(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}
