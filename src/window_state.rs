use std::{path::PathBuf, sync::Mutex};

use crate::{
    geometry::resolve_window_geometry,
    state_file::{read_json_file, write_json_file},
    GeometryDefaults, ResolvedGeometry, WindowGeometry,
};

/// Remembers the main window's geometry across restarts. `save` only updates memory; the
/// file is written by `flush` when the window closes.
pub(crate) trait WindowStateStore: Send + Sync {
    fn read(&self) -> Option<WindowGeometry>;

    fn save(&self, geometry: &WindowGeometry) -> Result<(), String>;

    fn flush(&self) -> Result<(), String>;

    fn load(&self, defaults: GeometryDefaults) -> ResolvedGeometry {
        resolve_window_geometry(self.read(), defaults)
    }
}

#[derive(Debug, Default)]
struct TrackedGeometry {
    pending: Option<WindowGeometry>,
    written: Option<WindowGeometry>,
}

#[derive(Debug)]
pub(crate) struct JsonWindowStateStore {
    path: PathBuf,
    tracked: Mutex<TrackedGeometry>,
}

impl JsonWindowStateStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            tracked: Mutex::new(TrackedGeometry::default()),
        }
    }
}

impl WindowStateStore for JsonWindowStateStore {
    fn read(&self) -> Option<WindowGeometry> {
        read_json_file(&self.path)
    }

    fn save(&self, geometry: &WindowGeometry) -> Result<(), String> {
        let mut tracked = self
            .tracked
            .lock()
            .map_err(|_| "window state lock poisoned".to_string())?;

        // A maximized window reports the screen size; keep the last normal bounds instead.
        let next = if geometry.maximized {
            WindowGeometry {
                maximized: true,
                ..tracked.pending.or_else(|| self.read()).unwrap_or_default()
            }
        } else {
            *geometry
        };

        tracked.pending = Some(next);
        Ok(())
    }

    fn flush(&self) -> Result<(), String> {
        let mut tracked = self
            .tracked
            .lock()
            .map_err(|_| "window state lock poisoned".to_string())?;

        let Some(pending) = tracked.pending else {
            return Ok(());
        };
        if tracked.written == Some(pending) {
            return Ok(());
        }

        write_json_file(&self.path, &pending)?;
        tracked.written = Some(pending);
        Ok(())
    }
}
