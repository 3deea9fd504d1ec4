use crate::{ContentSurfaceBounds, GeometryDefaults, ResolvedGeometry, WindowGeometry};

pub(crate) fn resolve_window_geometry(
    persisted: Option<WindowGeometry>,
    defaults: GeometryDefaults,
) -> ResolvedGeometry {
    let persisted = persisted.unwrap_or_default();

    // A half-recorded size is treated as corrupt, not patched with one default.
    let (width, height) = match (persisted.width, persisted.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => (width, height),
        _ => (defaults.width, defaults.height),
    };

    let (x, y) = match (persisted.x, persisted.y) {
        (Some(x), Some(y)) => (Some(x), Some(y)),
        _ => (None, None),
    };

    ResolvedGeometry {
        x,
        y,
        width: width.max(defaults.min_width),
        height: height.max(defaults.min_height),
        maximized: persisted.maximized,
    }
}

/// Bounds of the embedded content region: full host width, below the header band.
pub(crate) fn content_surface_bounds(
    host_width: u32,
    host_height: u32,
    header_height: u32,
) -> ContentSurfaceBounds {
    ContentSurfaceBounds {
        x: 0,
        y: header_height,
        width: host_width,
        height: host_height.saturating_sub(header_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: GeometryDefaults = GeometryDefaults {
        width: 1080,
        height: 670,
        min_width: 1080,
        min_height: 600,
    };

    #[test]
    fn resolve_window_geometry_uses_defaults_without_persisted_state() {
        let resolved = resolve_window_geometry(None, DEFAULTS);
        assert_eq!(
            resolved,
            ResolvedGeometry {
                x: None,
                y: None,
                width: 1080,
                height: 670,
                maximized: false,
            }
        );
    }

    #[test]
    fn resolve_window_geometry_falls_back_on_partial_or_zero_size() {
        let partial = WindowGeometry {
            width: Some(1400),
            ..WindowGeometry::default()
        };
        let zero = WindowGeometry {
            width: Some(0),
            height: Some(900),
            ..WindowGeometry::default()
        };

        for persisted in [partial, zero] {
            let resolved = resolve_window_geometry(Some(persisted), DEFAULTS);
            assert_eq!((resolved.width, resolved.height), (1080, 670));
        }
    }

    #[test]
    fn resolve_window_geometry_clamps_to_minimum_size() {
        let persisted = WindowGeometry {
            x: Some(10),
            y: Some(20),
            width: Some(640),
            height: Some(480),
            maximized: false,
        };
        let resolved = resolve_window_geometry(Some(persisted), DEFAULTS);
        assert_eq!((resolved.width, resolved.height), (1080, 600));
        assert_eq!((resolved.x, resolved.y), (Some(10), Some(20)));
    }

    #[test]
    fn resolve_window_geometry_keeps_valid_persisted_state() {
        let persisted = WindowGeometry {
            x: Some(-200),
            y: Some(40),
            width: Some(1600),
            height: Some(1000),
            maximized: true,
        };
        let resolved = resolve_window_geometry(Some(persisted), DEFAULTS);
        assert_eq!(resolved.x, Some(-200));
        assert_eq!((resolved.width, resolved.height), (1600, 1000));
        assert!(resolved.maximized);
    }

    #[test]
    fn resolve_window_geometry_drops_lone_coordinate() {
        let persisted = WindowGeometry {
            x: Some(300),
            width: Some(1200),
            height: Some(700),
            ..WindowGeometry::default()
        };
        let resolved = resolve_window_geometry(Some(persisted), DEFAULTS);
        assert_eq!((resolved.x, resolved.y), (None, None));
    }

    #[test]
    fn content_surface_bounds_sits_below_header() {
        for (width, height) in [(1000, 680), (41, 41), (2560, 1440), (1, 1000)] {
            assert_eq!(
                content_surface_bounds(width, height, 40),
                ContentSurfaceBounds {
                    x: 0,
                    y: 40,
                    width,
                    height: height - 40,
                }
            );
        }
    }

    #[test]
    fn content_surface_bounds_never_underflows() {
        let bounds = content_surface_bounds(800, 30, 40);
        assert_eq!(bounds.height, 0);
        assert_eq!(bounds.y, 40);
    }
}
