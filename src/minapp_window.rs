use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{
    chrome::minapp_chrome_config,
    geometry::content_surface_bounds,
    query_params::file_url_with_query,
    runtime_host::{MinAppWindowSpec, RuntimeHost},
    ContentSurfaceBounds, MinAppRequest, MINAPP_DEFAULT_HEIGHT, MINAPP_DEFAULT_WIDTH,
    MINAPP_HEADER_HEIGHT, MINAPP_WINDOW_LABEL_PREFIX, MINAPP_WRAPPER_PATH, PRODUCT_NAME,
};

static NEXT_MINAPP_ID: AtomicU64 = AtomicU64::new(1);

fn next_minapp_label() -> String {
    format!(
        "{MINAPP_WINDOW_LABEL_PREFIX}-{}",
        NEXT_MINAPP_ID.fetch_add(1, Ordering::Relaxed)
    )
}

/// Runs on every host resize; the surface must track the frame without lag.
pub(crate) fn handle_minapp_resize(host_width: u32, host_height: u32) -> ContentSurfaceBounds {
    content_surface_bounds(host_width, host_height, MINAPP_HEADER_HEIGHT)
}

pub(crate) struct MinAppWindowController<H> {
    host: H,
}

impl<H: RuntimeHost> MinAppWindowController<H> {
    pub(crate) fn new(host: H) -> Self {
        Self { host }
    }

    pub(crate) fn create_minapp_window(
        &self,
        request: MinAppRequest,
    ) -> Result<H::MinAppWindow, String> {
        let options = request.window_options.unwrap_or_default();
        let width = options
            .width
            .filter(|width| *width > 0)
            .unwrap_or(MINAPP_DEFAULT_WIDTH);
        let height = options
            .height
            .filter(|height| *height > 0)
            .unwrap_or(MINAPP_DEFAULT_HEIGHT);
        let title = options
            .title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| PRODUCT_NAME.to_string());

        let wrapper_page = self.host.packaged_asset_path(MINAPP_WRAPPER_PATH)?;
        let wrapper_url = file_url_with_query(&wrapper_page, [("title", title.as_str())])?;

        let spec = MinAppWindowSpec {
            label: next_minapp_label(),
            title,
            width,
            height,
            position: options.x.zip(options.y),
            resizable: options.resizable.unwrap_or(true),
            always_on_top: options.always_on_top.unwrap_or(true),
            auto_hide_menu_bar: true,
            chrome: minapp_chrome_config(),
            wrapper_url,
            content_url: request.url,
            surface_bounds: handle_minapp_resize(width, height),
            on_resize: Arc::new(handle_minapp_resize),
        };

        crate::append_desktop_log(&format!(
            "creating mini-app window {} for {}",
            spec.label, spec.content_url
        ));
        self.host.build_minapp_window(spec)
    }
}
