/// Forwards the page's `contextmenu` event to the native edit menu.
pub(crate) const CONTEXT_MENU_BRIDGE_SCRIPT: &str = r#"(function () {
  window.addEventListener(
    'contextmenu',
    function (event) {
      var internals = window.__TAURI_INTERNALS__;
      if (!internals || typeof internals.invoke !== 'function') {
        return;
      }
      event.preventDefault();
      internals.invoke('desktop_bridge_show_context_menu').catch(function () {});
    },
    true
  );
})();"#;

/// Browser arguments for WebView2 when same-origin checks are relaxed. The first flag keeps
/// the runtime's default feature set.
#[cfg(target_os = "windows")]
pub(crate) const RELAXED_ORIGIN_BROWSER_ARGS: &str =
    "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection --disable-web-security";
