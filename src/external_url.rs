use std::process::{Command, Stdio};

use url::Url;

const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto"];
const WEB_SCHEMES: &[&str] = &["http", "https"];

fn parse_url_with_schemes(raw_url: &str, allowed_schemes: &[&str]) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    ensure_scheme(&parsed, allowed_schemes)?;
    Ok(parsed)
}

fn ensure_scheme(url: &Url, allowed_schemes: &[&str]) -> Result<(), String> {
    if allowed_schemes.contains(&url.scheme()) {
        return Ok(());
    }
    Err(format!(
        "Unsupported URL scheme '{}', only {} are allowed.",
        url.scheme(),
        allowed_schemes.join("/")
    ))
}

pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    parse_url_with_schemes(raw_url, EXTERNAL_SCHEMES)
}

/// Mini-apps only ever embed web pages.
pub(crate) fn parse_web_url(raw_url: &str) -> Result<Url, String> {
    parse_url_with_schemes(raw_url, WEB_SCHEMES)
}

pub(crate) fn open_external_url(url: &Url) -> Result<(), String> {
    ensure_scheme(url, EXTERNAL_SCHEMES)?;
    open_url_with_system_browser(url.as_str())
}

#[cfg(target_os = "macos")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'open': {error}"))
}

#[cfg(target_os = "windows")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("rundll32")
        .args(["url.dll,FileProtocolHandler", url])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'rundll32': {error}"))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'xdg-open': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}
