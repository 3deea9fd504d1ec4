use url::Url;

use crate::{
    launch_env::DocumentSource, MinAppWindowOptions, MINAPP_DEFAULT_HEIGHT, MINAPP_DEFAULT_WIDTH,
};

/// Hosts whose popups are sign-in flows that must stay inside the app.
const ACCOUNT_AUTH_HOSTS: &[&str] = &["accounts.google.com"];

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavigationDecision {
    ExternalBrowser(Url),
    EmbeddedMiniApp {
        url: Url,
        options: MinAppWindowOptions,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationGuardDecision {
    Proceed,
    OpenExternally,
}

pub(crate) fn is_account_auth_host(host: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    ACCOUNT_AUTH_HOSTS
        .iter()
        .any(|auth_host| host == *auth_host || host.ends_with(&format!(".{auth_host}")))
}

pub(crate) fn classify_window_open(url: &Url) -> NavigationDecision {
    let is_auth_popup = url.host_str().map(is_account_auth_host).unwrap_or(false);
    if !is_auth_popup {
        return NavigationDecision::ExternalBrowser(url.clone());
    }

    NavigationDecision::EmbeddedMiniApp {
        url: url.clone(),
        options: MinAppWindowOptions {
            width: Some(MINAPP_DEFAULT_WIDTH),
            height: Some(MINAPP_DEFAULT_HEIGHT),
            ..MinAppWindowOptions::default()
        },
    }
}

fn is_packaged_app_url(url: &Url) -> bool {
    match url.scheme() {
        "tauri" | "asset" => true,
        "http" | "https" => url.host_str() == Some("tauri.localhost"),
        _ => false,
    }
}

/// Top-level navigations may only stay on the document the window was loaded with.
pub(crate) fn decide_navigation(
    document: &DocumentSource,
    target: &Url,
) -> NavigationGuardDecision {
    let stays_on_document = match document {
        DocumentSource::DevServer(dev_url) => target.origin() == dev_url.origin(),
        DocumentSource::Packaged(_) => is_packaged_app_url(target),
    };

    if stays_on_document || target.as_str() == "about:blank" {
        NavigationGuardDecision::Proceed
    } else {
        NavigationGuardDecision::OpenExternally
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn classify_window_open_embeds_google_sign_in() {
        for raw in [
            "https://accounts.google.com/o/oauth2/v2/auth?client_id=1",
            "https://ACCOUNTS.Google.com/signin",
            "https://eu.accounts.google.com/",
        ] {
            match classify_window_open(&url(raw)) {
                NavigationDecision::EmbeddedMiniApp { url: target, options } => {
                    assert_eq!(target, url(raw));
                    assert_eq!(options.width, Some(1000));
                    assert_eq!(options.height, Some(680));
                }
                other => panic!("expected mini-app for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn classify_window_open_sends_everything_else_to_browser() {
        for raw in [
            "https://example.com/",
            "https://google.com/accounts.google.com",
            "https://notaccounts.google.com/",
            "https://accounts.google.com.evil.test/",
            "mailto:someone@example.com",
        ] {
            assert_eq!(
                classify_window_open(&url(raw)),
                NavigationDecision::ExternalBrowser(url(raw))
            );
        }
    }

    #[test]
    fn is_account_auth_host_ignores_trailing_dot() {
        assert!(is_account_auth_host("accounts.google.com."));
        assert!(!is_account_auth_host("google.com"));
        assert!(!is_account_auth_host(""));
    }

    #[test]
    fn decide_navigation_keeps_packaged_app_document() {
        let document = DocumentSource::Packaged(PathBuf::from("index.html"));
        assert_eq!(
            decide_navigation(&document, &url("tauri://localhost/index.html#/settings")),
            NavigationGuardDecision::Proceed
        );
        assert_eq!(
            decide_navigation(&document, &url("http://tauri.localhost/")),
            NavigationGuardDecision::Proceed
        );
        assert_eq!(
            decide_navigation(&document, &url("https://example.com")),
            NavigationGuardDecision::OpenExternally
        );
    }

    #[test]
    fn decide_navigation_keeps_dev_server_origin_only() {
        let document = DocumentSource::DevServer(url("http://localhost:5173/"));
        assert_eq!(
            decide_navigation(&document, &url("http://localhost:5173/index.html")),
            NavigationGuardDecision::Proceed
        );
        assert_eq!(
            decide_navigation(&document, &url("http://localhost:8080/")),
            NavigationGuardDecision::OpenExternally
        );
        assert_eq!(
            decide_navigation(&document, &url("tauri://localhost/")),
            NavigationGuardDecision::OpenExternally
        );
    }
}
