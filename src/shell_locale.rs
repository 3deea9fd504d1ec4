use std::env;

use crate::LOCALE_ENV;

#[derive(Debug, Clone, Copy)]
pub struct ShellTexts {
    pub copy: &'static str,
    pub paste: &'static str,
    pub cut: &'static str,
    pub select_all: &'static str,
}

pub fn shell_texts_for_locale(locale: &str) -> ShellTexts {
    if locale == "en-US" {
        return ShellTexts {
            copy: "Copy",
            paste: "Paste",
            cut: "Cut",
            select_all: "Select All",
        };
    }

    ShellTexts {
        copy: "复制",
        paste: "粘贴",
        cut: "剪切",
        select_all: "全选",
    }
}

/// Resolves the shell locale from the app's configured language, then the process
/// environment, then `default_shell_locale`.
pub fn resolve_shell_locale(
    default_shell_locale: &'static str,
    configured_language: Option<&str>,
) -> &'static str {
    if let Some(locale) = configured_language.and_then(normalize_shell_locale) {
        return locale;
    }

    for env_key in [LOCALE_ENV, "LC_ALL", "LANG"] {
        if let Ok(value) = env::var(env_key) {
            if let Some(locale) = normalize_shell_locale(&value) {
                return locale;
            }
        }
    }

    default_shell_locale
}

pub(crate) fn normalize_shell_locale(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let lowered = raw.to_ascii_lowercase();
    if lowered.starts_with("zh") {
        return Some("zh-CN");
    }
    if lowered.starts_with("en") {
        return Some("en-US");
    }
    None
}
