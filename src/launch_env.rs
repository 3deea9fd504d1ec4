use std::{env, path::PathBuf};

use url::Url;

use crate::{DEV_MODE_ENV, MAIN_DOCUMENT_PATH, RENDERER_URL_ENV};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DocumentSource {
    DevServer(Url),
    Packaged(PathBuf),
}

/// Environment signals read once when the main window is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LaunchEnvironment {
    pub(crate) dev_mode: bool,
    pub(crate) renderer_url: Option<String>,
}

impl LaunchEnvironment {
    pub(crate) fn from_env() -> Self {
        let dev_mode = cfg!(debug_assertions)
            || env::var(DEV_MODE_ENV)
                .map(|value| value.trim() == "1")
                .unwrap_or(false);
        let renderer_url = env::var(RENDERER_URL_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            dev_mode,
            renderer_url,
        }
    }

    pub(crate) fn main_document<F>(&self, log: F) -> DocumentSource
    where
        F: Fn(&str),
    {
        let packaged = DocumentSource::Packaged(PathBuf::from(MAIN_DOCUMENT_PATH));
        if !self.dev_mode {
            return packaged;
        }
        let Some(raw_url) = self.renderer_url.as_deref() else {
            return packaged;
        };

        match Url::parse(raw_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DocumentSource::DevServer(url),
            Ok(url) => {
                log(&format!(
                    "ignoring {RENDERER_URL_ENV} with unsupported scheme '{}'",
                    url.scheme()
                ));
                packaged
            }
            Err(error) => {
                log(&format!("ignoring invalid {RENDERER_URL_ENV}: {error}"));
                packaged
            }
        }
    }
}
