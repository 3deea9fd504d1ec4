use std::{
    collections::HashMap,
    env,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use url::Url;

use crate::{
    app_config::ConfigStore,
    header_policy::ResponseHeaderSet,
    runtime_host::{MainWindowHandlers, MainWindowSpec, MinAppWindowSpec, RuntimeHost},
    window_state::WindowStateStore,
    WindowGeometry,
};

#[derive(Default)]
pub(crate) struct FakeHostCalls {
    pub(crate) main_windows: Vec<(MainWindowSpec, MainWindowHandlers)>,
    pub(crate) minapp_windows: Vec<MinAppWindowSpec>,
    pub(crate) opened_external: Vec<Url>,
}

/// Records every host request instead of touching a real windowing system.
#[derive(Clone, Default)]
pub(crate) struct FakeHost {
    pub(crate) calls: Arc<Mutex<FakeHostCalls>>,
    fail_construction: bool,
}

impl FakeHost {
    pub(crate) fn failing() -> Self {
        Self {
            fail_construction: true,
            ..Self::default()
        }
    }

    fn main_handlers<T>(&self, pick: impl Fn(&MainWindowHandlers) -> T) -> T {
        let calls = self.calls.lock().unwrap();
        let (_, handlers) = calls
            .main_windows
            .last()
            .expect("main window should have been built");
        pick(handlers)
    }

    /// Fires `will-navigate`; handlers are cloned out so they can call back into the host.
    pub(crate) fn fire_will_navigate(&self, url: &str) -> bool {
        let handler = self.main_handlers(|handlers| handlers.on_navigate.clone());
        handler(&Url::parse(url).unwrap())
    }

    /// Returns whether the host would be allowed to create its default popup.
    pub(crate) fn fire_window_open(&self, url: &str) -> bool {
        let handler = self.main_handlers(|handlers| handlers.on_window_open.clone());
        handler(&Url::parse(url).unwrap())
    }

    pub(crate) fn fire_geometry_changed(&self, geometry: WindowGeometry) {
        let handler = self.main_handlers(|handlers| handlers.on_geometry_changed.clone());
        handler(geometry);
    }

    pub(crate) fn fire_closed(&self) {
        let handler = self.main_handlers(|handlers| handlers.on_closed.clone());
        handler();
    }
}

impl RuntimeHost for FakeHost {
    type MainWindow = usize;
    type MinAppWindow = String;

    fn build_main_window(
        &self,
        spec: MainWindowSpec,
        handlers: MainWindowHandlers,
    ) -> Result<Self::MainWindow, String> {
        if self.fail_construction {
            return Err("window construction failed".to_string());
        }
        let mut calls = self.calls.lock().unwrap();
        calls.main_windows.push((spec, handlers));
        Ok(calls.main_windows.len() - 1)
    }

    fn build_minapp_window(&self, spec: MinAppWindowSpec) -> Result<Self::MinAppWindow, String> {
        if self.fail_construction {
            return Err("window construction failed".to_string());
        }
        let label = spec.label.clone();
        self.calls.lock().unwrap().minapp_windows.push(spec);
        Ok(label)
    }

    fn open_external(&self, url: &Url) -> Result<(), String> {
        self.calls.lock().unwrap().opened_external.push(url.clone());
        Ok(())
    }

    fn packaged_asset_path(&self, relative: &str) -> Result<PathBuf, String> {
        Ok(env::temp_dir().join("cherry-studio").join(relative))
    }
}

#[derive(Default)]
pub(crate) struct MemoryWindowStateStore {
    pub(crate) persisted: Option<WindowGeometry>,
    pub(crate) saved: Mutex<Vec<WindowGeometry>>,
    pub(crate) flushes: Mutex<usize>,
}

impl WindowStateStore for MemoryWindowStateStore {
    fn read(&self) -> Option<WindowGeometry> {
        self.persisted
    }

    fn save(&self, geometry: &WindowGeometry) -> Result<(), String> {
        self.saved.lock().unwrap().push(*geometry);
        Ok(())
    }

    fn flush(&self) -> Result<(), String> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemoryConfigStore(pub(crate) HashMap<String, String>);

impl MemoryConfigStore {
    pub(crate) fn with(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Header list that preserves the spelling each origin sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HeaderList(pub(crate) Vec<(String, String)>);

impl ResponseHeaderSet for HeaderList {
    fn header_names(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }

    fn remove_header(&mut self, name: &str) {
        self.0.retain(|(existing, _)| existing != name);
    }
}
