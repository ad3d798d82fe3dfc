//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{CliOverrides, QuillConfig, resolve};
use crate::core::header::{Dispatch, HeaderHandlers, UiEvent};
use crate::core::pin::StoreEvent;
use crate::core::state::App;

/// A callback invocation seen by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ChangeTitle(String),
    TitleBlur,
    SettingClick(UiEvent),
    RemoveSource,
    Publish,
    Unpublish,
    OpenExternal(Option<String>),
}

/// Records every callback and store dispatch, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub dispatched: Vec<StoreEvent>,
}

impl HeaderHandlers for Recorder {
    fn change_title(&mut self, title: &str) {
        self.calls.push(Call::ChangeTitle(title.to_string()));
    }

    fn title_blur(&mut self) {
        self.calls.push(Call::TitleBlur);
    }

    fn setting_click(&mut self, event: &UiEvent) {
        self.calls.push(Call::SettingClick(event.clone()));
    }

    fn remove_source(&mut self) {
        self.calls.push(Call::RemoveSource);
    }

    fn publish(&mut self) {
        self.calls.push(Call::Publish);
    }

    fn unpublish(&mut self) {
        self.calls.push(Call::Unpublish);
    }

    fn open_external(&mut self, permalink: Option<&str>) {
        self.calls.push(Call::OpenExternal(permalink.map(str::to_string)));
    }
}

impl Dispatch for Recorder {
    fn dispatch(&mut self, event: StoreEvent) {
        self.dispatched.push(event);
    }
}

/// Creates a test App on a draft post with default config.
pub fn test_app() -> App {
    let cli = CliOverrides {
        title: Some("Draft post".to_string()),
        is_draft: true,
        ..Default::default()
    };
    let mut config = resolve(&QuillConfig::default(), &cli);
    // Keep tests independent of QUILL_THEME in the environment
    config.theme = Default::default();
    App::from_config(&config)
}
