//! # Application State
//!
//! The page that hosts the header. It owns the document, implements the
//! header's callback props and stands in for the shared preference store.
//!
//! ```text
//! App
//! ├── header: EditorHeader          // local header state (title edit, pin, confirm)
//! ├── host: PageHost                // document + callback implementations
//! │   ├── document: Document        // committed title, page/draft flags, permalink
//! │   ├── settings_open: bool       // settings panel visibility
//! │   └── activity: Vec<String>     // what the callbacks did, newest last
//! ├── store: PreferenceStore        // shared state written by the header
//! ├── theme: Theme                  // from config, read-only for the header
//! ├── device: DeviceClass           // detected from terminal width (or forced)
//! └── labels: Labels                // button captions
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::{debug, info};

use crate::core::config::ResolvedConfig;
use crate::core::header::{Dispatch, EditorHeader, HeaderHandlers, HeaderProps, UiEvent};
use crate::core::layout::{Breakpoints, DeviceClass};
use crate::core::pin::StoreEvent;
use crate::core::theme::Theme;
use crate::core::view::{self, HeaderContext, HeaderView, Labels};

/// Activity entries kept for display.
pub const MAX_ACTIVITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub is_page: bool,
    pub is_draft: bool,
    pub permalink: Option<String>,
    pub removed: bool,
}

/// Implements the header callbacks on top of a [`Document`].
#[derive(Debug, Clone)]
pub struct PageHost {
    pub document: Document,
    pub pop_title: String,
    pub pop_des: String,
    pub settings_open: bool,
    pub activity: Vec<String>,
}

impl PageHost {
    fn record(&mut self, entry: String) {
        debug!("Host: {}", entry);
        self.activity.push(entry);
        if self.activity.len() > MAX_ACTIVITY {
            let excess = self.activity.len() - MAX_ACTIVITY;
            self.activity.drain(..excess);
        }
    }
}

impl HeaderHandlers for PageHost {
    fn change_title(&mut self, title: &str) {
        self.document.title = title.to_string();
        self.record(format!("Title changed to \"{}\"", title));
    }

    fn title_blur(&mut self) {
        self.record("Title input lost focus".to_string());
    }

    fn setting_click(&mut self, event: &UiEvent) {
        self.settings_open = !self.settings_open;
        self.record(format!(
            "Settings {} ({:?})",
            if self.settings_open { "opened" } else { "closed" },
            event.origin
        ));
    }

    fn remove_source(&mut self) {
        self.document.removed = true;
        self.record("Document deleted".to_string());
    }

    fn publish(&mut self) {
        self.document.is_draft = false;
        self.record("Document published".to_string());
    }

    fn unpublish(&mut self) {
        self.document.is_draft = true;
        self.record("Document unpublished".to_string());
    }

    fn open_external(&mut self, permalink: Option<&str>) {
        match permalink {
            Some(link) => self.record(format!("Open {}", link)),
            None => self.record("Open: no permalink".to_string()),
        }
    }
}

/// Shared preference state. The header writes to it and never reads back.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    pub vditor_toolbar_pin: Option<bool>,
    pub history: Vec<StoreEvent>,
}

impl PreferenceStore {
    /// Dispatched events as JSON lines, oldest first.
    pub fn history_json(&self) -> Vec<String> {
        self.history
            .iter()
            .filter_map(|event| serde_json::to_string(event).ok())
            .collect()
    }
}

impl Dispatch for PreferenceStore {
    fn dispatch(&mut self, event: StoreEvent) {
        info!("Store dispatch: {}", event.kind());
        match &event {
            StoreEvent::ToolbarPinChanged(pin) => {
                self.vditor_toolbar_pin = Some(pin.vditor_toolbar_pin);
            }
        }
        self.history.push(event);
    }
}

pub struct App {
    pub header: EditorHeader,
    pub host: PageHost,
    pub store: PreferenceStore,
    pub theme: Theme,
    pub breakpoints: Breakpoints,
    /// Forced device class; `None` = follow terminal width.
    pub forced_device: Option<DeviceClass>,
    pub device: DeviceClass,
    pub labels: Labels,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            header: EditorHeader::new(),
            host: PageHost {
                document: Document {
                    title: config.title.clone(),
                    is_page: config.is_page,
                    is_draft: config.is_draft,
                    permalink: config.permalink.clone(),
                    removed: false,
                },
                pop_title: config.pop_title.clone(),
                pop_des: config.pop_des.clone(),
                settings_open: false,
                activity: Vec::new(),
            },
            store: PreferenceStore::default(),
            theme: config.theme,
            breakpoints: config.breakpoints,
            forced_device: config.device,
            device: config.device.unwrap_or(DeviceClass::Desktop),
            labels: config.labels.clone(),
        }
    }

    /// Current props for the header, derived from the document.
    pub fn props(&self) -> HeaderProps {
        let doc = &self.host.document;
        HeaderProps {
            init_title: doc.title.clone(),
            is_page: doc.is_page,
            is_draft: doc.is_draft,
            pop_title: self.host.pop_title.clone(),
            pop_des: self.host.pop_des.clone(),
            permalink: doc.permalink.clone(),
        }
    }

    pub fn context(&self) -> HeaderContext {
        HeaderContext {
            theme: self.theme,
            device: self.device,
        }
    }

    pub fn header_view(&self) -> HeaderView {
        view::render(&self.context(), &self.header, &self.props(), &self.labels)
    }
}
