//! # Toolbar Pin
//!
//! Local pin flag plus the preference-change message it emits. The header
//! never reads the shared value back: it starts pinned and only writes.

use serde::{Deserialize, Serialize};

pub const TOGGLE_TOOLBAR_PIN: &str = "toggle-vditor-toolbar-pin";

/// Preference-change message broadcast to shared state on every toggle.
///
/// Serializes as
/// `{"type":"toggle-vditor-toolbar-pin","payload":{"vditorToolbarPin":true}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum StoreEvent {
    #[serde(rename = "toggle-vditor-toolbar-pin")]
    ToolbarPinChanged(ToolbarPin),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarPin {
    pub vditor_toolbar_pin: bool,
}

impl StoreEvent {
    pub fn toolbar_pin(pinned: bool) -> Self {
        StoreEvent::ToolbarPinChanged(ToolbarPin {
            vditor_toolbar_pin: pinned,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreEvent::ToolbarPinChanged(_) => TOGGLE_TOOLBAR_PIN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PinToggle {
    pinned: bool,
}

impl Default for PinToggle {
    fn default() -> Self {
        // Starts pinned regardless of what shared state holds.
        Self { pinned: true }
    }
}

impl PinToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Flip the flag and return the event carrying the new value.
    pub fn toggle(&mut self) -> StoreEvent {
        self.pinned = !self.pinned;
        StoreEvent::toolbar_pin(self.pinned)
    }
}
