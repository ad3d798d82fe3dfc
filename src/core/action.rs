//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User clicks Publish? That's `Action::Header(HeaderAction::Publish)`.
//! Terminal resized? That's `Action::Resize(width)`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and returns an `Effect` for the adapter to carry out.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::header::{HeaderAction, Notice};
use crate::core::layout::DeviceClass;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Header(HeaderAction),
    /// Terminal width changed; re-run device detection.
    Resize(u16),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show a transient message.
    Notify(Notice),
    /// The header consumed the input; don't pass it on to the page.
    Consumed,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Header(action) => {
            let props = app.props();
            let outcome = app
                .header
                .update(action, &props, &mut app.host, &mut app.store);
            match outcome.notice {
                Some(notice) => Effect::Notify(notice),
                None if !outcome.propagate => Effect::Consumed,
                None => Effect::None,
            }
        }
        Action::Resize(width) => {
            if app.forced_device.is_none() {
                let detected = DeviceClass::detect(width, &app.breakpoints);
                if detected != app.device {
                    info!("Device class: {:?} (width {})", detected, width);
                    app.device = detected;
                }
            }
            Effect::None
        }
        Action::Quit => {
            debug!("Quit requested");
            Effect::Quit
        }
    }
}
