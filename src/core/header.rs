//! # Editor Header
//!
//! The header's view-model: props from the parent, local state, and the
//! `update()` that turns a [`HeaderAction`] into state changes and callback
//! calls.
//!
//! ```text
//! HeaderAction ──▶ EditorHeader::update(props, handlers, store) ──▶ Outcome
//!                        │                │           │
//!                        │                │           └─ dispatch(StoreEvent)
//!                        │                └─ change_title / publish / ...
//!                        └─ TitleEditor, PinToggle, delete confirmation
//! ```
//!
//! Every real effect goes through `handlers` (the callback props) or `store`
//! (shared state). Nothing here knows how they are implemented.

use log::{debug, info, warn};

use crate::core::document::{DocumentKind, PublishControl};
use crate::core::pin::{PinToggle, StoreEvent};
use crate::core::title::{TitleEdit, TitleEditor};

/// Props handed down by the parent page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderProps {
    /// Committed title. Owned by the parent.
    pub init_title: String,
    pub is_page: bool,
    pub is_draft: bool,
    /// Delete confirmation title.
    pub pop_title: String,
    /// Delete confirmation description.
    pub pop_des: String,
    pub permalink: Option<String>,
}

impl HeaderProps {
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_flags(self.is_page, self.is_draft)
    }
}

/// Where a UI event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrigin {
    Key,
    Mouse { column: u16, row: u16 },
}

/// The input event that triggered a button, forwarded to some callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub origin: EventOrigin,
    propagation_stopped: bool,
}

impl UiEvent {
    pub fn key() -> Self {
        Self {
            origin: EventOrigin::Key,
            propagation_stopped: false,
        }
    }

    pub fn mouse(column: u16, row: u16) -> Self {
        Self {
            origin: EventOrigin::Mouse { column, row },
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Callback props. Implemented by whatever owns the document.
pub trait HeaderHandlers {
    /// Commit a new title.
    fn change_title(&mut self, title: &str);

    /// The title input lost focus. Optional.
    fn title_blur(&mut self) {}

    /// Open the settings surface.
    fn setting_click(&mut self, event: &UiEvent);

    /// Delete the document. Only called after confirmation.
    fn remove_source(&mut self);

    fn publish(&mut self);

    fn unpublish(&mut self);

    /// Open the document's external address.
    fn open_external(&mut self, permalink: Option<&str>);
}

/// Shared process-wide state. Write-only from the header's side.
pub trait Dispatch {
    fn dispatch(&mut self, event: StoreEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    StartEdit,
    Edit(TitleEdit),
    Save,
    Cancel,
    TitleBlur,
    OpenLink(UiEvent),
    TogglePin,
    OpenSettings(UiEvent),
    Publish,
    Unpublish,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Transient, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// What the host should do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    /// False when the header swallowed the input (e.g. the link button).
    pub propagate: bool,
}

impl Default for Outcome {
    fn default() -> Self {
        Self {
            notice: None,
            propagate: true,
        }
    }
}

impl Outcome {
    fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..Self::default()
        }
    }
}

/// Local header state.
#[derive(Debug, Clone, Default)]
pub struct EditorHeader {
    pub title: TitleEditor,
    pub pin: PinToggle,
    confirm_delete: bool,
}

impl EditorHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.title.is_editing()
    }

    pub fn is_pinned(&self) -> bool {
        self.pin.is_pinned()
    }

    /// Whether the delete confirmation is open.
    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    pub fn update(
        &mut self,
        action: HeaderAction,
        props: &HeaderProps,
        handlers: &mut dyn HeaderHandlers,
        store: &mut dyn Dispatch,
    ) -> Outcome {
        debug!("Header action: {:?}", action);
        let kind = props.kind();

        match action {
            HeaderAction::StartEdit => {
                if !self.title.is_editing() {
                    self.title.start_edit(&props.init_title);
                }
                Outcome::default()
            }
            HeaderAction::Edit(edit) => {
                self.title.apply(edit);
                Outcome::default()
            }
            HeaderAction::Save => {
                if !self.title.is_editing() {
                    warn!("Save ignored: title is not being edited");
                    return Outcome::default();
                }
                match self.title.save() {
                    Ok(title) => {
                        info!("Committing title: {:?}", title);
                        handlers.change_title(&title);
                        self.title.finish_edit();
                        Outcome::default()
                    }
                    Err(e) => {
                        debug!("Title rejected: {}", e);
                        Outcome::notice(Notice::error(e.to_string()))
                    }
                }
            }
            HeaderAction::Cancel => {
                if self.title.is_editing() {
                    self.title.cancel(&props.init_title);
                }
                Outcome::default()
            }
            HeaderAction::TitleBlur => {
                if self.title.is_editing() {
                    handlers.title_blur();
                }
                Outcome::default()
            }
            HeaderAction::OpenLink(mut event) => {
                if !kind.shows_external_link() {
                    warn!("Open link ignored: not available for {:?}", kind);
                    return Outcome::default();
                }
                event.stop_propagation();
                info!("Opening external link: {:?}", props.permalink);
                handlers.open_external(props.permalink.as_deref());
                Outcome {
                    notice: None,
                    propagate: !event.is_propagation_stopped(),
                }
            }
            HeaderAction::TogglePin => {
                let event = self.pin.toggle();
                info!("Toolbar pin: {}", self.pin.is_pinned());
                store.dispatch(event);
                Outcome::default()
            }
            HeaderAction::OpenSettings(event) => {
                handlers.setting_click(&event);
                Outcome::default()
            }
            HeaderAction::Publish => {
                if kind.publish_control() != Some(PublishControl::Publish) {
                    warn!("Publish ignored for {:?}", kind);
                    return Outcome::default();
                }
                info!("Publishing document");
                handlers.publish();
                Outcome::default()
            }
            HeaderAction::Unpublish => {
                if kind.publish_control() != Some(PublishControl::Unpublish) {
                    warn!("Unpublish ignored for {:?}", kind);
                    return Outcome::default();
                }
                info!("Unpublishing document");
                handlers.unpublish();
                Outcome::default()
            }
            HeaderAction::RequestDelete => {
                self.confirm_delete = true;
                Outcome::default()
            }
            HeaderAction::ConfirmDelete => {
                if !self.confirm_delete {
                    warn!("Delete confirmation without an open prompt");
                    return Outcome::default();
                }
                self.confirm_delete = false;
                info!("Delete confirmed");
                handlers.remove_source();
                Outcome::notice(Notice::info("ok"))
            }
            HeaderAction::CancelDelete => {
                if !self.confirm_delete {
                    return Outcome::default();
                }
                self.confirm_delete = false;
                debug!("Delete cancelled");
                Outcome::notice(Notice::error("cancel"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, Recorder};

    fn draft_props() -> HeaderProps {
        HeaderProps {
            init_title: "Old".to_string(),
            is_page: false,
            is_draft: true,
            pop_title: "Delete?".to_string(),
            pop_des: "This cannot be undone".to_string(),
            permalink: None,
        }
    }

    fn published_props() -> HeaderProps {
        HeaderProps {
            is_draft: false,
            permalink: Some("https://example.com/p/1".to_string()),
            ..draft_props()
        }
    }

    #[test]
    fn test_start_edit_copies_title() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::StartEdit, &props, &mut rec, &mut Recorder::default());
        assert!(header.is_editing());
        assert_eq!(header.title.buffer(), "Old");
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_save_empty_stays_editing() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::StartEdit, &props, &mut rec, &mut store);
        header.update(
            HeaderAction::Edit(TitleEdit::SetText("  ".to_string())),
            &props,
            &mut rec,
            &mut store,
        );
        let outcome = header.update(HeaderAction::Save, &props, &mut rec, &mut store);

        assert_eq!(outcome.notice, Some(Notice::error("Title cannot be empty")));
        assert!(header.is_editing());
        assert_eq!(header.title.buffer(), "  ");
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_save_commits_once() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::StartEdit, &props, &mut rec, &mut store);
        header.update(
            HeaderAction::Edit(TitleEdit::SetText("Hello".to_string())),
            &props,
            &mut rec,
            &mut store,
        );
        let outcome = header.update(HeaderAction::Save, &props, &mut rec, &mut store);

        assert_eq!(outcome, Outcome::default());
        assert_eq!(rec.calls, vec![Call::ChangeTitle("Hello".to_string())]);
        assert!(!header.is_editing());
    }

    #[test]
    fn test_save_while_viewing_is_noop() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        header.update(HeaderAction::Save, &draft_props(), &mut rec, &mut Recorder::default());
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_cancel_discards() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::StartEdit, &props, &mut rec, &mut store);
        header.update(
            HeaderAction::Edit(TitleEdit::InsertChar('!')),
            &props,
            &mut rec,
            &mut store,
        );
        header.update(HeaderAction::Cancel, &props, &mut rec, &mut store);

        assert!(!header.is_editing());
        assert_eq!(header.title.buffer(), "Old");
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_blur_only_while_editing() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::TitleBlur, &props, &mut rec, &mut store);
        assert!(rec.calls.is_empty());

        header.update(HeaderAction::StartEdit, &props, &mut rec, &mut store);
        header.update(HeaderAction::TitleBlur, &props, &mut rec, &mut store);
        assert_eq!(rec.calls, vec![Call::TitleBlur]);
        assert!(header.is_editing());
    }

    #[test]
    fn test_pin_toggle_dispatches_each_time() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::TogglePin, &props, &mut rec, &mut store);
        header.update(HeaderAction::TogglePin, &props, &mut rec, &mut store);

        assert!(header.is_pinned());
        assert_eq!(
            store.dispatched,
            vec![StoreEvent::toolbar_pin(false), StoreEvent::toolbar_pin(true)]
        );
    }

    #[test]
    fn test_open_link_stops_propagation() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let props = published_props();

        let outcome = header.update(
            HeaderAction::OpenLink(UiEvent::mouse(3, 0)),
            &props,
            &mut rec,
            &mut Recorder::default(),
        );

        assert!(!outcome.propagate);
        assert_eq!(
            rec.calls,
            vec![Call::OpenExternal(Some("https://example.com/p/1".to_string()))]
        );
    }

    #[test]
    fn test_open_link_ignored_for_draft() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let outcome = header.update(
            HeaderAction::OpenLink(UiEvent::key()),
            &draft_props(),
            &mut rec,
            &mut Recorder::default(),
        );
        assert!(outcome.propagate);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_settings_forwards_event() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        header.update(
            HeaderAction::OpenSettings(UiEvent::mouse(10, 1)),
            &draft_props(),
            &mut rec,
            &mut Recorder::default(),
        );
        assert_eq!(rec.calls, vec![Call::SettingClick(UiEvent::mouse(10, 1))]);
    }

    #[test]
    fn test_publish_only_for_drafts() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();

        header.update(HeaderAction::Publish, &draft_props(), &mut rec, &mut store);
        header.update(HeaderAction::Unpublish, &draft_props(), &mut rec, &mut store);
        assert_eq!(rec.calls, vec![Call::Publish]);

        rec.calls.clear();
        header.update(HeaderAction::Publish, &published_props(), &mut rec, &mut store);
        header.update(HeaderAction::Unpublish, &published_props(), &mut rec, &mut store);
        assert_eq!(rec.calls, vec![Call::Unpublish]);
    }

    #[test]
    fn test_pages_never_publish() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = HeaderProps {
            is_page: true,
            ..draft_props()
        };

        header.update(HeaderAction::Publish, &props, &mut rec, &mut store);
        header.update(HeaderAction::Unpublish, &props, &mut rec, &mut store);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_delete_confirm() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::RequestDelete, &props, &mut rec, &mut store);
        assert!(header.is_confirming_delete());
        assert!(rec.calls.is_empty());

        let outcome = header.update(HeaderAction::ConfirmDelete, &props, &mut rec, &mut store);
        assert_eq!(outcome.notice, Some(Notice::info("ok")));
        assert_eq!(rec.calls, vec![Call::RemoveSource]);
        assert!(!header.is_confirming_delete());

        // A stray second confirm does nothing
        header.update(HeaderAction::ConfirmDelete, &props, &mut rec, &mut store);
        assert_eq!(rec.calls.len(), 1);
    }

    #[test]
    fn test_delete_cancel() {
        let mut header = EditorHeader::new();
        let mut rec = Recorder::default();
        let mut store = Recorder::default();
        let props = draft_props();

        header.update(HeaderAction::RequestDelete, &props, &mut rec, &mut store);
        let outcome = header.update(HeaderAction::CancelDelete, &props, &mut rec, &mut store);

        assert_eq!(outcome.notice, Some(Notice::error("cancel")));
        assert!(!header.is_confirming_delete());
        assert!(rec.calls.is_empty());
    }
}
