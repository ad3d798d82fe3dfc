use quill::core::header::{
    Dispatch, EditorHeader, HeaderAction, HeaderHandlers, HeaderProps, Notice, Outcome, UiEvent,
};
use quill::core::layout::DeviceClass;
use quill::core::pin::StoreEvent;
use quill::core::theme::Theme;
use quill::core::title::TitleEdit;
use quill::core::view::{self, Control, HeaderContext, Labels};

// ============================================================================
// Helper Functions
// ============================================================================

/// Callback and dispatch log, in call order.
#[derive(Default)]
struct Host {
    titles: Vec<String>,
    publishes: usize,
    unpublishes: usize,
    removals: usize,
}

impl HeaderHandlers for Host {
    fn change_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn setting_click(&mut self, _event: &UiEvent) {}

    fn remove_source(&mut self) {
        self.removals += 1;
    }

    fn publish(&mut self) {
        self.publishes += 1;
    }

    fn unpublish(&mut self) {
        self.unpublishes += 1;
    }

    fn open_external(&mut self, _permalink: Option<&str>) {}
}

/// Store side kept apart from the handlers, like a real page would.
#[derive(Default)]
struct Store {
    events: Vec<StoreEvent>,
}

impl Dispatch for Store {
    fn dispatch(&mut self, event: StoreEvent) {
        self.events.push(event);
    }
}

fn props(title: &str, is_page: bool, is_draft: bool) -> HeaderProps {
    HeaderProps {
        init_title: title.to_string(),
        is_page,
        is_draft,
        pop_title: "Delete?".to_string(),
        pop_des: "Gone for good.".to_string(),
        permalink: Some("https://example.com/old".to_string()),
    }
}

fn run(
    header: &mut EditorHeader,
    props: &HeaderProps,
    host: &mut Host,
    store: &mut Store,
    actions: Vec<HeaderAction>,
) -> Vec<Outcome> {
    actions
        .into_iter()
        .map(|action| header.update(action, props, &mut *host, &mut *store))
        .collect()
}

fn controls(header: &EditorHeader, props: &HeaderProps) -> Vec<Control> {
    let ctx = HeaderContext {
        theme: Theme::Light,
        device: DeviceClass::Desktop,
    };
    view::render(&ctx, header, props, &Labels::default())
        .buttons
        .iter()
        .map(|b| b.control)
        .collect()
}

// ============================================================================
// Title editing
// ============================================================================

#[test]
fn start_edit_copies_committed_title() {
    let mut header = EditorHeader::new();
    let p = props("Old", false, true);
    run(&mut header, &p, &mut Host::default(), &mut Store::default(), vec![HeaderAction::StartEdit]);
    assert!(header.is_editing());
    assert_eq!(header.title.buffer(), "Old");
}

#[test]
fn blank_save_is_rejected() {
    let mut header = EditorHeader::new();
    let p = props("Old", false, true);
    let mut host = Host::default();
    let outcomes = run(
        &mut header,
        &p,
        &mut host,
        &mut Store::default(),
        vec![
            HeaderAction::StartEdit,
            HeaderAction::Edit(TitleEdit::SetText("   ".to_string())),
            HeaderAction::Save,
        ],
    );
    assert!(host.titles.is_empty());
    assert!(header.is_editing());
    assert_eq!(header.title.buffer(), "   ");
    assert_eq!(
        outcomes.last().and_then(|o| o.notice.clone()),
        Some(Notice::error("Title cannot be empty"))
    );
}

#[test]
fn save_commits_once() {
    let mut header = EditorHeader::new();
    let p = props("Old", false, true);
    let mut host = Host::default();
    run(
        &mut header,
        &p,
        &mut host,
        &mut Store::default(),
        vec![
            HeaderAction::StartEdit,
            HeaderAction::Edit(TitleEdit::SetText("Hello".to_string())),
            HeaderAction::Save,
        ],
    );
    assert_eq!(host.titles, vec!["Hello"]);
    assert!(!header.is_editing());
}

#[test]
fn cancel_discards_changes() {
    let mut header = EditorHeader::new();
    let p = props("Old", false, true);
    let mut host = Host::default();
    run(
        &mut header,
        &p,
        &mut host,
        &mut Store::default(),
        vec![
            HeaderAction::StartEdit,
            HeaderAction::Edit(TitleEdit::InsertStr(" and new".to_string())),
            HeaderAction::Cancel,
        ],
    );
    assert!(host.titles.is_empty());
    assert!(!header.is_editing());
    assert_eq!(header.title.buffer(), "Old");
}

// ============================================================================
// Pin
// ============================================================================

#[test]
fn double_toggle_emits_two_events() {
    let mut header = EditorHeader::new();
    let p = props("Old", false, true);
    let mut host = Host::default();
    let mut store = Store::default();
    assert!(header.is_pinned());

    run(
        &mut header,
        &p,
        &mut host,
        &mut store,
        vec![HeaderAction::TogglePin, HeaderAction::TogglePin],
    );

    assert!(header.is_pinned());
    assert_eq!(
        store.events,
        vec![StoreEvent::toolbar_pin(false), StoreEvent::toolbar_pin(true)]
    );
    assert!(host.titles.is_empty());
}

// ============================================================================
// Action bar
// ============================================================================

#[test]
fn pages_have_no_publish_controls() {
    let header = EditorHeader::new();
    for is_draft in [true, false] {
        let shown = controls(&header, &props("Page", true, is_draft));
        assert!(!shown.contains(&Control::Publish));
        assert!(!shown.contains(&Control::Unpublish));
    }
}

#[test]
fn drafts_publish() {
    let mut header = EditorHeader::new();
    let p = props("Draft", false, true);
    let shown = controls(&header, &p);
    assert!(shown.contains(&Control::Publish));
    assert!(!shown.contains(&Control::Unpublish));

    let mut host = Host::default();
    run(&mut header, &p, &mut host, &mut Store::default(), vec![HeaderAction::Publish]);
    assert_eq!(host.publishes, 1);
    assert_eq!(host.unpublishes, 0);
}

#[test]
fn button_order_is_fixed() {
    let header = EditorHeader::new();
    assert_eq!(
        controls(&header, &props("Post", false, false)),
        vec![
            Control::EditTitle,
            Control::ExternalLink,
            Control::Pin,
            Control::Settings,
            Control::Unpublish,
            Control::Delete,
        ]
    );
}

#[test]
fn delete_needs_confirmation() {
    let mut header = EditorHeader::new();
    let p = props("Post", false, false);
    let mut host = Host::default();

    run(
        &mut header,
        &p,
        &mut host,
        &mut Store::default(),
        vec![HeaderAction::RequestDelete, HeaderAction::CancelDelete],
    );
    assert_eq!(host.removals, 0);

    run(
        &mut header,
        &p,
        &mut host,
        &mut Store::default(),
        vec![HeaderAction::RequestDelete, HeaderAction::ConfirmDelete],
    );
    assert_eq!(host.removals, 1);
}
