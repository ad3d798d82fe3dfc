//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the header and
//! the page under it, and translates keyboard and mouse events into
//! `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input routing
//!
//! 1. Ctrl+C and resizes are handled first, whatever the mode.
//! 2. While the delete confirmation is open it gets every event.
//! 3. Clicks go to the header's hit areas. A click outside the title while it
//!    is being edited blurs the input first, like a browser focus change.
//! 4. Keys go to the title input while editing, otherwise they are shortcuts
//!    for the visible buttons.
//!
//! ## Redraw Strategy
//!
//! Draws only after an event or when a toast expires. The poll timeout is
//! short while a toast is showing so it disappears on time.

mod component;
pub mod components;
mod event;
mod style;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::header::{HeaderAction, UiEvent};
use crate::core::state::App;
use crate::core::title::TitleEdit;
use crate::core::view::Control;
use crate::tui::component::EventHandler;
use crate::tui::components::{ConfirmEvent, ConfirmPopoverState, EditorHeaderState, ToastManager};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Columns moved per horizontal scroll step of the button group.
const SCROLL_STEP: i16 = 4;

/// TUI-specific presentation state (not part of the header's logic)
pub struct TuiState {
    pub header: EditorHeaderState,
    pub confirm: ConfirmPopoverState,
    pub toasts: ToastManager,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            header: EditorHeaderState::new(),
            confirm: ConfirmPopoverState::new(),
            toasts: ToastManager::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let size = terminal.size()?;
    update(&mut app, Action::Resize(size.width));

    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.toasts.tick() {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if tui.toasts.is_empty() {
            Duration::from_millis(500)
        } else {
            Duration::from_millis(100)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Quill shutting down");
    Ok(())
}

/// Route one input event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit),
        TuiEvent::Resize(width, _) => return dispatch(app, tui, Action::Resize(width)),
        _ => {}
    }

    if app.header.is_confirming_delete() {
        return match tui.confirm.handle_event(&event) {
            Some(ConfirmEvent::Confirm) => header(app, tui, HeaderAction::ConfirmDelete),
            Some(ConfirmEvent::Cancel) => header(app, tui, HeaderAction::CancelDelete),
            None => false,
        };
    }

    match event {
        TuiEvent::MouseClick(column, row) => {
            if app.header.is_editing() && !tui.header.in_title(column, row) {
                header(app, tui, HeaderAction::TitleBlur);
            }
            match tui.header.hit_test(column, row) {
                Some(control) => header(app, tui, control.action(UiEvent::mouse(column, row))),
                None => false,
            }
        }
        TuiEvent::ScrollLeft => {
            tui.header.scroll(-SCROLL_STEP);
            false
        }
        TuiEvent::ScrollRight => {
            tui.header.scroll(SCROLL_STEP);
            false
        }
        _ if app.header.is_editing() => match title_input(event) {
            Some(action) => header(app, tui, action),
            None => false,
        },
        TuiEvent::InputChar('q') | TuiEvent::Escape => dispatch(app, tui, Action::Quit),
        TuiEvent::InputChar(c) => {
            let view = app.header_view();
            let control = match c {
                'e' => Some(Control::EditTitle),
                'o' => Some(Control::ExternalLink),
                'p' => Some(Control::Pin),
                's' => Some(Control::Settings),
                'u' if view.has(Control::Publish) => Some(Control::Publish),
                'u' => Some(Control::Unpublish),
                'd' => Some(Control::Delete),
                _ => None,
            };
            match control {
                Some(control) if view.has(control) => {
                    header(app, tui, control.action(UiEvent::key()))
                }
                _ => false,
            }
        }
        _ => false,
    }
}

/// Keys while the title input has focus.
fn title_input(event: TuiEvent) -> Option<HeaderAction> {
    let edit = match event {
        TuiEvent::InputChar(c) => TitleEdit::InsertChar(c),
        TuiEvent::Paste(text) => TitleEdit::InsertStr(text),
        TuiEvent::Backspace => TitleEdit::Backspace,
        TuiEvent::Delete => TitleEdit::Delete,
        TuiEvent::CursorLeft => TitleEdit::Left,
        TuiEvent::CursorRight => TitleEdit::Right,
        TuiEvent::CursorHome => TitleEdit::Home,
        TuiEvent::CursorEnd => TitleEdit::End,
        TuiEvent::Submit => return Some(HeaderAction::Save),
        TuiEvent::Escape => return Some(HeaderAction::Cancel),
        TuiEvent::Tab => return Some(HeaderAction::TitleBlur),
        _ => return None,
    };
    Some(HeaderAction::Edit(edit))
}

fn header(app: &mut App, tui: &mut TuiState, action: HeaderAction) -> bool {
    dispatch(app, tui, Action::Header(action))
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Notify(notice) => {
            tui.toasts.push(notice);
            false
        }
        Effect::Consumed => {
            debug!("Input consumed by header");
            false
        }
        Effect::Quit => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::header::Notice;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(140, 20)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
    }

    fn keys(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_edit_and_save_from_keyboard() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        keys(&mut app, &mut tui, "e");
        assert!(app.header.is_editing());
        handle_event(&mut app, &mut tui, TuiEvent::CursorHome);
        keys(&mut app, &mut tui, "My ");
        assert_eq!(app.host.document.title, "Draft post");

        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(!app.header.is_editing());
        assert_eq!(app.host.document.title, "My Draft post");
    }

    #[test]
    fn test_shortcuts_are_text_while_editing() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        keys(&mut app, &mut tui, "e");
        let quit = handle_event(&mut app, &mut tui, TuiEvent::InputChar('q'));
        assert!(!quit);
        assert_eq!(app.header.title.buffer(), "Draft postq");

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(!app.header.is_editing());
        assert_eq!(app.host.document.title, "Draft post");
    }

    #[test]
    fn test_empty_save_shows_toast() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        keys(&mut app, &mut tui, "e");
        for _ in 0.."Draft post".len() {
            handle_event(&mut app, &mut tui, TuiEvent::Backspace);
        }
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.header.is_editing());
        assert_eq!(
            tui.toasts.current(),
            Some(&Notice::error("Title cannot be empty"))
        );
    }

    #[test]
    fn test_hidden_controls_ignore_shortcuts() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        // Drafts have no external link
        keys(&mut app, &mut tui, "o");
        assert!(app.host.activity.is_empty());

        keys(&mut app, &mut tui, "u");
        assert!(!app.host.document.is_draft);
        keys(&mut app, &mut tui, "o");
        assert_eq!(app.host.activity.last().unwrap(), "Open: no permalink");
    }

    #[test]
    fn test_delete_flow_with_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        keys(&mut app, &mut tui, "d");
        assert!(app.header.is_confirming_delete());
        // 'q' does not quit while the confirmation is open
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')));
        keys(&mut app, &mut tui, "n");
        assert!(!app.host.document.removed);
        assert_eq!(tui.toasts.current(), Some(&Notice::error("cancel")));

        keys(&mut app, &mut tui, "dy");
        assert!(app.host.document.removed);
        assert_eq!(tui.toasts.current(), Some(&Notice::info("ok")));
    }

    #[test]
    fn test_click_buttons() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);

        let pin = tui.header.area_of(Control::Pin).unwrap();
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(pin.x, pin.y));
        assert!(!app.header.is_pinned());
        assert_eq!(app.store.vditor_toolbar_pin, Some(false));

        let settings = tui.header.area_of(Control::Settings).unwrap();
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(settings.x, settings.y));
        assert!(app.host.settings_open);
    }

    #[test]
    fn test_click_outside_title_blurs() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        keys(&mut app, &mut tui, "e");
        draw(&app, &mut tui);
        let save = tui.header.area_of(Control::SaveTitle).unwrap();
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(save.x, save.y));

        assert_eq!(
            app.host.activity,
            vec!["Title input lost focus", "Title changed to \"Draft post\""]
        );
        assert!(!app.header.is_editing());
    }

    #[test]
    fn test_click_confirm_popover() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);

        let delete = tui.header.area_of(Control::Delete).unwrap();
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(delete.x, delete.y));
        assert!(app.header.is_confirming_delete());

        // Click somewhere in the body: cancel
        draw(&app, &mut tui);
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(0, 15));
        assert!(!app.header.is_confirming_delete());
        assert!(!app.host.document.removed);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));
    }

    #[test]
    fn test_resize_switches_layout() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::Resize(50, 20));
        assert!(app.device.is_mobile());
    }
}
