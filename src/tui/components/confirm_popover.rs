//! # Confirm Popover
//!
//! Small overlay anchored under the delete button asking for confirmation.
//!
//! ```text
//!                           ┌──────────────────────────┐
//!                           │ Delete this document?    │
//!                           │ This cannot be undone.   │
//!                           │          [ OK ] [Cancel] │
//!                           └──────────────────────────┘
//! ```
//!
//! `y` / Enter confirms, `n` / Esc cancels. Clicking OK or Cancel does the
//! same; a click anywhere else counts as cancel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::theme::ThemeStyles;
use crate::core::view::ConfirmView;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::style::color;

const OK_LABEL: &str = "[ OK ]";
const CANCEL_LABEL: &str = "[Cancel]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    Confirm,
    Cancel,
}

/// Persistent state: where the buttons were drawn last frame.
#[derive(Debug, Default)]
pub struct ConfirmPopoverState {
    ok_area: Rect,
    cancel_area: Rect,
}

impl ConfirmPopoverState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for ConfirmPopoverState {
    type Event = ConfirmEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ConfirmEvent> {
        match event {
            TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') | TuiEvent::Submit => {
                Some(ConfirmEvent::Confirm)
            }
            TuiEvent::InputChar('n') | TuiEvent::InputChar('N') | TuiEvent::Escape => {
                Some(ConfirmEvent::Cancel)
            }
            TuiEvent::MouseClick(column, row) => {
                let pos = Position::new(*column, *row);
                if self.ok_area.contains(pos) {
                    Some(ConfirmEvent::Confirm)
                } else {
                    Some(ConfirmEvent::Cancel)
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct ConfirmPopover<'a> {
    view: &'a ConfirmView,
    styles: &'a ThemeStyles,
    /// The delete button's area; the popover hangs below its right edge.
    anchor: Rect,
    state: &'a mut ConfirmPopoverState,
}

impl<'a> ConfirmPopover<'a> {
    pub fn new(
        view: &'a ConfirmView,
        styles: &'a ThemeStyles,
        anchor: Rect,
        state: &'a mut ConfirmPopoverState,
    ) -> Self {
        Self {
            view,
            styles,
            anchor,
            state,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, screen: Rect) {
        let buttons_width = (OK_LABEL.width() + 1 + CANCEL_LABEL.width()) as u16;
        let content_width = (self.view.title.width() as u16)
            .max(self.view.description.width() as u16)
            .max(buttons_width);
        let width = (content_width + 4).min(screen.width);
        let height = 5.min(screen.height);

        let right = self.anchor.right().min(screen.right());
        let x = right.saturating_sub(width).max(screen.x);
        let y = (self.anchor.bottom()).min(screen.bottom().saturating_sub(height));
        let area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, area);

        let base = Style::default()
            .fg(color(self.styles.button_fg))
            .bg(color(self.styles.background));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(color(self.styles.border_bottom)))
            .style(base);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                self.view.title.clone(),
                base.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.view.description.clone(), base)),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        if inner.height < 3 {
            self.state.ok_area = Rect::default();
            self.state.cancel_area = Rect::default();
            return;
        }
        let row = inner.y + 2;
        let cancel_x = inner.right().saturating_sub(CANCEL_LABEL.width() as u16);
        let ok_x = cancel_x.saturating_sub(OK_LABEL.width() as u16 + 1);
        self.state.ok_area = Rect::new(ok_x, row, OK_LABEL.width() as u16, 1).intersection(inner);
        self.state.cancel_area =
            Rect::new(cancel_x, row, CANCEL_LABEL.width() as u16, 1).intersection(inner);

        let ok_style = Style::default()
            .fg(color(self.styles.button_fg))
            .bg(color(self.styles.button_background))
            .add_modifier(Modifier::BOLD);
        let cancel_style = Style::default()
            .fg(color(self.styles.button_fg))
            .bg(color(self.styles.button_background));
        frame.render_widget(
            Paragraph::new(Span::styled(OK_LABEL, ok_style)).alignment(Alignment::Left),
            self.state.ok_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(CANCEL_LABEL, cancel_style)),
            self.state.cancel_area,
        );
    }
}
