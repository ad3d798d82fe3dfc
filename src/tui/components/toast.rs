//! Toast notifications: transient messages shown on the status line.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::header::{Notice, Severity};

const TOAST_DURATION: Duration = Duration::from_secs(3);
const MAX_QUEUED: usize = 4;

struct Toast {
    notice: Notice,
    expires: Instant,
}

pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    fn push_at(&mut self, notice: Notice, now: Instant) {
        // Same message again just refreshes its timer
        self.toasts.retain(|t| t.notice != notice);
        self.toasts.push_back(Toast {
            notice,
            expires: now + TOAST_DURATION,
        });
        while self.toasts.len() > MAX_QUEUED {
            self.toasts.pop_front();
        }
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires > now);
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Newest toast, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.toasts.back().map(|t| &t.notice)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(notice) = self.current() else {
            return;
        };
        let (icon, color) = match notice.severity {
            Severity::Info => ("ℹ", Color::Cyan),
            Severity::Error => ("✖", Color::Red),
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", icon),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(notice.text.clone(), Style::default().fg(color)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
