//! # PageBody Component
//!
//! Everything under the header: the document's current state, what the
//! header's callbacks did, and the shared store as the header left it. An
//! optional settings panel takes the right-hand side.
//!
//! Stateless: built each frame from `App`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::document::DocumentKind;
use crate::core::state::App;
use crate::tui::component::Component;

pub struct PageBody<'a> {
    pub app: &'a App,
}

impl<'a> PageBody<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn document_lines(&self) -> Vec<Line<'static>> {
        let doc = &self.app.host.document;
        let label = Style::default().fg(Color::DarkGray);
        let kind = match DocumentKind::from_flags(doc.is_page, doc.is_draft) {
            DocumentKind::Page => "page",
            DocumentKind::Draft => "draft",
            DocumentKind::Published => "published",
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Title      ", label),
                Span::raw(doc.title.clone()),
            ]),
            Line::from(vec![Span::styled("Kind       ", label), Span::raw(kind)]),
            Line::from(vec![
                Span::styled("Permalink  ", label),
                Span::raw(doc.permalink.clone().unwrap_or_else(|| "-".to_string())),
            ]),
        ];
        if doc.removed {
            lines.push(Line::from(Span::styled(
                "This document has been deleted.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        lines
    }

    fn activity_lines(&self, height: u16) -> Vec<Line<'static>> {
        let activity = &self.app.host.activity;
        if activity.is_empty() {
            return vec![Line::from(Span::styled(
                "Nothing yet.",
                Style::default().fg(Color::DarkGray),
            ))];
        }
        // Newest at the bottom, keep what fits
        let skip = activity.len().saturating_sub(height as usize);
        activity
            .iter()
            .skip(skip)
            .map(|entry| Line::from(format!("• {}", entry)))
            .collect()
    }

    fn settings_lines(&self) -> Vec<Line<'static>> {
        let app = self.app;
        let label = Style::default().fg(Color::DarkGray);
        let pin = match app.store.vditor_toolbar_pin {
            Some(true) => "pinned",
            Some(false) => "unpinned",
            None => "not set",
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Theme        ", label),
                Span::raw(app.theme.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Device       ", label),
                Span::raw(format!("{:?}", app.device).to_lowercase()),
            ]),
            Line::from(vec![
                Span::styled("Breakpoints  ", label),
                Span::raw(format!("md {} / lg {}", app.breakpoints.md, app.breakpoints.lg)),
            ]),
            Line::from(vec![Span::styled("Toolbar pin  ", label), Span::raw(pin)]),
            Line::from(""),
            Line::from(Span::styled("Store events", label)),
        ];
        lines.extend(
            app.store
                .history_json()
                .into_iter()
                .map(|json| Line::from(format!("  {}", json))),
        );
        lines
    }
}

impl Component for PageBody<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (main, side) = if self.app.host.settings_open {
            let [main, side] =
                Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(area);
            (main, Some(side))
        } else {
            (area, None)
        };

        let doc_lines = self.document_lines();
        let [doc_area, activity_area] =
            Layout::vertical([Constraint::Length(doc_lines.len() as u16 + 2), Constraint::Min(0)])
                .areas(main);

        let section = |title: &'static str| {
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title)
                .padding(Padding::horizontal(1))
        };

        frame.render_widget(
            Paragraph::new(doc_lines).block(section(" Document ")),
            doc_area,
        );

        let activity_height = activity_area.height.saturating_sub(1);
        frame.render_widget(
            Paragraph::new(self.activity_lines(activity_height)).block(section(" Activity ")),
            activity_area,
        );

        if let Some(side) = side {
            let block = Block::default()
                .borders(Borders::LEFT | Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Settings ")
                .padding(Padding::horizontal(1));
            frame.render_widget(
                Paragraph::new(self.settings_lines())
                    .block(block)
                    .wrap(Wrap { trim: false }),
                side,
            );
        }
    }
}
