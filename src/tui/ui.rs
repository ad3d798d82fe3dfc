use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::layout::ScreenClass;
use crate::core::state::App;
use crate::core::view::{Control, HeaderView};
use crate::tui::component::Component;
use crate::tui::components::{ConfirmPopover, EditorHeaderBar, PageBody};
use crate::tui::TuiState;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let view = app.header_view();
    let area = frame.area();
    let screen = ScreenClass::from_width(area.width, &app.breakpoints);
    let header_height = EditorHeaderBar::required_height(&view, screen, area.width);

    use Constraint::{Length, Min};
    let [header_area, body_area, status_area] =
        Layout::vertical([Length(header_height), Min(0), Length(1)]).areas(area);

    PageBody::new(app).render(frame, body_area);

    if tui.toasts.is_empty() {
        draw_help(frame, status_area, &view);
    } else {
        tui.toasts.render(frame, status_area);
    }

    EditorHeaderBar::new(&view, screen, &mut tui.header).render(frame, header_area);

    // Overlay last so it sits on top of the body
    if let Some(confirm) = &view.confirm {
        let anchor = tui
            .header
            .area_of(Control::Delete)
            .unwrap_or(Rect::new(header_area.right().saturating_sub(1), header_area.y, 1, 1));
        ConfirmPopover::new(confirm, &view.styles, anchor, &mut tui.confirm).render(frame, area);
    }
}

fn draw_help(frame: &mut Frame, area: Rect, view: &HeaderView) {
    let hints: &[(&str, &str)] = if view.confirm.is_some() {
        &[("y", "confirm"), ("n", "cancel")]
    } else if view.title.editing {
        &[("Enter", "save"), ("Esc", "cancel"), ("Tab", "blur")]
    } else {
        &[
            ("e", "edit"),
            ("o", "link"),
            ("p", "pin"),
            ("s", "settings"),
            ("u", "publish"),
            ("d", "delete"),
            ("q", "quit"),
        ]
    };

    let key = Style::default().fg(Color::Yellow);
    let desc = Style::default().fg(Color::DarkGray);
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(k, d)| {
            [
                Span::styled(format!(" {}", k), key),
                Span::styled(format!(" {} ", d), desc),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
