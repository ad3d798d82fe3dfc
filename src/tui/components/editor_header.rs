//! # EditorHeader Component
//!
//! Draws a [`HeaderView`] as the top rows of the screen: the title (plain or
//! as an input with a cursor) and the button group, over a bottom border.
//!
//! ## Layout
//!
//! The title and button columns share one row when their grid spans fit in 24
//! columns and the layout doesn't ask the header to wrap. Otherwise they stack:
//!
//! ```text
//! desktop (md / lg)                               mobile
//! ┌──────────────────────────┬──────────────────┐ ┌─────────────────────────┐
//! │ Title                    │  [✎ Edit] ◆ ⚙ ✖  │ │ Title                   │
//! └──────────────────────────┴──────────────────┘ │ ✎ ◆ ⚙ Publish ✖ »       │
//!                                                 └─────────────────────────┘
//! ```
//!
//! On desktop the button group wraps onto more rows when it runs out of room.
//! On mobile it stays on one row and scrolls sideways instead.
//!
//! ## State
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EditorHeaderState` lives in `TuiState` and remembers where each button
//!   was drawn, so clicks can be mapped back to controls.
//! - `EditorHeaderBar` is created each frame with borrowed state.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::layout::{ColumnSpans, GRID_COLUMNS, ScreenClass};
use crate::core::view::{ButtonVariant, ButtonView, Control, HeaderView, TitleView};
use crate::tui::component::Component;
use crate::tui::style::{color, glyph, px_to_cells};

/// Persistent state for the header.
#[derive(Debug, Default)]
pub struct EditorHeaderState {
    hit_areas: Vec<(Rect, Control)>,
    title_area: Rect,
    /// Horizontal scroll of a non-wrapping button group, in columns.
    pub scroll_x: u16,
    max_scroll: u16,
}

impl EditorHeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control under the given cell, as of the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        self.hit_areas
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, control)| *control)
    }

    pub fn in_title(&self, column: u16, row: u16) -> bool {
        self.title_area.contains(Position::new(column, row))
    }

    /// Where a control was drawn, if it is visible.
    pub fn area_of(&self, control: Control) -> Option<Rect> {
        self.hit_areas
            .iter()
            .find(|(_, c)| *c == control)
            .map(|(area, _)| *area)
    }

    pub fn scroll(&mut self, delta: i16) {
        let next = (self.scroll_x as i32 + delta as i32).clamp(0, self.max_scroll as i32);
        self.scroll_x = next as u16;
    }
}

/// Transient render wrapper.
pub struct EditorHeaderBar<'a> {
    view: &'a HeaderView,
    screen: ScreenClass,
    state: &'a mut EditorHeaderState,
}

impl<'a> EditorHeaderBar<'a> {
    pub fn new(view: &'a HeaderView, screen: ScreenClass, state: &'a mut EditorHeaderState) -> Self {
        Self {
            view,
            screen,
            state,
        }
    }

    /// Rows needed at `width`, bottom border included.
    pub fn required_height(view: &HeaderView, screen: ScreenClass, width: u16) -> u16 {
        let area = Rect {
            x: 0,
            y: 0,
            width,
            height: 1,
        };
        let geometry = Geometry::compute(view, screen, area, 0);
        geometry.content_rows + 1
    }
}

impl Component for EditorHeaderBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let styles = &self.view.styles;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(color(styles.border_bottom)))
            .style(Style::default().bg(color(styles.background)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let geometry = Geometry::compute(self.view, self.screen, inner, self.state.scroll_x);
        self.state.max_scroll = geometry.max_scroll;
        self.state.scroll_x = self.state.scroll_x.min(geometry.max_scroll);
        self.state.title_area = geometry.title;
        self.state.hit_areas.clear();

        render_title(frame, geometry.title, &self.view.title, self.view);

        for (button, placed) in self.view.buttons.iter().zip(&geometry.buttons) {
            let Some(rect) = placed else { continue };
            let rect = rect.intersection(inner);
            if rect.is_empty() {
                continue;
            }
            frame.render_widget(Paragraph::new(button_line(button)), rect);
            self.state.hit_areas.push((rect, button.control));
        }

        if geometry.clipped {
            let marker = Rect {
                x: geometry.button_area.right().saturating_sub(1),
                width: 1,
                height: 1,
                ..geometry.button_area
            };
            frame.render_widget(
                Paragraph::new("»").style(Style::default().fg(color(styles.button_fg))),
                marker.intersection(inner),
            );
        }
    }
}

fn render_title(frame: &mut Frame, area: Rect, title: &TitleView, view: &HeaderView) {
    if area.is_empty() {
        return;
    }
    let styles = &view.styles;
    let text_style = Style::default()
        .fg(color(styles.input_fg))
        .add_modifier(Modifier::BOLD);

    if title.editing {
        let cursor = title.cursor.unwrap_or(title.text.len());
        let (visible, cursor_col) = visible_window(&title.text, cursor, area.width);
        let input = Paragraph::new(visible).style(text_style.bg(color(styles.input_background)));
        frame.render_widget(input, area);
        frame.set_cursor_position((area.x + cursor_col, area.y));
    } else {
        frame.render_widget(
            Paragraph::new(truncate(&title.text, area.width)).style(text_style),
            area,
        );
    }
}

fn button_text(button: &ButtonView) -> String {
    match (button.icon, button.label.is_empty()) {
        (Some(icon), true) => format!(" {} ", glyph(icon)),
        (Some(icon), false) => format!(" {} {} ", glyph(icon), button.label),
        (None, _) => format!(" {} ", button.label),
    }
}

fn button_width(button: &ButtonView) -> u16 {
    let border = if button.border.is_some() { 2 } else { 0 };
    button_text(button).width() as u16 + border
}

fn button_line(button: &ButtonView) -> Line<'static> {
    let mut style = Style::default().fg(color(button.fg)).bg(color(button.bg));
    if button.variant == ButtonVariant::Primary {
        style = style.add_modifier(Modifier::BOLD);
    }
    let text = Span::styled(button_text(button), style);

    match button.border {
        Some(border) => {
            let edge_style = Style::default().fg(color(border.color)).bg(color(button.bg));
            let (left, right) = if border.dashed { ("╎", "╎") } else { ("[", "]") };
            Line::from(vec![
                Span::styled(left, edge_style),
                text,
                Span::styled(right, edge_style),
            ])
        }
        None => Line::from(text),
    }
}

/// Where everything goes inside the header's inner area.
struct Geometry {
    title: Rect,
    button_area: Rect,
    /// One entry per button; `None` when scrolled out of view.
    buttons: Vec<Option<Rect>>,
    content_rows: u16,
    max_scroll: u16,
    clipped: bool,
}

impl Geometry {
    fn compute(view: &HeaderView, screen: ScreenClass, inner: Rect, scroll_x: u16) -> Self {
        let layout = &view.layout;
        let spans = ColumnSpans::for_screen(screen);
        let stacked = layout.header.wrap || !spans.single_row();

        let input_margin = px_to_cells(layout.input.margin_x);
        let column_margin = px_to_cells(layout.button_column.margin_x);
        let padding_right = layout.button_column.padding_right.map(px_to_cells).unwrap_or(0);
        let gap = px_to_cells(layout.button_group.gap).min(1);

        let (title_x, title_width, buttons_x, buttons_width) = if stacked {
            (
                inner.x + input_margin,
                inner.width.saturating_sub(input_margin * 2),
                inner.x + column_margin,
                inner
                    .width
                    .saturating_sub(column_margin * 2)
                    .saturating_sub(padding_right),
            )
        } else {
            let title_width = inner.width * spans.title / GRID_COLUMNS;
            (
                inner.x + input_margin,
                title_width.saturating_sub(input_margin * 2),
                inner.x + title_width + column_margin,
                inner
                    .width
                    .saturating_sub(title_width)
                    .saturating_sub(column_margin * 2)
                    .saturating_sub(padding_right),
            )
        };

        let widths: Vec<u16> = view.buttons.iter().map(button_width).collect();
        let flowed = flow(&widths, buttons_width, gap, layout.button_group.wrap, scroll_x);

        let buttons_y = if stacked { inner.y + 1 } else { inner.y };
        let title = Rect::new(title_x, inner.y, title_width, 1.min(inner.height));
        let button_area = Rect::new(buttons_x, buttons_y, buttons_width, flowed.rows);
        let buttons = flowed
            .placements
            .iter()
            .zip(&widths)
            .map(|(placed, &w)| {
                placed.map(|p| Rect::new(buttons_x + p.x, buttons_y + p.row, w, 1))
            })
            .collect();

        let content_rows = if stacked {
            1 + flowed.rows
        } else {
            flowed.rows.max(1)
        };

        Self {
            title,
            button_area,
            buttons,
            content_rows,
            max_scroll: flowed.max_scroll,
            clipped: flowed.clipped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    x: u16,
    row: u16,
}

#[derive(Debug)]
struct Flow {
    placements: Vec<Option<Placement>>,
    rows: u16,
    max_scroll: u16,
    clipped: bool,
}

/// Right-aligned placement of button widths within `avail` columns.
///
/// Wrapping groups fill rows greedily; each row is right-aligned on its own.
/// Non-wrapping groups that overflow are left-aligned and shifted by `scroll`,
/// and buttons that don't fit entirely are left out.
fn flow(widths: &[u16], avail: u16, gap: u16, wrap: bool, scroll: u16) -> Flow {
    let row_width = |ws: &[u16]| -> u16 {
        ws.iter().sum::<u16>() + gap * ws.len().saturating_sub(1) as u16
    };

    if widths.is_empty() {
        return Flow {
            placements: Vec::new(),
            rows: 1,
            max_scroll: 0,
            clipped: false,
        };
    }

    if wrap {
        let mut rows: Vec<std::ops::Range<usize>> = Vec::new();
        let mut start = 0;
        for i in 1..=widths.len() {
            if i == widths.len() || row_width(&widths[start..=i]) > avail {
                rows.push(start..i);
                start = i;
            }
        }

        let mut placements = vec![None; widths.len()];
        for (row, range) in rows.iter().enumerate() {
            let mut x = avail.saturating_sub(row_width(&widths[range.clone()]));
            for i in range.clone() {
                placements[i] = Some(Placement { x, row: row as u16 });
                x += widths[i] + gap;
            }
        }
        return Flow {
            placements,
            rows: rows.len() as u16,
            max_scroll: 0,
            clipped: false,
        };
    }

    let total = row_width(widths);
    if total <= avail {
        let mut x = avail - total;
        let placements = widths
            .iter()
            .map(|w| {
                let p = Placement { x, row: 0 };
                x += w + gap;
                Some(p)
            })
            .collect();
        return Flow {
            placements,
            rows: 1,
            max_scroll: 0,
            clipped: false,
        };
    }

    let max_scroll = total - avail;
    let scroll = scroll.min(max_scroll);
    let mut cursor = -(scroll as i32);
    let mut clipped = false;
    let placements = widths
        .iter()
        .map(|&w| {
            let x = cursor;
            cursor += (w + gap) as i32;
            if x >= 0 && x + w as i32 <= avail as i32 {
                Some(Placement { x: x as u16, row: 0 })
            } else {
                clipped = true;
                None
            }
        })
        .collect();
    Flow {
        placements,
        rows: 1,
        max_scroll,
        clipped,
    }
}

/// The slice of `text` that fits in `width` columns with the cursor visible,
/// and the cursor's column within it.
fn visible_window(text: &str, cursor: usize, width: u16) -> (String, u16) {
    let width = width.max(1) as usize;
    let cursor = cursor.min(text.len());
    let before = &text[..cursor];
    let mut skip_width = before.width().saturating_sub(width - 1);

    let mut start = 0;
    for (i, c) in before.char_indices() {
        if skip_width == 0 {
            break;
        }
        let w = c.width().unwrap_or(0);
        skip_width = skip_width.saturating_sub(w);
        start = i + c.len_utf8();
    }

    let cursor_col = text[start..cursor].width() as u16;
    let mut visible = String::new();
    let mut used = 0;
    for c in text[start..].chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(c);
    }
    (visible, cursor_col)
}

fn truncate(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
