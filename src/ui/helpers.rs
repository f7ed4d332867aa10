//! Helper functions for UI rendering
//!
//! Layout math, truncation and the shared widgets (text fields, buttons).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{hover_style, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// `base` moved by whole cells and clipped to `bounds`; `None` once fully outside.
pub fn offset_rect(base: Rect, dx: i32, dy: i32, bounds: Rect) -> Option<Rect> {
    let left = (i32::from(base.x) + dx).max(i32::from(bounds.x));
    let top = (i32::from(base.y) + dy).max(i32::from(bounds.y));
    let right = (i32::from(base.right()) + dx).min(i32::from(bounds.right()));
    let bottom = (i32::from(base.bottom()) + dy).min(i32::from(bounds.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect {
        x: u16::try_from(left).ok()?,
        y: u16::try_from(top).ok()?,
        width: u16::try_from(right - left).ok()?,
        height: u16::try_from(bottom - top).ok()?,
    })
}

/// Truncate to `max_width` display columns, ending with `…` when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.to_string().width();
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// One labelled single-line input.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    masked: bool,
) {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "▏" } else { "" };
    let (border, body) = if focused {
        (
            Style::default().fg(COLOR_ACCENT),
            Style::default().bg(COLOR_INPUT_BG),
        )
    } else {
        (Style::default().fg(COLOR_BORDER), Style::default())
    };
    let inner_width = usize::from(area.width.saturating_sub(3));
    let text = tail(&shown, inner_width);

    let field = Paragraph::new(Line::from(vec![Span::raw(text), Span::raw(cursor)]))
        .style(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .title(Span::styled(format!(" {} ", label), border)),
        );
    frame.render_widget(field, area);
}

/// A one-line clickable button, registered with the hit-area registry.
pub fn render_button(
    frame: &mut Frame,
    registry: &mut HitAreaRegistry,
    area: Rect,
    label: &str,
    style: Style,
    action: ClickAction,
) {
    let hover = hover_style();
    registry.register(area, action, Some(hover));
    let style = registry.hover_style(area).unwrap_or(style);
    let button = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(button, area);
}

/// Dimmed `[key] action` hint line.
pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

/// The end of `s` that fits in `width` columns, so the cursor stays visible.
fn tail(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out: Vec<char> = Vec::new();
    let mut used = 0;
    for c in s.chars().rev() {
        let w = c.to_string().width();
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.into_iter().rev().collect()
}
