//! The swipe screen: the card stack, action buttons and hints.

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::helpers::{centered_rect, hint_line, offset_rect, render_button, truncate_string};
use super::interaction::ClickAction;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FAVORITE, COLOR_HEADER, COLOR_LIKE, COLOR_PASS,
};
use crate::app::App;
use crate::models::Dog;
use crate::swipe::{CardTransform, OverlayLabel, SwipeAction};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 20;

pub fn render_swipe_screen(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    let [header, body, buttons, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let Some(session) = app.session.as_ref() else {
        return;
    };

    let header_line = Line::from(vec![
        Span::styled(" 🐾 PawMatch", Style::default().fg(COLOR_ACCENT).bold()),
        Span::styled(
            format!("   Matches: {}", session.dogs().matches().len()),
            Style::default().fg(COLOR_HEADER),
        ),
        Span::styled(
            format!("   Cards left: {}", session.deck().len()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(header_line), header);

    let base = centered_rect(CARD_WIDTH, CARD_HEIGHT, body);
    let mut card_area = None;

    match session.deck().current() {
        None => {
            let empty = Paragraph::new(
                "No more dogs nearby.\n\nAdjust your preferences (p) or undo your last swipe (Ctrl+Z).",
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(COLOR_DIM))
            .block(card_block(Style::default().fg(COLOR_BORDER)));
            frame.render_widget(empty, base);
        }
        Some(front) => {
            if let Some(next) = session.deck().peek_next() {
                render_card(frame, next, base, Style::default().fg(COLOR_DIM), None);
            }

            let state = session.drag_state(now);
            let transform = session.transform(now);
            let (dx, dy) = transform_cells(&transform, app.config.cell_width_px, app.config.cell_height_px);
            if let Some(rect) = offset_rect(base, dx, dy, body) {
                let mut style = Style::default().fg(COLOR_HEADER);
                if state.opacity < 1.0 {
                    style = style.add_modifier(Modifier::DIM);
                }
                frame.render_widget(Clear, rect);
                render_card(frame, front, rect, style, session.overlay(now));
            }
            if !session.tracker().is_committing() {
                card_area = Some(base);
            }
        }
    }

    if let Some(rect) = card_area {
        app.hit_areas.register(rect, ClickAction::DragCard, None);
    }
    render_action_buttons(frame, app, buttons);

    let hints_line = hint_line(&[
        ("←/→/↑", "pass/like/favorite"),
        ("drag", "swipe"),
        ("Ctrl+Z", "undo"),
        ("p", "preferences"),
        ("m", "matches"),
        ("q", "quit"),
    ]);
    frame.render_widget(Paragraph::new(hints_line).alignment(Alignment::Center), hints);
}

/// Card translation in whole cells.
pub fn transform_cells(transform: &CardTransform, cell_width_px: f64, cell_height_px: f64) -> (i32, i32) {
    let to_cells = |px: f64, cell: f64| {
        if cell > 0.0 && px.is_finite() {
            (px / cell).round() as i32
        } else {
            0
        }
    };
    (
        to_cells(transform.translate_x, cell_width_px),
        to_cells(transform.translate_y, cell_height_px),
    )
}

fn card_block(border_style: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

fn overlay_color(label: &OverlayLabel) -> Color {
    match label.class {
        "pass" => COLOR_PASS,
        "like" => COLOR_LIKE,
        _ => COLOR_FAVORITE,
    }
}

fn render_card(frame: &mut Frame, dog: &Dog, area: Rect, style: Style, overlay: Option<OverlayLabel>) {
    let width = usize::from(area.width.saturating_sub(4));
    let mut lines = Vec::new();

    if let Some(label) = overlay {
        lines.push(
            Line::from(Span::styled(
                format!(" {} ", label.text),
                Style::default()
                    .fg(Color::Black)
                    .bg(overlay_color(&label))
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    } else {
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled(dog.name.clone(), style.add_modifier(Modifier::BOLD)),
        Span::styled(format!(", {}", dog.age_label()), style),
    ]));
    lines.push(Line::styled(truncate_string(&dog.breed, width), style));
    lines.push(Line::styled(
        format!("{} · {} · {} energy", dog.gender.label(), dog.size, dog.energy),
        style.fg(COLOR_DIM),
    ));
    lines.push(Line::styled(format!("📍 {}", dog.location.city), style.fg(COLOR_DIM)));
    lines.push(Line::default());
    lines.push(Line::styled(
        truncate_string(&dog.activities.join(" · "), width),
        style.fg(COLOR_ACCENT),
    ));
    lines.push(Line::default());
    lines.push(Line::styled(dog.bio.clone(), style));
    lines.push(Line::default());
    lines.push(Line::styled(format!("Owner: {}", dog.owner_name), style.fg(COLOR_DIM)));

    let border = style.fg(overlay.map(|l| overlay_color(&l)).unwrap_or(COLOR_BORDER));
    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card_block(border).padding(ratatui::widgets::Padding::horizontal(1)));
    frame.render_widget(card, area);
}

fn render_action_buttons(frame: &mut Frame, app: &mut App, area: Rect) {
    let buttons: [(&str, Color, ClickAction); 4] = [
        ("✕ Pass", COLOR_PASS, ClickAction::Swipe(SwipeAction::Pass)),
        ("★ Favorite", COLOR_FAVORITE, ClickAction::Swipe(SwipeAction::Favorite)),
        ("♥ Like", COLOR_LIKE, ClickAction::Swipe(SwipeAction::Like)),
        ("↺ Undo", COLOR_DIM, ClickAction::Undo),
    ];
    let row = centered_rect(4 * 14, 1, area);
    let cells = Layout::horizontal([Constraint::Length(14); 4]).split(row);
    for ((label, color, action), cell) in buttons.into_iter().zip(cells.iter()) {
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        render_button(frame, &mut app.hit_areas, *cell, label, style, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_cells_rounds() {
        let t = CardTransform {
            translate_x: 121.0,
            translate_y: -24.0,
            rotate_deg: 5.0,
        };
        assert_eq!(transform_cells(&t, 8.0, 16.0), (15, -2));
        assert_eq!(transform_cells(&CardTransform::IDENTITY, 8.0, 16.0), (0, 0));
    }

    #[test]
    fn test_transform_cells_ignores_bad_cell_size() {
        let t = CardTransform {
            translate_x: 100.0,
            translate_y: 0.0,
            rotate_deg: 0.0,
        };
        assert_eq!(transform_cells(&t, 0.0, 16.0), (0, 0));
    }
}
