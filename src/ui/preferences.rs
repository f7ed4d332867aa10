//! Match preferences screen: one scrolling list of filter rows.

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{hint_line, render_button};
use super::interaction::ClickAction;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LIKE};
use crate::app::{App, PrefRow};
use crate::models::{DogFilters, MAX_FILTER_AGE, RADIUS_RANGE_KM};

pub fn render_preferences_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let [header, list_area, buttons, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Match preferences",
            Style::default().fg(COLOR_ACCENT).bold(),
        ))),
        header,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    let visible = usize::from(inner.height);
    let first = scroll_offset(app.pref_cursor, visible, app.pref_rows.len());
    let mut previous_section = (first > 0).then(|| app.pref_rows[first - 1].section());

    let mut y = inner.y;
    for (index, row) in app.pref_rows.iter().enumerate().skip(first) {
        if y >= inner.bottom() {
            break;
        }
        if previous_section != Some(row.section()) {
            previous_section = Some(row.section());
            let heading = Line::styled(row.section(), Style::default().fg(COLOR_DIM).bold());
            frame.render_widget(Paragraph::new(heading), Rect::new(inner.x, y, inner.width, 1));
            y += 1;
            if y >= inner.bottom() {
                break;
            }
        }
        let rect = Rect::new(inner.x, y, inner.width, 1);
        let selected = index == app.pref_cursor;
        frame.render_widget(Paragraph::new(row_line(row, &app.filters_draft, selected)), rect);
        app.hit_areas
            .register(rect, ClickAction::TogglePreference(index), None);
        y += 1;
    }

    let [save, reset] = Layout::horizontal([Constraint::Length(16), Constraint::Length(16)])
        .flex(Flex::Center)
        .areas(buttons);
    render_button(
        frame,
        &mut app.hit_areas,
        save,
        "Save",
        Style::default().fg(COLOR_LIKE).bold(),
        ClickAction::SavePreferences,
    );
    render_button(
        frame,
        &mut app.hit_areas,
        reset,
        "Reset",
        Style::default().fg(COLOR_DIM),
        ClickAction::ResetPreferences,
    );

    let hints_line = hint_line(&[
        ("↑/↓", "move"),
        ("←/→", "adjust"),
        ("Space", "toggle"),
        ("s", "save"),
        ("r", "reset"),
        ("Esc", "cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints_line).alignment(Alignment::Center), hints);
}

/// First row to draw so the cursor stays on screen.
///
/// Section headings take lines too, so the cursor is kept in the upper half.
pub fn scroll_offset(cursor: usize, visible: usize, total: usize) -> usize {
    if total == 0 || visible == 0 {
        return 0;
    }
    let half = (visible / 2).max(1);
    cursor.saturating_sub(half - 1).min(total - 1)
}

fn row_line(row: &PrefRow, filters: &DogFilters, selected: bool) -> Line<'static> {
    let (text, checked) = match row {
        PrefRow::Radius => (
            format!(
                "Distance      ◀ {:>3} km ▶   ({}-{} km)",
                filters.radius_km, RADIUS_RANGE_KM.0, RADIUS_RANGE_KM.1
            ),
            None,
        ),
        PrefRow::MinAge => (
            format!("Minimum age   ◀ {:>3} ▶", filters.age_range.min),
            None,
        ),
        PrefRow::MaxAge => (
            format!("Maximum age   ◀ {:>3} ▶   (up to {})", filters.age_range.max, MAX_FILTER_AGE),
            None,
        ),
        PrefRow::Size(size) => (
            format!("{} ({})", size.label(), size.weight_hint()),
            Some(filters.has_size(*size)),
        ),
        PrefRow::Energy(energy) => (energy.label().to_string(), Some(filters.has_energy(*energy))),
        PrefRow::Breed(breed) => (breed.to_string(), Some(filters.has_breed(breed))),
        PrefRow::Activity(activity) => (activity.to_string(), Some(filters.has_activity(activity))),
    };

    let marker = match checked {
        Some(true) => "☑ ",
        Some(false) => "☐ ",
        None => "",
    };
    let mut style = if checked == Some(true) {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_HEADER)
    };
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let pointer = if selected { "› " } else { "  " };
    Line::from(vec![
        Span::styled(pointer, Style::default().fg(COLOR_ACCENT)),
        Span::styled(format!("{}{}", marker, text), style),
    ])
}
