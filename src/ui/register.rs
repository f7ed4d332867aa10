//! Three-step dog registration screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

use super::helpers::{centered_rect, hint_line, render_text_field};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::{App, RegisterField};
use crate::models::{DogSize, EnergyLevel, Gender, ACTIVITY_OPTIONS};
use crate::services::profile::{MAX_BIO_LEN, TOTAL_STEPS};

pub fn render_register_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let dialog = centered_rect(64, 26, area);
    let form = &app.registration;

    let title = format!(" Register your dog · step {} of {} ", form.step(), TOTAL_STEPS);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_ACCENT).bold()));
    let inner = block.inner(dialog).inner(Margin::new(1, 0));
    frame.render_widget(block, dialog);

    let [progress, body, errors, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_ACCENT))
        .ratio((form.progress_percentage() / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", form.progress_percentage()));
    frame.render_widget(gauge, progress);

    let focused = app.focused_register_field();
    let fields = RegisterField::for_step(form.step());
    let heights: Vec<Constraint> = fields.iter().map(|f| Constraint::Length(field_height(*f))).collect();
    let rows = Layout::vertical(heights).split(body);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let is_focused = *field == focused;
        match field {
            RegisterField::Name => {
                render_text_field(frame, *row, "Name", &form.name, is_focused, false)
            }
            RegisterField::Breed => {
                render_with_suggestions(frame, *row, "Breed", &form.breed, is_focused, &app.breed_suggestions())
            }
            RegisterField::Age => render_text_field(
                frame,
                *row,
                "Age (years)",
                &app.register_view.age_text,
                is_focused,
                false,
            ),
            RegisterField::Bio => {
                let label = format!("Bio ({}/{})", form.bio.chars().count(), MAX_BIO_LEN);
                render_text_field(frame, *row, &label, &form.bio, is_focused, false)
            }
            RegisterField::City => {
                render_with_suggestions(frame, *row, "City", &form.city, is_focused, &app.city_suggestions())
            }
            RegisterField::Gender => {
                let options: Vec<(&str, bool)> =
                    Gender::ALL.iter().map(|g| (g.label(), *g == form.gender)).collect();
                render_choice(frame, *row, "Gender", &options, is_focused);
            }
            RegisterField::Size => {
                let options: Vec<(&str, bool)> =
                    DogSize::ALL.iter().map(|s| (s.label(), form.size == Some(*s))).collect();
                render_choice(frame, *row, "Size", &options, is_focused);
            }
            RegisterField::Energy => {
                let options: Vec<(&str, bool)> = EnergyLevel::ALL
                    .iter()
                    .map(|e| (e.label(), form.energy == Some(*e)))
                    .collect();
                render_choice(frame, *row, "Energy", &options, is_focused);
            }
            RegisterField::Activities => render_activities(frame, *row, app, is_focused),
        }
    }

    let error_text: Vec<Line> = app
        .register_view
        .errors
        .iter()
        .take(2)
        .map(|e| Line::styled(e.message, Style::default().fg(COLOR_ERROR)))
        .collect();
    frame.render_widget(Paragraph::new(error_text), errors);

    let next = if form.is_last_step() { "save" } else { "next step" };
    let hints_line = hint_line(&[("Tab", "field"), ("←/→", "choose"), ("Enter", next), ("Esc", "back")]);
    frame.render_widget(Paragraph::new(hints_line).alignment(Alignment::Center), hints);
}

fn field_height(field: RegisterField) -> u16 {
    match field {
        RegisterField::Breed | RegisterField::City => 4,
        RegisterField::Activities => 6,
        _ => 3,
    }
}

fn render_with_suggestions(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    suggestions: &[&str],
) {
    let [input, list] = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
    render_text_field(frame, input, label, value, focused, false);
    if focused && !suggestions.is_empty() {
        let line = Line::from(vec![
            Span::styled("  ↵ ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(suggestions.join(" · "), Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), list);
    }
}

fn render_choice(frame: &mut Frame, area: Rect, label: &str, options: &[(&str, bool)], focused: bool) {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let mut spans = Vec::new();
    for (text, selected) in options {
        let style = if *selected {
            Style::default().fg(Color::Black).bg(COLOR_ACCENT).bold()
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        spans.push(Span::styled(format!(" {} ", text), style));
        spans.push(Span::raw(" "));
    }
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", label)),
    );
    frame.render_widget(widget, area);
}

fn render_activities(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let mut spans = Vec::new();
    for (i, activity) in ACTIVITY_OPTIONS.iter().enumerate() {
        let checked = app.registration.has_activity(activity);
        let mut style = if checked {
            Style::default().fg(COLOR_ACCENT).bold()
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        if focused && i == app.register_view.activity_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let mark = if checked { "☑" } else { "☐" };
        spans.push(Span::styled(format!("{} {}", mark, activity), style));
        spans.push(Span::raw("   "));
    }
    let widget = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(" Activities (Space to toggle) "),
        );
    frame.render_widget(widget, area);
}
