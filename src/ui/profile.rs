//! Profile screen: the owner's dog, swipe stats and the match list.

use chrono::Utc;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use super::helpers::{hint_line, render_button, truncate_string};
use super::interaction::ClickAction;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MATCH, COLOR_PASS};
use crate::app::{App, Screen};
use crate::error::ResultExt;
use crate::models::{time_ago, SwipeStats};

pub fn render_profile_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let [header, body, buttons, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);

    let owner = app
        .auth
        .current_user()
        .map(|u| format!(" {} · {}", u.name, u.email))
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Profile", Style::default().fg(COLOR_ACCENT).bold()),
            Span::styled(owner, Style::default().fg(COLOR_DIM)),
        ])),
        header,
    );

    render_dog_panel(frame, app, left);
    render_matches_panel(frame, app, right);

    let [edit, clear, sign_out] = Layout::horizontal([Constraint::Length(16); 3])
        .flex(ratatui::layout::Flex::Center)
        .areas(buttons);
    render_button(
        frame,
        &mut app.hit_areas,
        edit,
        "Edit dog",
        Style::default().fg(COLOR_HEADER),
        ClickAction::Navigate(Screen::Register),
    );
    render_button(
        frame,
        &mut app.hit_areas,
        clear,
        "Clear matches",
        Style::default().fg(COLOR_DIM),
        ClickAction::ClearMatches,
    );
    render_button(
        frame,
        &mut app.hit_areas,
        sign_out,
        "Sign out",
        Style::default().fg(COLOR_PASS),
        ClickAction::SignOut,
    );

    let hints_line = hint_line(&[
        ("Esc", "back"),
        ("e", "edit dog"),
        ("p", "preferences"),
        ("c", "clear matches"),
        ("o", "sign out"),
    ]);
    frame.render_widget(Paragraph::new(hints_line).alignment(Alignment::Center), hints);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(COLOR_HEADER).bold()))
}

fn render_dog_panel(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app
        .session
        .as_ref()
        .map(|s| s.dogs().stats())
        .unwrap_or_default();

    let mut lines = match app.profile.load().log_err("load_profile") {
        Ok(Some(profile)) => {
            let dog = &profile.dog;
            vec![
                Line::from(vec![
                    Span::styled(dog.name.clone(), Style::default().fg(COLOR_ACCENT).bold()),
                    Span::raw(format!(", {}", dog.age_label())),
                ]),
                Line::raw(format!("{} · {}", dog.breed, dog.gender.label())),
                Line::styled(
                    format!("{} · {} energy · {}", dog.size, dog.energy, dog.location.city),
                    Style::default().fg(COLOR_DIM),
                ),
                Line::styled(dog.activities.join(" · "), Style::default().fg(COLOR_ACCENT)),
                Line::raw(dog.bio.clone()),
            ]
        }
        _ => vec![Line::styled(
            "No dog registered yet. Press e to add one.",
            Style::default().fg(COLOR_DIM),
        )],
    };

    lines.push(Line::default());
    lines.extend(stats_lines(&stats));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel("My dog"));
    frame.render_widget(widget, area);
}

fn stats_lines(stats: &SwipeStats) -> Vec<Line<'static>> {
    vec![
        Line::styled("Stats", Style::default().fg(COLOR_HEADER).bold()),
        Line::raw(format!("Swipes     {}", stats.total_swipes)),
        Line::raw(format!("Matches    {}", stats.matches)),
        Line::raw(format!("Favorites  {}", stats.favorites)),
    ]
}

fn render_matches_panel(frame: &mut Frame, app: &App, area: Rect) {
    let now = Utc::now();
    let width = usize::from(area.width.saturating_sub(4));
    let matches = app
        .session
        .as_ref()
        .map(|s| s.dogs().matches())
        .unwrap_or_default();

    let title = format!("Matches ({})", matches.len());
    if matches.is_empty() {
        let empty = Paragraph::new("No matches yet. Keep swiping!")
            .style(Style::default().fg(COLOR_DIM))
            .block(panel(&title));
        frame.render_widget(empty, area);
        return;
    }

    // newest first
    let items: Vec<ListItem> = matches
        .iter()
        .rev()
        .map(|m| {
            let heading = Line::from(vec![
                Span::styled("♥ ", Style::default().fg(COLOR_MATCH)),
                Span::styled(m.dog.name.clone(), Style::default().fg(COLOR_HEADER).bold()),
                Span::styled(
                    format!("  {}", time_ago(m.matched_at, now)),
                    Style::default().fg(COLOR_DIM),
                ),
            ]);
            let detail = Line::styled(
                truncate_string(
                    &format!("  {} · {} · owner {}", m.dog.breed, m.dog.location.city, m.dog.owner_name),
                    width,
                ),
                Style::default().fg(COLOR_DIM),
            );
            ListItem::new(vec![heading, detail])
        })
        .collect();
    frame.render_widget(List::new(items).block(panel(&title)), area);
}
