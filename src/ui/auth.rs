//! Welcome, sign-in and sign-up screens.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{centered_rect, hint_line, render_button, render_text_field};
use super::interaction::ClickAction;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::{App, AuthField, AuthForm, Screen};
use crate::services::{DEMO_EMAIL, DEMO_PASSWORD};

pub const PAWMATCH_LOGO: [&str; 5] = [
    "█▀█ ▄▀█ █ █ █ █▀▄▀█ ▄▀█ ▀█▀ █▀▀ █ █",
    "█▀▀ █▀█ ▀▄▀▄▀ █ ▀ █ █▀█  █  █   █▀█",
    "▀   ▀ ▀  ▀ ▀  ▀   ▀ ▀ ▀  ▀  ▀▀▀ ▀ ▀",
    "",
    "Find the perfect playmate for your dog",
];

pub fn render_welcome_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    let dialog = centered_rect(52, 14, area);
    let [logo, _, sign_in, sign_up, _, hints] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(dialog);

    let logo_widget = Paragraph::new(PAWMATCH_LOGO.join("\n"))
        .style(Style::default().fg(COLOR_ACCENT))
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, logo);

    let primary = if app.auth.is_authenticated() {
        "Continue"
    } else {
        "Sign in"
    };
    let button_style = Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD);
    let target = if app.auth.is_authenticated() {
        Screen::Swipe
    } else {
        Screen::SignIn
    };
    render_button(
        frame,
        &mut app.hit_areas,
        centered_rect(20, 1, sign_in),
        primary,
        button_style,
        ClickAction::Navigate(target),
    );
    render_button(
        frame,
        &mut app.hit_areas,
        centered_rect(20, 1, sign_up),
        "Create account",
        Style::default().fg(COLOR_DIM),
        ClickAction::Navigate(Screen::SignUp),
    );

    let hints_line = hint_line(&[("Enter", primary), ("u", "sign up"), ("q", "quit")]);
    frame.render_widget(Paragraph::new(hints_line).alignment(Alignment::Center), hints);
}

pub fn render_sign_in_screen(frame: &mut Frame, app: &App) {
    render_auth_form(frame, &app.sign_in, false);
}

pub fn render_sign_up_screen(frame: &mut Frame, app: &App) {
    render_auth_form(frame, &app.sign_up, true);
}

fn render_auth_form(frame: &mut Frame, form: &AuthForm, sign_up: bool) {
    let area = frame.area();
    let fields = AuthForm::fields(sign_up);
    let height = 6 + 3 * fields.len() as u16 + 2;
    let dialog = centered_rect(50, height, area);

    let title = if sign_up { " Create account " } else { " Sign in " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_ACCENT).bold()));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.extend([Constraint::Length(2), Constraint::Length(1)]);
    let rows = Layout::vertical(constraints).split(inner.inner(Margin::new(1, 0)));

    for (field, row) in fields.iter().zip(rows.iter().skip(1)) {
        let (label, value) = match field {
            AuthField::Name => ("Name", form.name.as_str()),
            AuthField::Email => ("Email", form.email.as_str()),
            AuthField::Password => ("Password", form.password.as_str()),
        };
        render_text_field(
            frame,
            *row,
            label,
            value,
            form.focus == *field,
            *field == AuthField::Password,
        );
    }

    let status_row = rows[fields.len() + 1];
    let status = match &form.error {
        Some(error) => Line::styled(error.clone(), Style::default().fg(COLOR_ERROR)),
        None if !sign_up => Line::styled(
            format!("Demo: {} / {}", DEMO_EMAIL, DEMO_PASSWORD),
            Style::default().fg(COLOR_DIM),
        ),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), status_row);

    let hints = hint_line(&[("Tab", "next field"), ("Enter", "submit"), ("Esc", "back")]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        rows[fields.len() + 2],
    );
}
