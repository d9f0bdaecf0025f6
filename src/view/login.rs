//! Login form rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{LoginField, LoginState};
use super::utils::centered_rect;

pub fn render(frame: &mut Frame, state: &LoginState) {
    let area = frame.area();

    // Title + two inputs + two buttons, each block 3 rows high
    let form_area = centered_rect(area, 48, 15);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Welcome title
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(3), // Sign In
            Constraint::Length(3), // Continue as Guest
            Constraint::Length(1), // Key hints
        ])
        .split(form_area);

    let title = Paragraph::new("Welcome to The Podcast App")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, chunks[0]);

    render_input(
        frame,
        chunks[1],
        " Email ",
        &state.email,
        state.focus == LoginField::Email,
    );

    // Password characters are never echoed
    let masked = "*".repeat(state.password.chars().count());
    render_input(
        frame,
        chunks[2],
        " Password ",
        &masked,
        state.focus == LoginField::Password,
    );

    render_button(frame, chunks[3], "Sign In", state.focus == LoginField::SignIn);
    render_button(
        frame,
        chunks[4],
        "Continue as Guest",
        state.focus == LoginField::Guest,
    );

    let hints = Paragraph::new("Tab: next field | Enter: select | Q: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[5]);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let input = Paragraph::new(value.to_string())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(input, area);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let (border_style, label_style) = if focused {
        (
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default(), Style::default().fg(Color::White))
    };

    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(label_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}
