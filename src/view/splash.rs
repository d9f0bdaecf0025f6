//! Splash screen rendering

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::utils::centered_rect;

pub fn render(frame: &mut Frame) {
    let area = frame.area();

    let lines = vec![
        Line::styled("🎙", Style::default().fg(Color::LightBlue)),
        Line::raw(""),
        Line::styled(
            "The Podcast App",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled("Loading...", Style::default().fg(Color::DarkGray)),
    ];

    let banner_area = centered_rect(area, 40, lines.len() as u16);
    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(banner, banner_area);
}
