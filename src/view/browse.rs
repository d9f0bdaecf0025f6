//! Podcast browse screen rendering (search input + card list)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{catalog, filter_catalog, BrowseSection, BrowseState, ImageRef, Podcast};
use super::utils::{render_scrollable_list, truncate_string};

pub fn render(frame: &mut Frame, state: &BrowseState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Podcast cards
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let header = Paragraph::new(" 🎧 Featured Podcasts").style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, chunks[0]);

    render_search_input(frame, chunks[1], state);
    render_podcast_list(frame, chunks[2], state);

    let hints = Paragraph::new(" Tab: switch focus | ↑/↓: select | Enter: open website | Q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[3]);
}

fn render_search_input(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let focused = state.section == BrowseSection::Search;

    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if state.search_query.is_empty() {
        "Type to search podcasts..."
    } else {
        &state.search_query
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, area);
}

fn render_podcast_list(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let is_focused = state.section == BrowseSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let visible: Vec<&Podcast> = filter_catalog(&state.search_query);
    let title = format!(" Podcasts ({}/{}) ", visible.len(), catalog().len());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    if visible.is_empty() {
        let empty = Paragraph::new("  No podcasts match your search")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let description_width = area.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, podcast)| {
            let title_style = if i == state.selected && is_focused {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == state.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let lines = vec![
                Line::styled(
                    format!("{} {}", card_icon(&podcast.image), podcast.title),
                    title_style,
                ),
                Line::styled(
                    format!("   {}", truncate_string(podcast.description, description_width)),
                    Style::default().fg(Color::Gray),
                ),
                Line::raw(""),
            ];
            ListItem::new(lines)
        })
        .collect();

    render_scrollable_list(frame, area, items, state.selected, block);
}

/// Resolve a bundled image reference to a terminal glyph.
fn card_icon(image: &ImageRef) -> &'static str {
    match image.asset_name() {
        "the_daily" => "🗞",
        "invincible" => "🏙",
        "smartless" => "🎤",
        "science_vs" => "🔬",
        "stuff_you" => "💡",
        "crime_junkie" => "🕵",
        "joe_rogan" => "🥋",
        "diary_ceo" => "📔",
        _ => "🎙",
    }
}
