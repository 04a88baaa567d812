//! Song section rendering (input box, selected songs)

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, SongState, UiState};
use super::utils::{border_style, item_style, render_scrollable_list};

pub fn render_song_input(frame: &mut Frame, area: Rect, songs: &SongState, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::SongInput;

    // Input is disabled while a confirmation is in flight
    let (text, style) = if songs.is_loading {
        ("Selecting...", Style::default().fg(Color::DarkGray))
    } else if songs.query.is_empty() {
        ("Enter song name or ID...", Style::default().fg(Color::DarkGray))
    } else if focused {
        (songs.query.as_str(), Style::default().fg(Color::Green))
    } else {
        (songs.query.as_str(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select Song ")
            .padding(Padding::horizontal(1))
            .border_style(border_style(focused && !songs.is_loading)),
    );
    frame.render_widget(input, area);
}

pub fn render_song_list(frame: &mut Frame, area: Rect, songs: &SongState, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::SongList;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Selected Songs ")
        .padding(Padding::horizontal(1))
        .border_style(border_style(focused));

    if songs.selected_songs.is_empty() {
        let empty = Paragraph::new("No songs picked")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = songs
        .selected_songs
        .iter()
        .enumerate()
        .map(|(i, song)| ListItem::new(format!("♪ {}", song)).style(item_style(i == songs.selected_index, focused)))
        .collect();

    render_scrollable_list(frame, area, items, songs.selected_index, block);
}
