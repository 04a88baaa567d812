//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//!
//! - `utils`: shared helpers (popup placement, focus styles, scrollable lists)
//! - `clock`: time display, "Change Time" button, 12/24-hour toggle
//! - `song`: song input and selected songs list
//! - `overlays`: modal overlays (time picker, error, help)

mod utils;
mod clock;
mod song;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ClockState, SongState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, clock: &ClockState, songs: &SongState, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Large time display
                Constraint::Length(3), // Change Time button
                Constraint::Length(3), // 12/24 toggle
                Constraint::Length(3), // Song input
                Constraint::Min(0),    // Selected songs
            ])
            .split(frame.area());

        clock::render_time_display(frame, chunks[0], clock);
        clock::render_change_time_button(frame, chunks[1], ui_state);
        clock::render_format_toggle(frame, chunks[2], clock, ui_state);
        song::render_song_input(frame, chunks[3], songs, ui_state);
        song::render_song_list(frame, chunks[4], songs, ui_state);

        if let Some(picker) = &clock.picker {
            overlays::render_time_picker(frame, picker, clock.hour_format);
        }

        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::{HourFormat, TimePickerState};

    fn draw(clock: &ClockState, songs: &SongState, ui_state: &UiState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| AppView::render(f, clock, songs, ui_state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn clock(h: u32, m: u32, format: HourFormat) -> ClockState {
        ClockState::new(NaiveTime::from_hms_opt(h, m, 0).unwrap(), format)
    }

    #[test]
    fn renders_time_and_empty_song_list() {
        let screen = draw(&clock(0, 5, HourFormat::TwelveHour), &SongState::default(), &UiState::default());
        assert!(screen.contains("12:05 AM"));
        assert!(screen.contains("Change Time"));
        assert!(screen.contains("12 Hour"));
        assert!(screen.contains("24 Hour"));
        assert!(screen.contains("Select Song"));
        assert!(screen.contains("No songs picked"));
    }

    #[test]
    fn renders_selected_songs_in_order() {
        let songs = SongState {
            selected_songs: vec!["First Song".into(), "Second Song".into()],
            ..Default::default()
        };
        let screen = draw(&clock(18, 30, HourFormat::TwentyFourHour), &songs, &UiState::default());
        assert!(screen.contains("18:30"));
        let first = screen.find("First Song").unwrap();
        let second = screen.find("Second Song").unwrap();
        assert!(first < second);
        assert!(!screen.contains("No songs picked"));
    }

    #[test]
    fn loading_state_shows_selecting() {
        let songs = SongState {
            query: "Imagine".into(),
            is_loading: true,
            ..Default::default()
        };
        let screen = draw(&clock(9, 0, HourFormat::TwelveHour), &songs, &UiState::default());
        assert!(screen.contains("Selecting..."));
    }

    #[test]
    fn picker_overlay_shows_draft_in_current_format() {
        let mut state = clock(9, 0, HourFormat::TwelveHour);
        state.picker = Some(TimePickerState::open(NaiveTime::from_hms_opt(13, 45, 0).unwrap()));
        let screen = draw(&state, &SongState::default(), &UiState::default());
        assert!(screen.contains("01:45 PM"));
        assert!(screen.contains("Enter: Done"));
    }

    #[test]
    fn error_overlay_shows_message() {
        let ui_state = UiState {
            error_message: Some("Song input cannot be empty".into()),
            ..Default::default()
        };
        let screen = draw(&clock(9, 0, HourFormat::TwelveHour), &SongState::default(), &ui_state);
        assert!(screen.contains("Song input cannot be empty"));
    }

    #[test]
    fn help_popup_lists_keybindings() {
        let ui_state = UiState {
            show_help_popup: true,
            ..Default::default()
        };
        let screen = draw(&clock(9, 0, HourFormat::TwelveHour), &SongState::default(), &ui_state);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Toggle 12 / 24 hour"));
    }

    #[test]
    fn help_popup_only_lists_space_for_focused_controls() {
        let ui_state = UiState {
            show_help_popup: true,
            ..Default::default()
        };
        let screen = draw(&clock(9, 0, HourFormat::TwelveHour), &SongState::default(), &ui_state);
        assert!(!screen.contains("T / Space"));
        assert!(screen.contains("Enter / Space"));
        assert!(screen.contains("Use focused button or switch"));
    }
}
