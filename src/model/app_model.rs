//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};
use chrono::NaiveTime;
use tokio::sync::Mutex;

use super::clock::{ClockState, HourFormat};
use super::song::SongState;
use super::time_picker::TimePickerState;
use super::types::{ActiveSection, UiState};

const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Main application model containing all state
pub struct AppModel {
    clock_state: Arc<Mutex<ClockState>>,
    song_state: Arc<Mutex<SongState>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(initial_time: NaiveTime, hour_format: HourFormat) -> Self {
        Self {
            clock_state: Arc::new(Mutex::new(ClockState::new(initial_time, hour_format))),
            song_state: Arc::new(Mutex::new(SongState::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Clock
    // ========================================================================

    pub async fn get_clock_state(&self) -> ClockState {
        self.clock_state.lock().await.clone()
    }

    pub async fn toggle_hour_format(&self) -> HourFormat {
        let mut clock = self.clock_state.lock().await;
        clock.hour_format = clock.hour_format.toggle();
        clock.hour_format
    }

    pub async fn is_time_picker_open(&self) -> bool {
        self.clock_state.lock().await.picker.is_some()
    }

    pub async fn open_time_picker(&self) {
        let mut clock = self.clock_state.lock().await;
        clock.picker = Some(TimePickerState::open(clock.selected_time));
    }

    pub async fn close_time_picker(&self) {
        self.clock_state.lock().await.picker = None;
    }

    pub async fn picker_increment(&self) {
        if let Some(picker) = self.clock_state.lock().await.picker.as_mut() {
            picker.increment();
        }
    }

    pub async fn picker_decrement(&self) {
        if let Some(picker) = self.clock_state.lock().await.picker.as_mut() {
            picker.decrement();
        }
    }

    pub async fn picker_next_field(&self) {
        if let Some(picker) = self.clock_state.lock().await.picker.as_mut() {
            picker.next_field();
        }
    }

    pub async fn picker_prev_field(&self) {
        if let Some(picker) = self.clock_state.lock().await.picker.as_mut() {
            picker.prev_field();
        }
    }

    /// Close the picker and apply its draft. Returns the new time, if a picker was open.
    pub async fn commit_time_picker(&self) -> Option<NaiveTime> {
        let mut clock = self.clock_state.lock().await;
        let picker = clock.picker.take()?;
        clock.selected_time = picker.commit();
        Some(clock.selected_time)
    }

    // ========================================================================
    // Song selection
    // ========================================================================

    pub async fn get_song_state(&self) -> SongState {
        self.song_state.lock().await.clone()
    }

    pub async fn append_to_query(&self, c: char) {
        self.song_state.lock().await.query.push(c);
    }

    pub async fn backspace_query(&self) {
        self.song_state.lock().await.query.pop();
    }

    pub async fn clear_query(&self) {
        self.song_state.lock().await.query.clear();
    }

    pub async fn is_song_loading(&self) -> bool {
        self.song_state.lock().await.is_loading
    }

    /// Enter the loading state for the current query.
    ///
    /// Returns `None` without touching state when the query is blank or a
    /// confirmation is already in flight.
    pub async fn begin_song_confirmation(&self) -> Option<String> {
        let mut songs = self.song_state.lock().await;
        if songs.is_loading || songs.query.trim().is_empty() {
            return None;
        }
        songs.is_loading = true;
        Some(songs.query.clone())
    }

    /// Record a confirmed song and reset the input. Returns the updated list.
    pub async fn apply_song_selection(&self, song_name: String) -> Vec<String> {
        let mut songs = self.song_state.lock().await;
        songs.selected_songs.push(song_name);
        songs.query.clear();
        songs.selected_songs.clone()
    }

    pub async fn finish_song_confirmation(&self) {
        self.song_state.lock().await.is_loading = false;
    }

    pub async fn song_list_move_up(&self) {
        let mut songs = self.song_state.lock().await;
        songs.selected_index = songs.selected_index.saturating_sub(1);
    }

    pub async fn song_list_move_down(&self) {
        let mut songs = self.song_state.lock().await;
        if songs.selected_index + 1 < songs.selected_songs.len() {
            songs.selected_index += 1;
        }
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        self.ui_state.lock().await.active_section = section;
    }

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed() >= ERROR_DISPLAY_DURATION {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn model() -> AppModel {
        AppModel::new(at(6, 45), HourFormat::TwelveHour)
    }

    async fn type_query(model: &AppModel, text: &str) {
        for c in text.chars() {
            model.append_to_query(c).await;
        }
    }

    #[tokio::test]
    async fn toggle_changes_displayed_time() {
        let model = model();
        assert_eq!(model.get_clock_state().await.displayed_time(), "06:45 AM");
        assert_eq!(model.toggle_hour_format().await, HourFormat::TwentyFourHour);
        assert_eq!(model.get_clock_state().await.displayed_time(), "06:45");
    }

    #[tokio::test]
    async fn picker_commit_replaces_selected_time() {
        let model = model();
        model.open_time_picker().await;
        assert!(model.is_time_picker_open().await);
        model.picker_increment().await;
        model.picker_next_field().await;
        model.picker_decrement().await;

        assert_eq!(model.commit_time_picker().await, Some(at(7, 44)));
        assert!(!model.is_time_picker_open().await);
        assert_eq!(model.get_clock_state().await.selected_time, at(7, 44));
    }

    #[tokio::test]
    async fn picker_cancel_keeps_selected_time() {
        let model = model();
        model.open_time_picker().await;
        model.picker_increment().await;
        model.close_time_picker().await;

        assert_eq!(model.get_clock_state().await.selected_time, at(6, 45));
        assert_eq!(model.commit_time_picker().await, None);
    }

    #[tokio::test]
    async fn begin_confirmation_ignores_blank_query() {
        let model = model();
        assert_eq!(model.begin_song_confirmation().await, None);
        type_query(&model, "   ").await;
        assert_eq!(model.begin_song_confirmation().await, None);
        assert!(!model.is_song_loading().await);
    }

    #[tokio::test]
    async fn begin_confirmation_guards_in_flight_request() {
        let model = model();
        type_query(&model, "Clocks").await;

        assert_eq!(model.begin_song_confirmation().await.as_deref(), Some("Clocks"));
        assert!(model.is_song_loading().await);
        assert_eq!(model.begin_song_confirmation().await, None);

        model.finish_song_confirmation().await;
        assert_eq!(model.begin_song_confirmation().await.as_deref(), Some("Clocks"));
    }

    #[tokio::test]
    async fn song_list_selection_stays_in_bounds() {
        let model = model();
        model.song_list_move_down().await;
        assert_eq!(model.get_song_state().await.selected_index, 0);

        model.apply_song_selection("A".into()).await;
        model.apply_song_selection("B".into()).await;
        model.song_list_move_down().await;
        model.song_list_move_down().await;
        assert_eq!(model.get_song_state().await.selected_index, 1);
        model.song_list_move_up().await;
        model.song_list_move_up().await;
        assert_eq!(model.get_song_state().await.selected_index, 0);
    }

    #[tokio::test]
    async fn fresh_errors_survive_auto_clear() {
        let model = model();
        model.set_error("boom".into()).await;
        model.auto_clear_old_errors().await;
        assert!(model.has_error().await);
        model.clear_error().await;
        assert!(!model.has_error().await);
    }
}
