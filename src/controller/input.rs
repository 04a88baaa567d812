//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Error message blocks all other interactions
        if model.has_error().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error().await;
            }
            return Ok(());
        }

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        // Time picker modal
        if model.is_time_picker_open().await {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => model.picker_increment().await,
                KeyCode::Down | KeyCode::Char('j') => model.picker_decrement().await,
                KeyCode::Right | KeyCode::Tab => model.picker_next_field().await,
                KeyCode::Left | KeyCode::BackTab => model.picker_prev_field().await,
                KeyCode::Enter => {
                    drop(model);
                    self.commit_time_picker().await;
                }
                KeyCode::Esc => model.close_time_picker().await,
                _ => {}
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        match key.code {
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
                return Ok(());
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
                return Ok(());
            }
            _ => {}
        }

        // Song input captures typing, so only Ctrl+Q quits from here
        if ui_state.active_section == ActiveSection::SongInput {
            let is_ctrl_q = matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
                && key.modifiers.contains(KeyModifiers::CONTROL);

            // Input is disabled while a confirmation is in flight
            if model.is_song_loading().await && !is_ctrl_q {
                return Ok(());
            }

            match key.code {
                KeyCode::Enter => {
                    drop(model);
                    self.submit_song().await;
                }
                KeyCode::Esc => model.clear_query().await,
                KeyCode::Backspace => model.backspace_query().await,
                KeyCode::Char(c) => {
                    if is_ctrl_q {
                        model.set_should_quit(true).await;
                    } else {
                        model.append_to_query(c).await;
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        match (ui_state.active_section, key.code) {
            (ActiveSection::Clock, KeyCode::Enter) => {
                drop(model);
                self.open_time_picker().await;
                return Ok(());
            }
            (ActiveSection::FormatToggle, KeyCode::Enter | KeyCode::Char(' ')) => {
                drop(model);
                self.toggle_hour_format().await;
                return Ok(());
            }
            (ActiveSection::SongList, KeyCode::Up) => {
                model.song_list_move_up().await;
                return Ok(());
            }
            (ActiveSection::SongList, KeyCode::Down) => {
                model.song_list_move_down().await;
                return Ok(());
            }
            _ => {}
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                drop(model);
                self.open_time_picker().await;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                drop(model);
                self.toggle_hour_format().await;
            }
            // Focus song input
            KeyCode::Char('s') | KeyCode::Char('S') => {
                model.set_active_section(ActiveSection::SongInput).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
