//! Controller module - Application logic and event handling
//!
//! - `input`: key event handling
//! - `clock`: time picker and 12/24-hour toggle
//! - `song`: the song confirmation flow

mod input;
mod clock;
mod song;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, SongResolver};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) resolver: Arc<dyn SongResolver>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, resolver: Arc<dyn SongResolver>) -> Self {
        Self { model, resolver }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}
