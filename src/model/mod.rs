//! Model module - Application state and data types
//!
//! - `types`: focus sections and UI state
//! - `clock`: alarm time, 12/24-hour mode and the time formatter
//! - `time_picker`: draft time edited by the picker overlay
//! - `song`: song selection result, resolver and song state
//! - `app_model`: main application model with state transitions

mod types;
mod clock;
mod time_picker;
mod song;
mod app_model;

pub use types::{ActiveSection, UiState};

pub use clock::{format_time, ClockState, HourFormat};

pub use time_picker::{PickerField, TimePickerState};

pub use song::{SongResolver, SongSelectionResult, SongState, StubSongResolver};

pub use app_model::AppModel;
