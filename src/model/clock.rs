//! Alarm time state and the time formatter

use chrono::{NaiveTime, Timelike};

use super::time_picker::TimePickerState;

/// 12/24-hour display mode for the alarm time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HourFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl HourFormat {
    pub fn is_24_hour(self) -> bool {
        self == HourFormat::TwentyFourHour
    }

    pub fn toggle(self) -> Self {
        match self {
            HourFormat::TwelveHour => HourFormat::TwentyFourHour,
            HourFormat::TwentyFourHour => HourFormat::TwelveHour,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HourFormat::TwelveHour => "12 Hour",
            HourFormat::TwentyFourHour => "24 Hour",
        }
    }
}

impl From<bool> for HourFormat {
    fn from(is_24_hour: bool) -> Self {
        if is_24_hour {
            HourFormat::TwentyFourHour
        } else {
            HourFormat::TwelveHour
        }
    }
}

/// Render a time as `HH:MM` (24-hour) or `HH:MM AM|PM` (12-hour).
///
/// Midnight is `12:xx AM` and noon is `12:xx PM` in 12-hour mode.
pub fn format_time(time: NaiveTime, use_24_hour: bool) -> String {
    let hours = time.hour();
    let minutes = time.minute();

    if use_24_hour {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        let hour12 = match hours % 12 {
            0 => 12,
            h => h,
        };
        let ampm = if hours >= 12 { "PM" } else { "AM" };
        format!("{:02}:{:02} {}", hour12, minutes, ampm)
    }
}

/// Drop seconds and sub-second precision; the alarm only cares about minutes.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Clock section state: the chosen time, the display mode and the open picker (if any)
#[derive(Clone, Debug)]
pub struct ClockState {
    pub selected_time: NaiveTime,
    pub hour_format: HourFormat,
    pub picker: Option<TimePickerState>,
}

impl ClockState {
    pub fn new(selected_time: NaiveTime, hour_format: HourFormat) -> Self {
        Self {
            selected_time: truncate_to_minute(selected_time),
            hour_format,
            picker: None,
        }
    }

    pub fn displayed_time(&self) -> String {
        format_time(self.selected_time, self.hour_format.is_24_hour())
    }
}
