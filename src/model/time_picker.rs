//! Terminal time picker used by the "Change Time" button

use chrono::{NaiveTime, Timelike};

use super::clock::truncate_to_minute;

/// Which field of the picker is being edited
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PickerField {
    #[default]
    Hour,
    Minute,
}

impl PickerField {
    pub fn next(self) -> Self {
        match self {
            PickerField::Hour => PickerField::Minute,
            PickerField::Minute => PickerField::Hour,
        }
    }
}

/// Draft time being edited; nothing is applied until `commit`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimePickerState {
    pub draft: NaiveTime,
    pub field: PickerField,
}

impl TimePickerState {
    pub fn open(time: NaiveTime) -> Self {
        Self {
            draft: truncate_to_minute(time),
            field: PickerField::Hour,
        }
    }

    pub fn increment(&mut self) {
        self.step(1);
    }

    pub fn decrement(&mut self) {
        self.step(-1);
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    // Only two fields, so backwards is the same as forwards
    pub fn prev_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn commit(&self) -> NaiveTime {
        self.draft
    }

    // Fields wrap independently: 59 -> 00 minutes leaves the hour alone.
    fn step(&mut self, delta: i32) {
        let mut hour = self.draft.hour() as i32;
        let mut minute = self.draft.minute() as i32;
        match self.field {
            PickerField::Hour => hour = (hour + delta).rem_euclid(24),
            PickerField::Minute => minute = (minute + delta).rem_euclid(60),
        }
        if let Some(t) = NaiveTime::from_hms_opt(hour as u32, minute as u32, 0) {
            self.draft = t;
        }
    }
}
