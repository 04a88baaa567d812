//! Core type definitions for the application

use std::time::Instant;

/// Which section of the screen is currently focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Clock,
    FormatToggle,
    SongInput,
    SongList,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Clock => ActiveSection::FormatToggle,
            ActiveSection::FormatToggle => ActiveSection::SongInput,
            ActiveSection::SongInput => ActiveSection::SongList,
            ActiveSection::SongList => ActiveSection::Clock,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Clock => ActiveSection::SongList,
            ActiveSection::FormatToggle => ActiveSection::Clock,
            ActiveSection::SongInput => ActiveSection::FormatToggle,
            ActiveSection::SongList => ActiveSection::SongInput,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_cycle_both_ways() {
        let mut section = ActiveSection::default();
        for _ in 0..4 {
            section = section.next();
        }
        assert_eq!(section, ActiveSection::Clock);
        assert_eq!(ActiveSection::Clock.prev(), ActiveSection::SongList);
        assert_eq!(ActiveSection::SongInput.prev().next(), ActiveSection::SongInput);
    }
}
