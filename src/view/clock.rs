//! Clock section rendering (time display, change button, format toggle)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, ClockState, HourFormat, UiState};
use super::utils::border_style;

pub fn render_time_display(frame: &mut Frame, area: Rect, clock: &ClockState) {
    let time = Paragraph::new(Line::from(Span::styled(
        clock.displayed_time(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Alarm ")
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(time, area);
}

pub fn render_change_time_button(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::Clock;
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let button = Paragraph::new(Span::styled(" Change Time ", style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style(focused)));
    frame.render_widget(button, area);
}

pub fn render_format_toggle(frame: &mut Frame, area: Rect, clock: &ClockState, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::FormatToggle;
    let is_24_hour = clock.hour_format.is_24_hour();

    let label_style = |active: bool| {
        if active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let switch = if is_24_hour { "[   ●]" } else { "[●   ]" };

    let line = Line::from(vec![
        Span::styled(HourFormat::TwelveHour.label(), label_style(!is_24_hour)),
        Span::raw("  "),
        Span::styled(switch, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(HourFormat::TwentyFourHour.label(), label_style(is_24_hour)),
    ]);

    let toggle = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style(focused)));
    frame.render_widget(toggle, area);
}
