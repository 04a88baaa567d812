//! Overlay rendering (time picker, error notification, help popup)

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{format_time, HourFormat, PickerField, TimePickerState, UiState};
use super::utils::popup_area;

pub fn render_time_picker(frame: &mut Frame, picker: &TimePickerState, hour_format: HourFormat) {
    let area = popup_area(frame.area(), 36, 7);
    frame.render_widget(Clear, area);

    let draft = format_time(picker.draft, hour_format.is_24_hour());
    // "HH:MM" or "HH:MM AM": hour is [0..2), minute is [3..5)
    let (hour, rest) = draft.split_at(2);
    let (colon, rest) = rest.split_at(1);
    let (minute, suffix) = rest.split_at(2);

    let field_style = |field: PickerField| {
        if picker.field == field {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(hour.to_string(), field_style(PickerField::Hour)),
            Span::raw(colon.to_string()),
            Span::styled(minute.to_string(), field_style(PickerField::Minute)),
            Span::styled(suffix.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Enter: Done   Esc: Cancel", Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Change Time (↑↓ ←→) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(widget, area);
}

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        // Lines the message takes once wrapped
        let error_line_count = error_msg.chars().count().div_ceil(inner_width) as u16;
        let popup = popup_area(area, popup_width, 2 + error_line_count.max(1));

        frame.render_widget(Clear, popup);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let keybindings = [
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move in song list"),
        ("S", "Focus song input"),
        ("", ""),
        ("", "── Alarm ──"),
        ("C", "Change time"),
        ("T", "Toggle 12 / 24 hour"),
        ("Enter / Space", "Use focused button or switch"),
        ("", ""),
        ("", "── Song ──"),
        ("Enter", "Confirm song"),
        ("Esc", "Clear input"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q / Ctrl+Q", "Quit"),
    ];

    let area = popup_area(frame.area(), 62, keybindings.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, area);
}
