//! The UI renders the session into something visible and typeable.
//!
//! The field line mirrors what an input box would display, with the active section reversed the
//! way a selection would be. Below it the sections are listed with their current values.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use timemask::{Section, Session, TimeType};

/// Renders the field, the section list and the help bar.
pub fn draw(f: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = format!("{} ({}h)", session.format(), session.hour_format());
    let field = Paragraph::new(field_line(session))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(field, chunks[0]);

    let items: Vec<ListItem> = session
        .sections()
        .iter()
        .map(|section| {
            let style = if session.active() == Some(section.order) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let value = if section.is_empty() {
                "-"
            } else {
                section.value.as_str()
            };
            let line = format!("{:<7}{}  {value}", kind_label(section.kind), section.token);
            ListItem::new(line).style(style)
        })
        .collect();

    let status = if session.is_complete() {
        "Sections (complete)"
    } else {
        "Sections"
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(status));
    f.render_widget(list, chunks[1]);

    let help = "←/→ Tab: Section | 0-9 a/p: Type | Backspace: Clear | Esc: Done";
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[2]);
}

fn field_line(session: &Session) -> Line<'_> {
    let mut spans = Vec::new();
    for section in session.sections() {
        spans.push(Span::raw(section.start_separator.as_str()));
        spans.push(Span::styled(
            section.display(),
            section_style(section, session.active()),
        ));
        spans.push(Span::raw(section.end_separator.as_str()));
    }
    Line::from(spans)
}

fn section_style(section: &Section, active: Option<usize>) -> Style {
    let style = if section.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    if active == Some(section.order) {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn kind_label(kind: TimeType) -> &'static str {
    match kind {
        TimeType::Hour => "hour",
        TimeType::Minute => "minute",
        TimeType::Second => "second",
        TimeType::AmPm => "ampm",
    }
}
