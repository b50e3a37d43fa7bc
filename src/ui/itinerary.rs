//! Itinerary view rendering
//!
//! A row of day selectors followed by the schedule of the visible day.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{get_day_by_id, ItineraryDay};

/// Renders the itinerary view into `area`
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    render_day_tabs(frame, chunks[0], app);

    let day = app.navigator.active_day_id().and_then(get_day_by_id);
    render_day_panel(frame, chunks[1], day);
}

fn render_day_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, control) in app.navigator.day_controls().iter().enumerate() {
        let style = if app.navigator.is_day_highlighted(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", control.label), style));
        spans.push(Span::raw(" "));
    }

    let tabs = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, area);
}

fn render_day_panel(frame: &mut Frame, area: Rect, day: Option<&ItineraryDay>) {
    let Some(day) = day else {
        return;
    };

    let mut lines = Vec::with_capacity(day.stops.len() * 2);
    for stop in day.stops {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<7}", stop.time), Style::default().fg(Color::Yellow)),
            Span::styled(stop.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        if !stop.detail.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("       {}", stop.detail),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} · {} ", day.label, day.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(panel, area);
}
