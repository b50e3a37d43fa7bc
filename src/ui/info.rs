//! Info view rendering
//!
//! Shows the currency converter above the accommodation cards. Cards are
//! drawn from the info panel's last render, never straight from the dataset.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::accommodation::AccommodationCard;
use crate::app::{App, InputFocus};
use crate::currency::{BASE_CURRENCY, TARGET_CURRENCY};

/// Renders the info view into `area`
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    render_converter(frame, chunks[0], app);
    render_cards(frame, chunks[1], app);
}

/// Style for an input field, reversed while it has focus
fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn field_text(value: &str, focused: bool) -> String {
    if focused {
        format!(" {}_ ", value)
    } else {
        format!(" {} ", value)
    }
}

fn render_converter(frame: &mut Frame, area: Rect, app: &App) {
    let converter = &app.info.converter;
    let label = Style::default().fg(Color::DarkGray);
    let rate_focused = app.focus == InputFocus::Rate;
    let amount_focused = app.focus == InputFocus::Amount;

    let lines = vec![
        Line::from(vec![
            Span::styled("Rate    ", label),
            Span::raw(format!("1 {} =", BASE_CURRENCY)),
            Span::styled(
                field_text(converter.rate_input(), rate_focused),
                field_style(rate_focused),
            ),
            Span::raw(TARGET_CURRENCY),
            Span::styled("   [r] edit", label),
        ]),
        Line::from(vec![
            Span::styled("Amount  ", label),
            Span::styled(
                field_text(converter.amount_input(), amount_focused),
                field_style(amount_focused),
            ),
            Span::raw(TARGET_CURRENCY),
            Span::styled("   [a] edit", label),
        ]),
        Line::from(vec![
            Span::styled("Result  ", label),
            Span::styled(
                converter.result().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Rates change daily. [g] look up today's rate",
            label,
        )),
    ];

    let block = Block::default()
        .title(" Currency ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Lines for one card; the first line is the hotel name
fn card_lines(card: &AccommodationCard, selected: bool) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let name_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if selected { "▶ " } else { "  " };

    let mut lines = vec![
        Line::from(Span::styled(format!("{}{}", marker, card.name), name_style)),
        Line::from(vec![
            Span::styled("  For       ", label),
            Span::raw(card.applies_to.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Address   ", label),
            Span::raw(card.address.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Phone     ", label),
            Span::raw(card.phone.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Check-in  ", label),
            Span::raw(card.check_in.clone()),
            Span::styled("   Check-out ", label),
            Span::raw(card.check_out.clone()),
        ]),
        Line::from(vec![
            Span::styled("  Notes     ", label),
            Span::raw(card.notes.clone()),
        ]),
        Line::from(Span::styled("  Nearby", label)),
    ];

    for (i, place) in card.nearby.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("    [{}] ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(place.name.clone()),
            Span::styled(format!(" ({})", place.distance), label),
        ]));
    }

    if selected {
        lines.push(Line::from(Span::styled(
            "  [m] open hotel map   [1-9] open nearby place",
            label,
        )));
    }
    lines.push(Line::from(""));
    lines
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    let mut selected_offset = 0;

    for (i, card) in app.info.cards.iter().enumerate() {
        if i == app.selected_card {
            selected_offset = lines.len();
        }
        lines.extend(card_lines(card, i == app.selected_card));
    }

    let title = match app.info.last_refresh {
        Some(at) => format!(" Accommodations · updated {} ", at.format("%H:%M")),
        None => " Accommodations ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let scroll = u16::try_from(selected_offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StartupConfig;
    use crate::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn info_app() -> App {
        let config = StartupConfig {
            initial_view: "info-view".to_string(),
            ..StartupConfig::default()
        };
        App::bootstrap(&config, None)
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, app);
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_converter_shows_rate_with_four_decimals() {
        let app = info_app();
        let content = draw(&app, 100, 40);
        assert!(content.contains("4.5000"));
        assert!(content.contains("≈ 0 TWD"));
    }

    #[test]
    fn test_converter_shows_result() {
        let mut app = info_app();
        app.info.converter.set_amount("900");
        let content = draw(&app, 100, 40);
        assert!(content.contains("200.00"));
    }

    #[test]
    fn test_cards_render_in_dataset_order() {
        let app = info_app();
        let content = draw(&app, 100, 60);
        let first = content.find("+81 52-581-4545");
        let third = content.find("+81 52-243-5777");
        assert!(first.is_some() && third.is_some());
        assert!(first < third);
    }

    #[test]
    fn test_selected_card_scrolls_into_view() {
        let mut app = info_app();
        app.selected_card = 2;
        let content = draw(&app, 100, 20);
        assert!(content.contains("Dormy Inn PREMIUM Sakae"));
        assert!(!content.contains("+81 52-581-4545"), "First card scrolled away");
    }

    #[test]
    fn test_card_lines_list_nearby_places_in_order() {
        let app = info_app();
        let card = &app.info.cards[0];
        let text: Vec<String> = card_lines(card, false)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let seven = text.iter().position(|l| l.contains("7-Eleven"));
        let lawson = text.iter().position(|l| l.contains("Lawson"));
        assert!(seven.is_some() && lawson.is_some());
        assert!(seven < lawson);
    }

    #[test]
    fn test_focused_field_shows_cursor() {
        let mut app = info_app();
        app.focus = InputFocus::Amount;
        let content = draw(&app, 100, 40);
        assert!(content.contains("_"));
    }
}
