//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame) {
    let overlay_area = centered_rect(54, 24, frame.area());

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Navigation"),
        help_line("i / n", "Itinerary / Info view"),
        help_line("q", "Quit application"),
        Line::from(""),
        section("Itinerary"),
        help_line("←/h, →/l", "Previous / next day"),
        help_line("1-9", "Jump to day"),
        Line::from(""),
        section("Info"),
        help_line("↑/k, ↓/j", "Select accommodation"),
        help_line("m", "Open hotel map"),
        help_line("1-9", "Open nearby place"),
        help_line("r / a", "Edit rate / amount"),
        help_line("Enter, Tab", "Apply edit"),
        help_line("Esc", "Cancel rate edit"),
        help_line("g", "Look up today's rate"),
        Line::from(""),
        help_line("?", "Toggle this help"),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, overlay_area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
        Span::raw(description.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_help_overlay_renders() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| render(frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Help"), "Should render help title");
        assert!(content.contains("Navigation"), "Should show navigation section");
        assert!(content.contains("Edit rate"), "Should show converter keys");
    }
}
