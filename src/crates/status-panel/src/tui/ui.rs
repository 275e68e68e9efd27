//! Terminal rendering of the status panel

use crate::locale::PanelStrings;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const CONTAINER_HEIGHT: u16 = 6;
const CONTAINER_MIN_WIDTH: u16 = 36;
const FOOTER_HINT: &str = "q quit  r remount";

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub strings: &'static PanelStrings,
    pub display_text: String,
}

/// Render the panel frame
pub fn draw(f: &mut Frame, view: &PanelView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Top margin
            Constraint::Length(2),                // Heading
            Constraint::Length(CONTAINER_HEIGHT), // Container
            Constraint::Min(0),
            Constraint::Length(1),                // Footer
        ])
        .split(f.area());

    draw_heading(f, view, chunks[1]);
    draw_container(f, view, chunks[2]);
    draw_footer(f, chunks[4]);
}

fn draw_heading(f: &mut Frame, view: &PanelView, area: Rect) {
    let heading = Paragraph::new(view.strings.heading)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    f.render_widget(heading, area);
}

/// Bordered box holding the label and the dynamic value
fn draw_container(f: &mut Frame, view: &PanelView, area: Rect) {
    let content_width = Line::from(view.strings.label)
        .width()
        .max(Line::from(view.display_text.as_str()).width());
    let width = (content_width as u16)
        .saturating_add(6)
        .max(CONTAINER_MIN_WIDTH);
    let area = centered_horizontally(area, width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray))
        .padding(Padding::horizontal(2));

    let content = vec![
        Line::from(view.strings.label).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(view.display_text.as_str()).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_HINT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}

fn centered_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
