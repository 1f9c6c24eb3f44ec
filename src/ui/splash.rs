use crate::ui::styles::{hint_style, quote_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const BANNER: &[&str] = &[
    "█▀▀ █▀█ █▀▀ █ █ █▀   █▀▀ █   █▀█ █ █ █",
    "█▀  █ █ █   █ █ ▀█   █▀  █   █ █ █▄█▄█",
    "▀   ▀▀▀ ▀▀▀ ▀▀▀ ▀▀   ▀   ▀▀▀ ▀▀▀  ▀ ▀ ",
];

/// Render the intro card
pub fn render_splash(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(8),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|row| Line::styled(*row, title_style()))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled("Pomodoro timer and scored to-do list", quote_style()));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Click or press any key to begin", hint_style()));

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
