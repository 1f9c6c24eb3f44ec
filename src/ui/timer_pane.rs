use crate::app::SessionController;
use crate::domain::SESSIONS_PER_LONG_BREAK;
use crate::ui::styles::{
    border_style, break_style, default_style, focus_style, gauge_style, hint_style, score_style,
    title_style, warning_style,
};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Focus countdowns below this many seconds are drawn in the warning colour
const WARNING_SECS: f64 = 120.0;

/// Five-row glyphs for the countdown, 3 columns wide
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];
const COLON: [&str; 5] = [" ", "█", " ", "█", " "];

/// Render `MM:SS` as five rows of block glyphs
pub fn big_digits(display: &str) -> Vec<String> {
    let mut rows = vec![String::new(); 5];
    for (i, c) in display.chars().enumerate() {
        let glyph: [&str; 5] = match c {
            ':' => COLON,
            d => match d.to_digit(10) {
                Some(n) => DIGITS[n as usize],
                None => continue,
            },
        };
        for (row, part) in rows.iter_mut().zip(glyph) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

fn countdown_style(app: &SessionController) -> Style {
    let timer = &app.timer;
    if timer.is_break() {
        break_style()
    } else if timer.remaining() < WARNING_SECS {
        warning_style()
    } else {
        focus_style()
    }
}

/// Render the timer pane: clock, status line, countdown and progress
pub fn render_timer_pane(f: &mut Frame, app: &SessionController, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Focus Flow ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date and time
            Constraint::Length(1), // Status
            Constraint::Length(1),
            Constraint::Length(5), // Countdown
            Constraint::Length(1), // Gauge
        ])
        .split(inner);

    let now = Local::now();
    let clock = Paragraph::new(Line::styled(
        now.format("%A, %d %B %Y   %H:%M").to_string(),
        hint_style(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(clock, chunks[0]);

    let timer = &app.timer;
    let status = Line::from(vec![
        Span::styled(timer.get_status(), title_style()),
        Span::raw(format!(
            "   Session {}/{}   Completed: {}   ",
            timer.session_count(),
            SESSIONS_PER_LONG_BREAK,
            timer.sessions_completed()
        )),
        Span::styled(format!("Today: {} pts", app.stats.today_score()), score_style()),
    ]);
    f.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .style(default_style()),
        chunks[1],
    );

    let style = countdown_style(app);
    let digits: Vec<Line> = big_digits(&timer.display())
        .into_iter()
        .map(|row| Line::styled(row, style))
        .collect();
    f.render_widget(
        Paragraph::new(digits).alignment(Alignment::Center),
        chunks[3],
    );

    let total = f64::from(timer.total().max(1));
    let ratio = (1.0 - timer.remaining() / total).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(timer.display());
    f.render_widget(gauge, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_big_digits_shape() {
        let rows = big_digits("02:05");
        assert_eq!(rows.len(), 5);
        // Four 3-wide digits, a 1-wide colon and four separators
        assert!(rows.iter().all(|r| r.chars().count() == 4 * 3 + 1 + 4));
        assert_eq!(rows[0], "███ ███   ███ ███");
        assert_eq!(rows[1], "█ █   █ █ █ █ █  ");
    }

    #[test]
    fn test_big_digits_skips_unknown() {
        assert_eq!(big_digits("1x")[0], "  █");
    }
}
