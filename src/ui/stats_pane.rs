use crate::app::SessionController;
use crate::domain::Button;
use crate::ui::buttons::render_button;
use crate::ui::keybindings::render_keybindings;
use crate::ui::layout::create_secondary_layout;
use crate::ui::styles::{border_style, default_style, hint_style, score_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Days shown in the recent-history table
pub const RECENT_DAYS: u32 = 7;

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", label), hint_style()),
        Span::styled(value, default_style()),
    ])
}

/// Render the statistics screen
pub fn render_stats_pane(f: &mut Frame, app: &mut SessionController, area: Rect) {
    let (content_area, back_area, hints_area) = create_secondary_layout(area);
    let stats = app.stats.stats();
    let (hours, minutes) = stats.focus_hours_minutes();

    let mut lines = vec![
        Line::raw(""),
        stat_line("Total focus time", format!("{}h {}m", hours, minutes)),
        stat_line("Total sessions", stats.total_sessions.to_string()),
        stat_line("Longest streak", stats.longest_streak.to_string()),
        stat_line("Current streak", stats.current_streak.to_string()),
        Line::raw(""),
        Line::styled("  Last 7 days", title_style()),
        Line::styled(
            format!("  {:<5}{:<12}{:>10}{:>10}", "Day", "Date", "Sessions", "Points"),
            hint_style(),
        ),
    ];

    for day in stats.recent_days(app.stats.today(), RECENT_DAYS) {
        lines.push(Line::from(vec![
            Span::raw(format!(
                "  {:<5}{:<12}{:>10}",
                day.weekday(),
                day.date.format("%Y-%m-%d"),
                day.sessions
            )),
            Span::styled(format!("{:>10}", day.points), score_style()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Statistics ", title_style())),
    );
    f.render_widget(paragraph, content_area);

    render_button(f, app, Button::Back, back_area);
    render_keybindings(f, app.screen, hints_area);
}
