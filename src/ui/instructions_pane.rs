use crate::app::SessionController;
use crate::domain::Button;
use crate::ui::buttons::render_button;
use crate::ui::keybindings::render_keybindings;
use crate::ui::layout::create_secondary_layout;
use crate::ui::styles::{border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const INSTRUCTIONS: &[&str] = &[
    "",
    "Timer",
    "  Start/Stop (s or space) runs the countdown. Focus for a session, then take the break.",
    "  Every fourth session is followed by a 30 minute long break.",
    "  Reset (r) goes back to a fresh focus session at the start of the cycle.",
    "  Settings (c) change the focus and break lengths in minutes.",
    "",
    "Tasks",
    "  Add Task (a) opens the editor. Alt+Enter or Ctrl+J adds a new line, Tab moves to points.",
    "  Click a checkbox to complete a task and earn its points for today.",
    "  Unticking a task takes its points back out of today's score.",
    "  Double-click a task to edit it.",
    "  Drag a task onto another to move it there.",
    "  Right-click a task to delete it. Ctrl+Z brings back the last deleted task.",
    "",
    "Stats (t) shows totals, streaks and the last seven days.",
    "Press q to quit. Everything is saved as you go.",
];

/// Render the how-to-use screen
pub fn render_instructions_pane(f: &mut Frame, app: &mut SessionController, area: Rect) {
    let (content_area, back_area, hints_area) = create_secondary_layout(area);

    let lines: Vec<Line> = INSTRUCTIONS
        .iter()
        .map(|text| {
            if !text.is_empty() && !text.starts_with(' ') {
                Line::styled(*text, title_style())
            } else {
                Line::styled(*text, default_style())
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Instructions ", title_style())),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, content_area);

    render_button(f, app, Button::Back, back_area);
    render_keybindings(f, app.screen, hints_area);
}
