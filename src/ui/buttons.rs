use crate::app::SessionController;
use crate::domain::Button;
use crate::ui::layout::split_buttons;
use crate::ui::styles::{border_style, button_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one button and register it for clicks
pub fn render_button(f: &mut Frame, app: &mut SessionController, button: Button, area: Rect) {
    let label = format!(
        " {} ({}) ",
        button.label(app.timer.is_running()),
        button.hotkey()
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(label, button_style())))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        );
    f.render_widget(paragraph, area);
    app.hit_map.buttons.push((area, button));
}

/// Main screen button row
pub fn render_button_row(f: &mut Frame, app: &mut SessionController, area: Rect) {
    let buttons = Button::main_row();
    for (button, cell) in buttons.iter().zip(split_buttons(area, buttons.len())) {
        render_button(f, app, *button, cell);
    }
}
