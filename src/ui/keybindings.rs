use crate::domain::Screen;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

fn hints(screen: Screen) -> Vec<Span<'static>> {
    match screen {
        Screen::Splash => vec![Span::raw(" any key continue   "), Span::raw("q quit")],
        Screen::Main => vec![
            Span::raw(" s start/stop   "),
            Span::raw("a add   "),
            Span::raw("c settings   "),
            Span::raw("i help   "),
            Span::raw("t stats   "),
            Span::raw("r reset   "),
            Span::raw("Ctrl+Z undo delete   "),
            Span::raw("right-click delete   "),
            Span::raw("q quit"),
        ],
        Screen::Instructions | Screen::Stats => {
            vec![Span::raw(" Esc/b back   "), Span::raw("q quit")]
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, screen: Screen, area: Rect) {
    let paragraph = Paragraph::new(Line::from(hints(screen))).style(hint_style());
    f.render_widget(paragraph, area);
}
