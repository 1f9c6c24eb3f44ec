use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the timer pane: border, date, status, blank, 5 digit rows, gauge, border
pub const TIMER_HEIGHT: u16 = 11;

/// Height of a bordered one-line button
pub const BUTTON_HEIGHT: u16 = 3;

/// Main screen layout structure
pub struct MainLayout {
    pub timer_area: Rect,
    pub buttons_area: Rect,
    pub list_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main screen layout
/// - Timer pane on top
/// - Button row
/// - Task list filling the rest
/// - Bottom bar: keybindings (1 row)
pub fn create_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TIMER_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        timer_area: chunks[0],
        buttons_area: chunks[1],
        list_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

/// Split a row into `count` equal-width button cells
pub fn split_buttons(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Content area and Back button position on a secondary screen
pub fn create_secondary_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    let back = Rect {
        width: chunks[1].width.min(14),
        ..chunks[1]
    };
    (chunks[0], back, chunks[2])
}

/// Create centered modal area of the given height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
