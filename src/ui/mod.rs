pub mod buttons;
pub mod instructions_pane;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod splash;
pub mod stats_pane;
pub mod styles;
pub mod timer_pane;
pub mod wrap;

use crate::app::SessionController;
use crate::domain::Screen;
use crate::hit_map::HitMap;
use buttons::render_button_row;
use instructions_pane::render_instructions_pane;
use keybindings::render_keybindings;
use layout::create_main_layout;
use list_pane::render_list_pane;
use modal::render_dialog;
use ratatui::Frame;
use splash::render_splash;
use stats_pane::render_stats_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the current screen and any open dialog,
/// and rebuilds the hit map for the next pointer event
pub fn render(f: &mut Frame, app: &mut SessionController) {
    let size = f.size();
    app.hit_map = HitMap::default();

    match app.screen {
        Screen::Splash => {
            render_splash(f, size);
        }
        Screen::Main => {
            let layout = create_main_layout(size);
            render_timer_pane(f, app, layout.timer_area);
            render_button_row(f, app, layout.buttons_area);
            render_list_pane(f, app, layout.list_area);
            render_keybindings(f, app.screen, layout.keybindings_area);
        }
        Screen::Instructions => render_instructions_pane(f, app, size),
        Screen::Stats => render_stats_pane(f, app, size),
    }

    if let Some(dialog) = app.dialog() {
        render_dialog(f, dialog, size);
    }
}
