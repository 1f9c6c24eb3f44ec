use crate::app::SessionController;
use crate::dialog::DialogInput;
use crate::domain::{Button, Screen};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut SessionController, key: KeyEvent) -> Result<bool> {
    if app.has_dialog() {
        if let Some(input) = dialog_input(key) {
            app.dialog_input(input)?;
        }
        return Ok(false);
    }

    match app.screen {
        Screen::Splash => handle_splash(app, key),
        Screen::Main => handle_main(app, key),
        Screen::Instructions | Screen::Stats => handle_secondary(app, key),
    }
}

/// Any key leaves the splash card; `q` still quits
fn handle_splash(app: &mut SessionController, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('q') {
        return Ok(true);
    }
    app.enter_main();
    Ok(false)
}

fn handle_main(app: &mut SessionController, key: KeyEvent) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('z') if ctrl => app.undo()?,
        KeyCode::Char('c') if ctrl => return Ok(true),
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char(' ') => app.press_button(Button::StartStop),
        KeyCode::Char(c) => {
            if let Some(button) = Button::main_row().iter().find(|b| b.hotkey() == c) {
                app.press_button(*button);
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_secondary(app: &mut SessionController, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Esc | KeyCode::Backspace => app.press_button(Button::Back),
        KeyCode::Char(c) if c == Button::Back.hotkey() => app.press_button(Button::Back),
        _ => {}
    }
    Ok(false)
}

/// Translate a key into dialog input
fn dialog_input(key: KeyEvent) -> Option<DialogInput> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter if alt => Some(DialogInput::Newline),
        KeyCode::Char('j') if ctrl => Some(DialogInput::Newline),
        KeyCode::Enter => Some(DialogInput::Submit),
        KeyCode::Esc => Some(DialogInput::Cancel),
        KeyCode::Tab | KeyCode::BackTab => Some(DialogInput::NextField),
        KeyCode::Backspace => Some(DialogInput::Backspace),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(DialogInput::Char(c)),
        _ => None,
    }
}

/// Handle mouse events: left press/drag/release, right press and motion
pub fn handle_mouse(app: &mut SessionController, mouse: MouseEvent) -> Result<()> {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_left_down(col, row, Instant::now()),
        MouseEventKind::Down(MouseButton::Right) => app.on_right_down(col, row),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.on_mouse_move(col, row)
        }
        MouseEventKind::Up(MouseButton::Left) => app.on_left_up(col, row)?,
        _ => {}
    }
    Ok(())
}
