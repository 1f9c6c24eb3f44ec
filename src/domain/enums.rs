/// Top-level screen shown by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Intro card shown at startup; any input continues
    Splash,
    /// Timer, buttons and task list
    Main,
    /// How-to-use page
    Instructions,
    /// Aggregate statistics and the last seven days
    Stats,
}

impl Screen {
    /// Whether the timer advances while this screen is shown
    pub fn runs_timer(&self) -> bool {
        matches!(self, Screen::Main)
    }
}

/// Clickable buttons on the main and secondary screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    StartStop,
    AddTask,
    Settings,
    Instructions,
    Stats,
    Reset,
    Back,
}

impl Button {
    /// Buttons in the order they appear on the main screen
    pub fn main_row() -> &'static [Button] {
        &[
            Button::StartStop,
            Button::AddTask,
            Button::Settings,
            Button::Instructions,
            Button::Stats,
            Button::Reset,
        ]
    }

    /// Label drawn on the button; Start/Stop depends on the timer state
    pub fn label(&self, timer_running: bool) -> &'static str {
        match self {
            Button::StartStop if timer_running => "Stop",
            Button::StartStop => "Start",
            Button::AddTask => "Add Task",
            Button::Settings => "Settings",
            Button::Instructions => "Instructions",
            Button::Stats => "Stats",
            Button::Reset => "Reset",
            Button::Back => "← Back",
        }
    }

    /// Keyboard shortcut shown next to the label
    pub fn hotkey(&self) -> char {
        match self {
            Button::StartStop => 's',
            Button::AddTask => 'a',
            Button::Settings => 'c',
            Button::Instructions => 'i',
            Button::Stats => 't',
            Button::Reset => 'r',
            Button::Back => 'b',
        }
    }
}
