use crate::audio::AudioCue;
use crate::config::{AppConfig, SessionDurations};
use crate::dialog::{Dialog, DialogInput, DialogResult};
use crate::domain::{random_quote, Button, PomodoroTimer, Screen};
use crate::hit_map::HitMap;
use crate::notifications;
use crate::persistence::Persistence;
use crate::store::{StatsStore, TaskStore};
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Left button held down on a task, not yet resolved into click or drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub origin: (u16, u16),
    pub index: usize,
    /// Press started on the task's checkbox
    pub on_checkbox: bool,
}

pub struct SessionController {
    pub timer: PomodoroTimer,
    pub tasks: TaskStore,
    pub stats: StatsStore,
    pub config: AppConfig,
    pub screen: Screen,
    /// Clickable regions of the last drawn frame
    pub hit_map: HitMap,
    pub hover: Option<usize>,
    pub dragging: Option<usize>,
    dialog: Option<Dialog>,
    queued_dialogs: VecDeque<Dialog>,
    press: Option<Press>,
    last_click: Option<(usize, Instant)>,
    persistence: Rc<dyn Persistence>,
    audio: Box<dyn AudioCue>,
}

impl SessionController {
    pub fn new(
        config: AppConfig,
        tasks: TaskStore,
        stats: StatsStore,
        persistence: Rc<dyn Persistence>,
        audio: Box<dyn AudioCue>,
    ) -> Self {
        Self {
            timer: PomodoroTimer::new(&config.durations),
            tasks,
            stats,
            config,
            screen: Screen::Splash,
            hit_map: HitMap::default(),
            hover: None,
            dragging: None,
            dialog: None,
            queued_dialogs: VecDeque::new(),
            press: None,
            last_click: None,
            persistence,
            audio,
        }
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        self.press = None;
        self.dragging = None;
        if self.dialog.is_some() {
            self.queued_dialogs.push_back(dialog);
        } else {
            self.dialog = Some(dialog);
        }
    }

    /// Re-check an index captured earlier against the current list
    fn live_index(&self, index: usize, action: &str) -> Option<usize> {
        if index < self.tasks.len() {
            Some(index)
        } else {
            warn!(index, len = self.tasks.len(), action, "Ignoring stale task index");
            None
        }
    }

    /// Advance the timer by `dt` seconds and handle a phase completion
    pub fn tick(&mut self, dt: f64) -> Result<()> {
        if !self.screen.runs_timer() || self.dialog.is_some() {
            return Ok(());
        }
        if !self.timer.update(dt) {
            return Ok(());
        }

        let was_break = self.timer.is_break();
        let quote = random_quote(&mut rand::thread_rng());
        self.audio.play_random_alarm();
        notifications::notify_session_complete(was_break, quote);
        self.open_dialog(Dialog::session_complete(was_break, quote));

        if was_break {
            info!("Break finished");
            self.timer.start_focus_session();
        } else {
            info!(secs = self.timer.total(), "Focus session finished");
            self.stats
                .record_session(u64::from(self.timer.total()))
                .context("Failed to record session")?;
            self.timer.complete_session();
        }
        Ok(())
    }

    pub fn press_button(&mut self, button: Button) {
        debug!(?button, "Button pressed");
        match button {
            Button::StartStop => self.timer.toggle_running(),
            Button::AddTask => self.open_dialog(Dialog::new_task()),
            Button::Settings => self.open_dialog(Dialog::settings(&self.config.durations)),
            Button::Instructions => self.show(Screen::Instructions),
            Button::Stats => self.show(Screen::Stats),
            Button::Reset => self.timer.reset_full(),
            Button::Back => self.show(Screen::Main),
        }
    }

    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
        self.hover = None;
        self.press = None;
        self.dragging = None;
    }

    /// Leave the splash card
    pub fn enter_main(&mut self) {
        if self.screen == Screen::Splash {
            self.show(Screen::Main);
        }
    }

    pub fn on_left_down(&mut self, col: u16, row: u16, now: Instant) {
        if self.dialog.is_some() {
            return;
        }
        if self.screen == Screen::Splash {
            self.enter_main();
            return;
        }
        if let Some(button) = self.hit_map.button_at(col, row) {
            self.press_button(button);
            return;
        }
        if self.screen != Screen::Main {
            return;
        }
        let Some(index) = self.hit_map.tasks.task_at(col, row) else {
            return;
        };

        let window = Duration::from_millis(self.config.input.double_click_ms);
        if let Some((last, at)) = self.last_click {
            if last == index && now.saturating_duration_since(at) <= window {
                debug!(index, "Double click");
                self.last_click = None;
                self.press = None;
                self.open_editor(index);
                return;
            }
        }

        self.last_click = Some((index, now));
        self.press = Some(Press {
            origin: (col, row),
            index,
            on_checkbox: self.hit_map.tasks.in_checkbox(index, col, row),
        });
    }

    /// Pointer moved, with or without the left button held
    pub fn on_mouse_move(&mut self, col: u16, row: u16) {
        if self.dialog.is_some() || self.screen != Screen::Main {
            self.hover = None;
            return;
        }
        self.hover = self.hit_map.tasks.task_at(col, row);

        let Some(press) = self.press else {
            return;
        };
        if self.dragging.is_some() || self.hover.is_none() {
            return;
        }
        let threshold = self.config.input.drag_threshold;
        let dx = col.abs_diff(press.origin.0);
        let dy = row.abs_diff(press.origin.1);
        if dx > threshold || dy > threshold {
            debug!(index = press.index, "Drag started");
            self.dragging = Some(press.index);
        }
    }

    pub fn on_left_up(&mut self, col: u16, row: u16) -> Result<()> {
        let press = self.press.take();
        let dragging = self.dragging.take();
        if self.dialog.is_some() {
            return Ok(());
        }
        let Some(press) = press else {
            return Ok(());
        };

        let target = self.hit_map.tasks.task_at(col, row);
        if let (Some(origin), Some(target)) = (dragging, target) {
            if origin != target {
                return self.reorder(origin, target);
            }
        }
        if press.on_checkbox {
            self.toggle_task(press.index)?;
        }
        Ok(())
    }

    /// Secondary click asks to delete the task under the pointer
    pub fn on_right_down(&mut self, col: u16, row: u16) {
        if self.dialog.is_some() || self.screen != Screen::Main {
            return;
        }
        let Some(index) = self.hit_map.tasks.task_at(col, row) else {
            return;
        };
        if let Some(task) = self.tasks.get(index) {
            let dialog = Dialog::confirm_delete(index, &task.text);
            self.open_dialog(dialog);
        }
    }

    fn open_editor(&mut self, index: usize) {
        let Some(task) = self.tasks.get(index) else {
            warn!(index, "Ignoring edit of missing task");
            return;
        };
        let dialog = Dialog::edit_task(Some(index), &task.text, task.score);
        self.open_dialog(dialog);
    }

    /// Flip completion and move the task's points in or out of today's score
    pub fn toggle_task(&mut self, index: usize) -> Result<()> {
        let Some(index) = self.live_index(index, "toggle") else {
            return Ok(());
        };
        let outcome = self.tasks.toggle_complete(index)?;
        if outcome.was_complete {
            self.stats.deduct_task_score(outcome.score)?;
        } else {
            self.stats.record_task_completion(outcome.score)?;
        }
        Ok(())
    }

    fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let (Some(from), Some(to)) = (self.live_index(from, "reorder"), self.live_index(to, "reorder"))
        else {
            return Ok(());
        };
        self.tasks.reorder(from, to)?;
        Ok(())
    }

    /// Restore the most recently deleted task, if any
    pub fn undo(&mut self) -> Result<()> {
        if let Some(task) = self.tasks.undo_delete()? {
            info!(text = %task.text, "Undid delete");
        }
        Ok(())
    }

    /// Persist new durations and hand them to the timer.
    ///
    /// Only an untouched focus countdown is resized; anything already
    /// started keeps its length until the next reset or phase change.
    pub fn apply_settings(&mut self, durations: SessionDurations) -> Result<()> {
        self.persistence
            .save_config(&durations)
            .context("Failed to save settings")?;
        self.config.durations = durations;
        self.timer.configure(&durations);
        if self.timer.is_waiting() && !self.timer.is_break() {
            self.timer.reset(Some(durations.focus_secs()));
        }
        info!(
            session_minutes = durations.session_minutes,
            break_minutes = durations.break_minutes,
            "Applied settings"
        );
        Ok(())
    }

    /// Feed one input to the open dialog and apply its result if it resolved
    pub fn dialog_input(&mut self, input: DialogInput) -> Result<()> {
        let Some(dialog) = self.dialog.as_mut() else {
            return Ok(());
        };
        let Some(result) = dialog.handle(input) else {
            return Ok(());
        };
        self.dialog = self.queued_dialogs.pop_front();
        self.resolve(result)
    }

    fn resolve(&mut self, result: DialogResult) -> Result<()> {
        match result {
            DialogResult::TaskSubmitted {
                index: None,
                text,
                score,
            } => {
                self.tasks.add_task(&text, score)?;
            }
            DialogResult::TaskSubmitted {
                index: Some(index),
                text,
                score,
            } => {
                if let Some(index) = self.live_index(index, "edit") {
                    self.tasks.edit_task(index, &text, score)?;
                }
            }
            DialogResult::SettingsSubmitted(durations) => self.apply_settings(durations)?,
            DialogResult::DeleteConfirmed { index } => {
                if let Some(index) = self.live_index(index, "delete") {
                    self.tasks.delete_task(index)?;
                }
            }
            DialogResult::Dismissed => self.audio.stop(),
            DialogResult::Cancelled => {}
        }
        Ok(())
    }

    /// Write both stores on the way out
    pub fn save_all(&self) -> Result<()> {
        self.tasks.save().context("Failed to save tasks")?;
        self.stats.save().context("Failed to save stats")?;
        Ok(())
    }
}
