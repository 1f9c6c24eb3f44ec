use crate::config::{SessionDurations, MAX_MINUTES};
use crate::domain::DEFAULT_TASK_SCORE;

/// Keyboard input already translated from terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogInput {
    Char(char),
    Newline,
    Backspace,
    NextField,
    Submit,
    Cancel,
}

/// How a dialog resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// New task (`index == None`) or edit of the task at `index`
    TaskSubmitted {
        index: Option<usize>,
        text: String,
        score: u32,
    },
    SettingsSubmitted(SessionDurations),
    DeleteConfirmed { index: usize },
    /// Session-complete notice acknowledged
    Dismissed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Text,
    Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEditor {
    pub index: Option<usize>,
    pub text: String,
    pub score: String,
    pub field: EditorField,
    pub error: Option<&'static str>,
}

impl TaskEditor {
    fn handle(&mut self, input: DialogInput) -> Option<DialogResult> {
        match input {
            DialogInput::Char(c) => {
                match self.field {
                    EditorField::Text => self.text.push(c),
                    EditorField::Score => self.score.push(c),
                }
                None
            }
            DialogInput::Newline => {
                if self.field == EditorField::Text {
                    self.text.push('\n');
                }
                None
            }
            DialogInput::Backspace => {
                match self.field {
                    EditorField::Text => self.text.pop(),
                    EditorField::Score => self.score.pop(),
                };
                None
            }
            DialogInput::NextField => {
                self.field = match self.field {
                    EditorField::Text => EditorField::Score,
                    EditorField::Score => EditorField::Text,
                };
                None
            }
            DialogInput::Submit => {
                let text = self.text.trim();
                if text.is_empty() {
                    self.error = Some("Task description can't be empty");
                    return None;
                }
                match parse_positive(&self.score, u32::MAX) {
                    Some(score) => Some(DialogResult::TaskSubmitted {
                        index: self.index,
                        text: text.to_string(),
                        score,
                    }),
                    None => {
                        self.error = Some("Points must be a whole number above zero");
                        self.field = EditorField::Score;
                        None
                    }
                }
            }
            DialogInput::Cancel => Some(DialogResult::Cancelled),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Focus,
    Break,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub focus_minutes: String,
    pub break_minutes: String,
    pub field: SettingsField,
    pub error: Option<&'static str>,
}

impl SettingsForm {
    fn active_mut(&mut self) -> &mut String {
        match self.field {
            SettingsField::Focus => &mut self.focus_minutes,
            SettingsField::Break => &mut self.break_minutes,
        }
    }

    fn handle(&mut self, input: DialogInput) -> Option<DialogResult> {
        match input {
            DialogInput::Char(c) => {
                self.active_mut().push(c);
                None
            }
            DialogInput::Backspace => {
                self.active_mut().pop();
                None
            }
            DialogInput::Newline | DialogInput::NextField => {
                self.field = match self.field {
                    SettingsField::Focus => SettingsField::Break,
                    SettingsField::Break => SettingsField::Focus,
                };
                None
            }
            DialogInput::Submit => {
                let focus = parse_positive(&self.focus_minutes, MAX_MINUTES);
                let rest = parse_positive(&self.break_minutes, MAX_MINUTES);
                match (focus, rest) {
                    (Some(session_minutes), Some(break_minutes)) => {
                        Some(DialogResult::SettingsSubmitted(SessionDurations {
                            session_minutes,
                            break_minutes,
                        }))
                    }
                    _ => {
                        self.error = Some("Minutes must be whole numbers between 1 and 1440");
                        None
                    }
                }
            }
            DialogInput::Cancel => Some(DialogResult::Cancelled),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    TaskEditor(TaskEditor),
    Settings(SettingsForm),
    ConfirmDelete { index: usize, preview: String },
    SessionComplete { was_break: bool, quote: &'static str },
}

impl Dialog {
    pub fn new_task() -> Self {
        Self::edit_task(None, "", DEFAULT_TASK_SCORE)
    }

    pub fn edit_task(index: Option<usize>, text: &str, score: u32) -> Self {
        Dialog::TaskEditor(TaskEditor {
            index,
            text: text.to_string(),
            score: score.to_string(),
            field: EditorField::Text,
            error: None,
        })
    }

    pub fn settings(current: &SessionDurations) -> Self {
        Dialog::Settings(SettingsForm {
            focus_minutes: current.session_minutes.to_string(),
            break_minutes: current.break_minutes.to_string(),
            field: SettingsField::Focus,
            error: None,
        })
    }

    pub fn confirm_delete(index: usize, task_text: &str) -> Self {
        let preview = task_text.lines().next().unwrap_or_default().to_string();
        Dialog::ConfirmDelete { index, preview }
    }

    pub fn session_complete(was_break: bool, quote: &'static str) -> Self {
        Dialog::SessionComplete { was_break, quote }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::TaskEditor(editor) if editor.index.is_some() => " Edit Task ",
            Dialog::TaskEditor(_) => " New Task ",
            Dialog::Settings(_) => " Settings ",
            Dialog::ConfirmDelete { .. } => " Delete Task? ",
            Dialog::SessionComplete { was_break: true, .. } => " Break Over ",
            Dialog::SessionComplete { .. } => " Session Complete ",
        }
    }

    /// Feed one input. Returns the result once the dialog resolves.
    pub fn handle(&mut self, input: DialogInput) -> Option<DialogResult> {
        match self {
            Dialog::TaskEditor(editor) => editor.handle(input),
            Dialog::Settings(form) => form.handle(input),
            Dialog::ConfirmDelete { index, .. } => match input {
                DialogInput::Submit | DialogInput::Char('y') | DialogInput::Char('Y') => {
                    Some(DialogResult::DeleteConfirmed { index: *index })
                }
                DialogInput::Cancel | DialogInput::Char('n') | DialogInput::Char('N') => {
                    Some(DialogResult::Cancelled)
                }
                _ => None,
            },
            Dialog::SessionComplete { .. } => match input {
                DialogInput::Submit | DialogInput::Cancel | DialogInput::Newline => {
                    Some(DialogResult::Dismissed)
                }
                _ => None,
            },
        }
    }
}

/// Parse a whole number in `1..=max`
fn parse_positive(input: &str, max: u32) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|value| (1..=max).contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_str(dialog: &mut Dialog, s: &str) {
        for c in s.chars() {
            assert_eq!(dialog.handle(DialogInput::Char(c)), None);
        }
    }

    #[test]
    fn test_new_task_submit() {
        let mut dialog = Dialog::new_task();
        type_str(&mut dialog, "Write report");
        dialog.handle(DialogInput::Newline);
        type_str(&mut dialog, "  with charts  ");

        assert_eq!(
            dialog.handle(DialogInput::Submit),
            Some(DialogResult::TaskSubmitted {
                index: None,
                text: "Write report\n  with charts".to_string(),
                score: 10,
            })
        );
    }

    #[test]
    fn test_edit_task_changes_score() {
        let mut dialog = Dialog::edit_task(Some(3), "Email client", 5);
        dialog.handle(DialogInput::NextField);
        dialog.handle(DialogInput::Backspace);
        type_str(&mut dialog, "25");

        assert_eq!(
            dialog.handle(DialogInput::Submit),
            Some(DialogResult::TaskSubmitted {
                index: Some(3),
                text: "Email client".to_string(),
                score: 25,
            })
        );
    }

    #[test]
    fn test_blank_task_stays_open() {
        let mut dialog = Dialog::new_task();
        type_str(&mut dialog, "   ");
        assert_eq!(dialog.handle(DialogInput::Submit), None);
        match &dialog {
            Dialog::TaskEditor(editor) => assert!(editor.error.is_some()),
            other => panic!("unexpected dialog {:?}", other),
        }
    }

    #[test]
    fn test_invalid_score_rejected() {
        for bad in ["", "0", "-3", "ten", "1.5"] {
            let mut dialog = Dialog::edit_task(None, "Task", 10);
            dialog.handle(DialogInput::NextField);
            dialog.handle(DialogInput::Backspace);
            dialog.handle(DialogInput::Backspace);
            type_str(&mut dialog, bad);
            assert_eq!(dialog.handle(DialogInput::Submit), None, "score {:?}", bad);
        }
    }

    #[test]
    fn test_newline_ignored_in_score_field() {
        let mut dialog = Dialog::new_task();
        dialog.handle(DialogInput::NextField);
        dialog.handle(DialogInput::Newline);
        match &dialog {
            Dialog::TaskEditor(editor) => assert_eq!(editor.score, "10"),
            other => panic!("unexpected dialog {:?}", other),
        }
    }

    #[test]
    fn test_settings_submit() {
        let mut dialog = Dialog::settings(&SessionDurations::default());
        dialog.handle(DialogInput::Backspace);
        dialog.handle(DialogInput::Backspace);
        type_str(&mut dialog, "50");
        dialog.handle(DialogInput::NextField);
        dialog.handle(DialogInput::Backspace);
        type_str(&mut dialog, "10");

        assert_eq!(
            dialog.handle(DialogInput::Submit),
            Some(DialogResult::SettingsSubmitted(SessionDurations {
                session_minutes: 50,
                break_minutes: 10,
            }))
        );
    }

    #[test]
    fn test_settings_rejects_out_of_range() {
        let mut dialog = Dialog::settings(&SessionDurations::default());
        dialog.handle(DialogInput::NextField);
        dialog.handle(DialogInput::Backspace);
        type_str(&mut dialog, "0");
        assert_eq!(dialog.handle(DialogInput::Submit), None);

        let mut dialog = Dialog::settings(&SessionDurations::default());
        type_str(&mut dialog, "00000");
        assert_eq!(dialog.handle(DialogInput::Submit), None);
    }

    #[test]
    fn test_confirm_delete() {
        let mut dialog = Dialog::confirm_delete(1, "first line\nsecond");
        assert_eq!(dialog.handle(DialogInput::Char('x')), None);
        assert_eq!(
            dialog.handle(DialogInput::Char('y')),
            Some(DialogResult::DeleteConfirmed { index: 1 })
        );

        let mut dialog = Dialog::confirm_delete(1, "task");
        assert_eq!(dialog.handle(DialogInput::Cancel), Some(DialogResult::Cancelled));
    }

    #[test]
    fn test_confirm_delete_preview_is_first_line() {
        match Dialog::confirm_delete(0, "first line\nsecond") {
            Dialog::ConfirmDelete { preview, .. } => assert_eq!(preview, "first line"),
            other => panic!("unexpected dialog {:?}", other),
        }
    }

    #[test]
    fn test_session_complete_dismiss() {
        let mut dialog = Dialog::session_complete(false, "Keep the streak.");
        assert_eq!(dialog.title(), " Session Complete ");
        assert_eq!(dialog.handle(DialogInput::Char('q')), None);
        assert_eq!(dialog.handle(DialogInput::Submit), Some(DialogResult::Dismissed));
    }

    #[test]
    fn test_cancel_editor() {
        let mut dialog = Dialog::new_task();
        type_str(&mut dialog, "half typed");
        assert_eq!(dialog.handle(DialogInput::Cancel), Some(DialogResult::Cancelled));
    }
}
