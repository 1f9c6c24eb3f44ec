use crate::dialog::{Dialog, EditorField, SettingsField, SettingsForm, TaskEditor};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style, quote_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn cursor(active: bool) -> Span<'static> {
    if active {
        Span::styled("█", modal_title_style())
    } else {
        Span::raw("")
    }
}

fn field_label(label: &str, active: bool) -> Line<'static> {
    if active {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label.to_string())
    }
}

fn push_error(lines: &mut Vec<Line<'static>>, error: Option<&'static str>) {
    if let Some(message) = error {
        lines.push(Line::styled(message, error_style()));
    } else {
        lines.push(Line::raw(""));
    }
}

fn editor_lines(editor: &TaskEditor) -> Vec<Line<'static>> {
    let text_active = editor.field == EditorField::Text;
    let mut lines = vec![Line::raw(""), field_label("Task:", text_active)];

    let text_lines: Vec<&str> = editor.text.split('\n').collect();
    let last = text_lines.len() - 1;
    for (i, text) in text_lines.into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw(if i == 0 { "> " } else { "  " }),
            Span::styled(text.to_string(), modal_title_style()),
            cursor(text_active && i == last),
        ]));
    }

    let score_active = editor.field == EditorField::Score;
    lines.push(Line::raw(""));
    lines.push(field_label("Points:", score_active));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(editor.score.clone(), modal_title_style()),
        cursor(score_active),
    ]));
    lines.push(Line::raw(""));
    push_error(&mut lines, editor.error);
    lines.push(Line::styled(
        "[Enter] save  [Alt+Enter] new line  [Tab] switch field  [Esc] cancel",
        hint_style(),
    ));
    lines
}

fn settings_lines(form: &SettingsForm) -> Vec<Line<'static>> {
    let focus_active = form.field == SettingsField::Focus;
    let break_active = form.field == SettingsField::Break;
    let mut lines = vec![
        Line::raw(""),
        field_label("Focus minutes:", focus_active),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(form.focus_minutes.clone(), modal_title_style()),
            cursor(focus_active),
        ]),
        Line::raw(""),
        field_label("Break minutes:", break_active),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(form.break_minutes.clone(), modal_title_style()),
            cursor(break_active),
        ]),
        Line::raw(""),
    ];
    push_error(&mut lines, form.error);
    lines.push(Line::styled(
        "[Enter] save  [Tab] switch field  [Esc] cancel",
        hint_style(),
    ));
    lines
}

fn dialog_lines(dialog: &Dialog) -> Vec<Line<'static>> {
    match dialog {
        Dialog::TaskEditor(editor) => editor_lines(editor),
        Dialog::Settings(form) => settings_lines(form),
        Dialog::ConfirmDelete { preview, .. } => vec![
            Line::raw(""),
            Line::raw("  Delete this task?"),
            Line::raw(""),
            Line::styled(format!("  {}", preview), modal_title_style()),
            Line::raw(""),
            Line::raw("  Ctrl+Z brings it back afterwards."),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [y]", modal_title_style()),
                Span::raw(" Delete  "),
                Span::styled("[n]", modal_title_style()),
                Span::raw(" Keep"),
            ]),
        ],
        Dialog::SessionComplete { was_break, quote } => {
            let message = if *was_break {
                "  Break's over. Ready to focus again?"
            } else {
                "  Session complete! Time for a break."
            };
            vec![
                Line::raw(""),
                Line::raw(message),
                Line::raw(""),
                Line::styled(format!("  \"{}\"", quote), quote_style()),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("  [Enter]", modal_title_style()),
                    Span::raw(" OK"),
                ]),
            ]
        }
    }
}

/// Render the open dialog centred over the current screen
pub fn render_dialog(f: &mut Frame, dialog: &Dialog, area: Rect) {
    let lines = dialog_lines(dialog);
    let height = u16::try_from(lines.len() + 4).unwrap_or(u16::MAX);
    let modal_area = create_modal_area(area, height);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(dialog.title(), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionDurations;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_editor_shows_every_text_line() {
        let dialog = Dialog::edit_task(Some(0), "first\nsecond", 7);
        let rendered = text(&dialog_lines(&dialog));
        assert!(rendered.contains("> first"));
        assert!(rendered.contains("  second█"));
        assert!(rendered.contains("> 7"));
    }

    #[test]
    fn test_settings_shows_current_values() {
        let dialog = Dialog::settings(&SessionDurations::default());
        let rendered = text(&dialog_lines(&dialog));
        assert!(rendered.contains("Focus minutes: (editing)"));
        assert!(rendered.contains("> 25█"));
        assert!(rendered.contains("> 5"));
    }

    #[test]
    fn test_session_complete_shows_quote() {
        let dialog = Dialog::session_complete(false, "Small steps.");
        let rendered = text(&dialog_lines(&dialog));
        assert!(rendered.contains("Time for a break"));
        assert!(rendered.contains("\"Small steps.\""));
    }
}
