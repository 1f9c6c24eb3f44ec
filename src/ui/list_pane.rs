use crate::app::SessionController;
use crate::domain::Task;
use crate::hit_map::TaskRows;
use crate::ui::styles::{
    border_style, default_style, done_style, drag_style, hint_style, hover_style, score_style,
    title_style,
};
use crate::ui::wrap::wrap_text;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Columns taken by the `[x] ` prefix
const PREFIX_WIDTH: usize = 4;

/// Lines drawn for one task: wrapped text with the checkbox on the first
/// line and the score right-aligned on it
fn task_lines(task: &Task, width: usize, row_style: Style) -> Vec<Line<'static>> {
    let label = task.score_label();
    let text_width = width.saturating_sub(PREFIX_WIDTH + label.len() + 1).max(1);
    let wrapped = wrap_text(&task.text, text_width);

    let text_style = if task.complete {
        done_style()
    } else {
        default_style()
    };
    let checkbox = if task.complete { "[x] " } else { "[ ] " };

    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let used = PREFIX_WIDTH + text.width();
            let mut spans = vec![
                Span::styled(if i == 0 { checkbox } else { "    " }, row_style),
                Span::styled(text, text_style.patch(row_style)),
            ];
            let pad = if i == 0 {
                width.saturating_sub(used + label.len())
            } else {
                width.saturating_sub(used)
            };
            spans.push(Span::styled(" ".repeat(pad), row_style));
            if i == 0 {
                spans.push(Span::styled(label.clone(), score_style().patch(row_style)));
            }
            Line::from(spans)
        })
        .collect()
}

/// Render the task list and record row positions for hit-testing
pub fn render_list_pane(f: &mut Frame, app: &mut SessionController, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Tasks ({}) ", app.tasks.len()),
            title_style(),
        ));
    let block = match app.tasks.undo_len() {
        0 => block,
        n => block.title(
            Title::from(Line::styled(
                format!(" {} deleted, Ctrl+Z to restore ", n),
                hint_style(),
            ))
            .position(Position::Bottom),
        ),
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.tasks.is_empty() {
        app.hit_map.tasks = TaskRows::default();
        let hint = Paragraph::new(Line::styled(
            "No tasks yet. Press a or click Add Task.",
            hint_style(),
        ));
        f.render_widget(hint, inner);
        return;
    }

    let width = inner.width as usize;
    let mut lines = Vec::new();
    let mut heights = Vec::with_capacity(app.tasks.len());
    for (index, task) in app.tasks.tasks().iter().enumerate() {
        let row_style = if app.dragging == Some(index) {
            drag_style()
        } else if app.hover == Some(index) {
            hover_style()
        } else {
            Style::default()
        };
        let task_lines = task_lines(task, width, row_style);
        heights.push(u16::try_from(task_lines.len()).unwrap_or(u16::MAX));
        lines.extend(task_lines);
    }

    app.hit_map.tasks = TaskRows::new(inner, &heights);
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_single_line_task() {
        let task = Task::new("Write report", 10);
        let lines = task_lines(&task, 30, Style::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), "[ ] Write report        +10pts");
    }

    #[test]
    fn test_completed_task_checkbox() {
        let mut task = Task::new("Email client", 5);
        task.complete = true;
        let lines = task_lines(&task, 30, Style::default());
        assert!(plain(&lines[0]).starts_with("[x] Email client"));
    }

    #[test]
    fn test_wrapped_task_indents_continuation() {
        let task = Task::new("one two three four", 5);
        // 20 wide leaves 20 - 4 - 5 - 1 = 10 columns of text
        let lines = task_lines(&task, 20, Style::default());
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(rendered, vec!["[ ] one two    +5pts", "    three four      "]);
    }

    #[test]
    fn test_wide_text_pads_by_columns() {
        let task = Task::new("会議", 5);
        let lines = task_lines(&task, 20, Style::default());
        assert_eq!(plain(&lines[0]), "[ ] 会議       +5pts");
        assert_eq!(plain(&lines[0]).width(), 20);
    }

    #[test]
    fn test_multiline_task_height() {
        let task = Task::new("first\nsecond\nthird", 1);
        assert_eq!(task_lines(&task, 40, Style::default()).len(), 3);
    }
}
