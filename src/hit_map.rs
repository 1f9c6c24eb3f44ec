use crate::domain::Button;
use ratatui::layout::Rect;

/// Columns covered by the `[x]` checkbox at the start of a task's first row
pub const CHECKBOX_WIDTH: u16 = 3;

pub fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Vertical extent of one drawn task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowSpan {
    top: u16,
    height: u16,
}

/// Task rows stacked top to bottom, each as tall as its wrapped text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRows {
    area: Rect,
    rows: Vec<RowSpan>,
}

impl TaskRows {
    /// Stack rows of the given heights inside `area`.
    ///
    /// Rows are half-open `[top, top + height)` with no gap. Rows starting
    /// below the area are dropped and the last visible row is clipped.
    pub fn new(area: Rect, heights: &[u16]) -> Self {
        let bottom = area.y.saturating_add(area.height);
        let mut rows = Vec::with_capacity(heights.len());
        let mut top = area.y;
        for &height in heights {
            if top >= bottom {
                break;
            }
            let height = height.max(1).min(bottom - top);
            rows.push(RowSpan { top, height });
            top += height;
        }
        Self { area, rows }
    }

    /// Task index under the pointer, if any
    pub fn task_at(&self, col: u16, row: u16) -> Option<usize> {
        if col < self.area.x || col >= self.area.x.saturating_add(self.area.width) {
            return None;
        }
        self.rows
            .iter()
            .position(|span| row >= span.top && row < span.top + span.height)
    }

    /// Whether the pointer is on the checkbox of task `index`
    pub fn in_checkbox(&self, index: usize, col: u16, row: u16) -> bool {
        let Some(span) = self.rows.get(index) else {
            return false;
        };
        row == span.top && col >= self.area.x && col < self.area.x + CHECKBOX_WIDTH
    }
}

#[cfg(test)]
impl TaskRows {
    /// Number of tasks with at least one visible row
    pub fn visible(&self) -> usize {
        self.rows.len()
    }

    pub fn row_rect(&self, index: usize) -> Option<Rect> {
        self.rows.get(index).map(|span| Rect {
            x: self.area.x,
            y: span.top,
            width: self.area.width,
            height: span.height,
        })
    }
}

/// Everything clickable on the current frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub buttons: Vec<(Rect, Button)>,
    pub tasks: TaskRows,
}

impl HitMap {
    pub fn button_at(&self, col: u16, row: u16) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(rect, _)| point_in_rect(col, row, *rect))
            .map(|(_, button)| *button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows() -> TaskRows {
        // Three tasks of 1, 3 and 2 lines starting at row 10
        TaskRows::new(Rect::new(2, 10, 40, 8), &[1, 3, 2])
    }

    #[test]
    fn test_task_at_uses_cumulative_heights() {
        let rows = rows();
        assert_eq!(rows.task_at(5, 9), None);
        assert_eq!(rows.task_at(5, 10), Some(0));
        assert_eq!(rows.task_at(5, 11), Some(1));
        assert_eq!(rows.task_at(5, 13), Some(1));
        assert_eq!(rows.task_at(5, 14), Some(2));
        assert_eq!(rows.task_at(5, 15), Some(2));
        assert_eq!(rows.task_at(5, 16), None);
    }

    #[test]
    fn test_task_at_outside_columns() {
        let rows = rows();
        assert_eq!(rows.task_at(1, 10), None);
        assert_eq!(rows.task_at(42, 10), None);
        assert_eq!(rows.task_at(41, 10), Some(0));
    }

    #[test]
    fn test_rows_clip_to_area() {
        let rows = TaskRows::new(Rect::new(0, 0, 10, 4), &[2, 3, 1]);
        assert_eq!(rows.visible(), 2);
        assert_eq!(rows.row_rect(1), Some(Rect::new(0, 2, 10, 2)));
        assert_eq!(rows.task_at(0, 4), None);
    }

    #[test]
    fn test_zero_height_counts_as_one_row() {
        let rows = TaskRows::new(Rect::new(0, 0, 10, 5), &[0, 1]);
        assert_eq!(rows.task_at(0, 0), Some(0));
        assert_eq!(rows.task_at(0, 1), Some(1));
    }

    #[test]
    fn test_checkbox_is_first_row_only() {
        let rows = rows();
        assert!(rows.in_checkbox(1, 2, 11));
        assert!(rows.in_checkbox(1, 4, 11));
        assert!(!rows.in_checkbox(1, 5, 11));
        assert!(!rows.in_checkbox(1, 3, 12));
        assert!(!rows.in_checkbox(7, 2, 11));
    }

    #[test]
    fn test_button_at() {
        let map = HitMap {
            buttons: vec![
                (Rect::new(0, 0, 8, 3), Button::StartStop),
                (Rect::new(8, 0, 8, 3), Button::AddTask),
            ],
            tasks: TaskRows::default(),
        };
        assert_eq!(map.button_at(7, 2), Some(Button::StartStop));
        assert_eq!(map.button_at(8, 0), Some(Button::AddTask));
        assert_eq!(map.button_at(16, 0), None);
        assert_eq!(map.button_at(0, 3), None);
    }
}
