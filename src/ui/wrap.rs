use std::mem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Split off the longest prefix of `word` that fits in `width` columns.
/// At least one character is taken so wide glyphs still make progress.
fn split_columns(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && i > 0 {
            return word.split_at(i);
        }
        used += w;
    }
    (word, "")
}

/// Wrap `text` to lines at most `width` terminal columns wide.
///
/// Words longer than the width are split. A zero width only splits on
/// newlines. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let start = lines.len();
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let mut rest = word;
            while rest.width() > width {
                if line_width > 0 {
                    lines.push(mem::take(&mut line));
                    line_width = 0;
                }
                let (head, tail) = split_columns(rest, width);
                lines.push(head.to_string());
                rest = tail;
            }
            if rest.is_empty() {
                continue;
            }

            let word_width = rest.width();
            let needed = if line_width == 0 {
                word_width
            } else {
                line_width + 1 + word_width
            };
            if needed > width {
                lines.push(mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(rest);
            line_width += word_width;
        }

        if line_width > 0 || lines.len() == start {
            lines.push(line);
        }
    }
    lines
}
