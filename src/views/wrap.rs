use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Breaks `text` into rows of at most `width` display columns, char by char.
/// Every char is kept, spaces included, so a cursor can be placed after the
/// last row.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
        rows.push(row);
    }
    rows
}

/// Word wrap at `width` display columns. Words wider than a row are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for word in line.split(' ') {
            let w = word.width();
            let sep = usize::from(!row.is_empty());
            if used + sep + w <= width {
                if sep == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                used += sep + w;
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
            }
            if w <= width {
                row.push_str(word);
                used = w;
                continue;
            }

            let mut pieces = wrap_chars(word, width);
            row = pieces.pop().unwrap_or_default();
            used = row.width();
            rows.extend(pieces);
        }
        rows.push(row);
    }
    rows
}
