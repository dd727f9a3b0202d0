use ratatui::widgets::ListState;

/// Which part of the card receives keystrokes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Compose,
    Browse,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Compose => Focus::Browse,
            Focus::Browse => Focus::Compose,
        }
    }
}

/// Selection over the comment list. The list itself lives in the post view,
/// so every move takes the current length.
#[derive(Default, Debug)]
pub struct CommentCursor {
    pub state: ListState,
}

impl CommentCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return self.state.select(None);
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => len - 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return self.state.select(None);
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1).min(len - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn first(&mut self, len: usize) {
        self.state.select(if len == 0 { None } else { Some(0) });
    }

    pub fn last(&mut self, len: usize) {
        self.state.select(len.checked_sub(1));
    }

    /// Keeps the selection inside a list that just shrank.
    pub fn clamp(&mut self, len: usize) {
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_stay_in_bounds() {
        let mut cursor = CommentCursor::new();
        cursor.next(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.next(3);
        cursor.next(3);
        cursor.next(3);
        assert_eq!(cursor.selected(), Some(2));
        cursor.previous(3);
        assert_eq!(cursor.selected(), Some(1));
        cursor.first(3);
        cursor.previous(3);
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut cursor = CommentCursor::new();
        cursor.next(0);
        assert_eq!(cursor.selected(), None);
        cursor.last(0);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut cursor = CommentCursor::new();
        cursor.last(3);
        cursor.clamp(1);
        assert_eq!(cursor.selected(), Some(0));
        cursor.clamp(0);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn focus_toggles() {
        assert_eq!(Focus::Compose.toggled(), Focus::Browse);
        assert_eq!(Focus::Browse.toggled(), Focus::Compose);
    }
}
