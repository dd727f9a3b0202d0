use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::models::{PostView, SubmitOutcome};
use crate::views::{Comment, CommentCursor, Focus};

/// What a keystroke asks the card to do.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Action {
    Insert(char),
    Backspace,
    Submit,
    DeleteSelected,
    Next,
    Previous,
    First,
    Last,
    ToggleFocus,
    Quit,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match focus {
        Focus::Compose => match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::Submit),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::Insert(c)),
            KeyCode::Enter => Some(Action::Insert('\n')),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab | KeyCode::Esc => Some(Action::ToggleFocus),
            _ => None,
        },
        Focus::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Next),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Previous),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
            KeyCode::Delete | KeyCode::Char('d') => Some(Action::DeleteSelected),
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('c') => Some(Action::ToggleFocus),
            _ => None,
        },
    }
}

/// Runs one action to completion against the card state.
pub fn apply(
    view: &mut PostView,
    cursor: &mut CommentCursor,
    focus: &mut Focus,
    action: Action,
) -> Flow {
    let len = view.comments().len();
    match action {
        Action::Insert(c) => {
            let mut value = view.draft().to_string();
            value.push(c);
            view.update_draft(value);
        }
        Action::Backspace => {
            let mut value = view.draft().to_string();
            value.pop();
            view.update_draft(value);
        }
        Action::Submit => {
            if view.submit_comment() == SubmitOutcome::Submitted {
                cursor.last(view.comments().len());
            }
        }
        Action::DeleteSelected => {
            let selected = cursor
                .selected()
                .and_then(|i| view.comments().get(i))
                .map(str::to_string);
            if let Some(content) = selected {
                Comment::new(&content).request_delete(|c| view.delete_comment(c));
                cursor.clamp(view.comments().len());
            }
        }
        Action::Next => cursor.next(len),
        Action::Previous => cursor.previous(len),
        Action::First => cursor.first(len),
        Action::Last => cursor.last(len),
        Action::ToggleFocus => {
            *focus = focus.toggled();
            if *focus == Focus::Browse {
                cursor.clamp(len);
            }
            debug!(?focus, "focus changed");
        }
        Action::Quit => return Flow::Quit,
    }
    Flow::Continue
}
