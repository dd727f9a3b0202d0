pub mod tui;
pub mod widgets;
pub mod avatar;
pub mod comment;
pub mod html;
pub mod time;
pub mod wrap;

pub use widgets::{CommentCursor, Focus};
pub use avatar::Avatar;
pub use comment::Comment;
