use maud::{html, Markup};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::models::Locale;
use crate::views::avatar::Avatar;
use crate::views::wrap::wrap_words;

/// Avatar shown beside every local comment.
pub const COMMENTER_AVATAR: &str = "https://avatars.example.com/you.png";

/// One rendered comment. Owns no state: deletion is handed back to the post
/// view through the callback given to [`Comment::request_delete`].
pub struct Comment<'a> {
    content: &'a str,
}

impl<'a> Comment<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &'a str {
        self.content
    }

    pub fn request_delete<F>(&self, on_delete_comment: F)
    where
        F: FnOnce(&str),
    {
        on_delete_comment(self.content);
    }

    /// List row for the terminal; the text is wrapped to `width` columns.
    pub fn list_item(&self, width: usize) -> ListItem<'static> {
        let mut rows = wrap_words(self.content, width).into_iter();
        let first = rows.next().unwrap_or_default();

        let mut all_lines = vec![Line::from(vec![
            Avatar::new(COMMENTER_AVATAR).span(),
            Span::raw(" "),
            Span::raw(first),
        ])];
        // continuation rows line up with the text after the avatar
        all_lines.extend(rows.map(|row| Line::from(vec![Span::raw("    "), Span::raw(row)])));
        all_lines.push(Line::from(""));

        ListItem::new(all_lines).style(Style::default().fg(Color::White))
    }

    pub fn markup(&self, locale: Locale) -> Markup {
        let strings = locale.strings();
        html! {
            div class="comment" {
                (Avatar::new(COMMENTER_AVATAR).markup())
                div class="commentBox" {
                    div class="commentContent" {
                        p { (self.content) }
                    }
                    button type="button" title=(strings.delete_label) { (strings.delete_label) }
                }
            }
        }
    }
}
