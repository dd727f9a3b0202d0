use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::models::{BlockKind, PostView};
use crate::views::avatar::Avatar;
use crate::views::comment::Comment;
use crate::views::time::{format_absolute, format_machine, format_relative};

/// Markup for the card in its current state. Class names match the card's
/// stylesheet, which is not part of this crate.
pub fn render_post(view: &PostView, now: DateTime<Utc>) -> Markup {
    let props = view.props();
    let locale = view.locale();
    let strings = locale.strings();

    html! {
        article class="post" lang=(locale.tag()) {
            header {
                div class="author" {
                    (Avatar::new(&props.author.avatar_url).markup())
                    div class="authorInfo" {
                        strong { (props.author.name) }
                        span { (props.author.role) }
                    }
                }
                time
                    title=(format_absolute(&props.published_at, locale))
                    datetime=(format_machine(&props.published_at)) {
                    (format_relative(&props.published_at, now, locale))
                }
            }

            div class="content" {
                @for block in &props.content {
                    @match block.kind {
                        BlockKind::Paragraph => {
                            p { (block.content) }
                        },
                        BlockKind::Link => {
                            p { a href="#" { (block.content) } }
                        },
                        BlockKind::Unknown => {},
                    }
                }
            }

            form class="commentForm" {
                strong { (strings.feedback_heading) }
                textarea name="comment" placeholder=(strings.comment_placeholder) required {
                    (view.draft())
                }
                footer {
                    button type="submit" disabled[!view.can_submit()] { (strings.publish_button) }
                }
            }

            div class="commentList" {
                @for content in view.comments().iter() {
                    (Comment::new(content).markup(locale))
                }
            }
        }
    }
}
