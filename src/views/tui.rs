use std::io;
use chrono::{DateTime, Utc};
use ratatui::{
    widgets::{Block, Borders, List, ListItem, Paragraph},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Color, Modifier},
    Terminal, Frame,
    text::Line,
    prelude::{Span, Text},
};
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    execute,
};
use unicode_width::UnicodeWidthStr;

use crate::models::{BlockKind, ContentBlock, PostView};
use crate::views::avatar::Avatar;
use crate::views::comment::Comment;
use crate::views::time::{format_absolute, format_relative};
use crate::views::widgets::{CommentCursor, Focus};
use crate::views::wrap::{wrap_chars, wrap_words};

const TEXTAREA_HEIGHT: u16 = 5;

pub fn setup_terminal() -> io::Result<Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

pub fn restore_terminal(terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Rows of every renderable block, wrapped to `width` columns. Unknown block
/// types produce nothing.
pub fn content_lines(blocks: &[ContentBlock], width: usize) -> Vec<Vec<Line<'static>>> {
    blocks
        .iter()
        .filter_map(|block| {
            let style = match block.kind {
                BlockKind::Paragraph => Style::default(),
                BlockKind::Link => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                BlockKind::Unknown => return None,
            };
            let rows = wrap_words(&block.content, width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, style)))
                .collect();
            Some(rows)
        })
        .collect()
}

pub fn render_ui<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    view: &PostView,
    cursor: &mut CommentCursor,
    focus: Focus,
    now: DateTime<Utc>,
) {
    // the layout margin takes one column on each side
    let content_width = usize::from(f.size().width.saturating_sub(2));
    let content = content_lines(&view.props().content, content_width);
    // a blank row between blocks, plus the top and bottom borders
    let content_rows = content.iter().map(Vec::len).sum::<usize>() + content.len().saturating_sub(1);
    let content_height = u16::try_from(content_rows.max(1) + 2).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(content_height),
                Constraint::Length(TEXTAREA_HEIGHT + 3),
                Constraint::Min(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    render_header(f, view, now, chunks[0]);
    render_content(f, content, chunks[1]);
    render_form(f, view, focus, chunks[2]);
    render_comments(f, view, cursor, focus, chunks[3]);

    let strings = view.locale().strings();
    let help = match focus {
        Focus::Compose => strings.compose_help,
        Focus::Browse => strings.browse_help,
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}

fn render_header<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    view: &PostView,
    now: DateTime<Utc>,
    area: Rect,
) {
    let props = view.props();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(5), Constraint::Min(10), Constraint::Length(32)].as_ref())
        .split(area);

    f.render_widget(Avatar::new(&props.author.avatar_url), chunks[0]);

    let author_info = Text::from(vec![
        Line::from(Span::styled(
            props.author.name.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(props.author.role.as_str(), Style::default().fg(Color::Gray))),
    ]);
    f.render_widget(Paragraph::new(author_info), inset_left(chunks[1], 1));

    // relative time first; the absolute form stands in for the hover title
    let time = Text::from(vec![
        Line::from(Span::styled(
            format_relative(&props.published_at, now, view.locale()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format_absolute(&props.published_at, view.locale()),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(Paragraph::new(time).alignment(Alignment::Right), chunks[2]);
}

fn render_content<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    content: Vec<Vec<Line<'static>>>,
    area: Rect,
) {
    let mut lines = Vec::new();
    for (i, rows) in content.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(rows);
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

fn render_form<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    view: &PostView,
    focus: Focus,
    area: Rect,
) {
    let strings = view.locale().strings();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [Constraint::Length(1), Constraint::Length(TEXTAREA_HEIGHT), Constraint::Length(2)].as_ref(),
        )
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            strings.feedback_heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let border_color = match (focus, view.validity()) {
        (_, Some(_)) => Color::Red,
        (Focus::Compose, None) => Color::Green,
        (Focus::Browse, None) => Color::DarkGray,
    };
    let textarea_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let draft = DraftLayout::new(view.draft(), chunks[1]);
    let textarea = if view.draft().is_empty() {
        Paragraph::new(Span::styled(strings.comment_placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        let rows: Vec<Line> = draft.rows.iter().map(|row| Line::from(row.as_str())).collect();
        Paragraph::new(rows).scroll((draft.scroll, 0))
    };
    f.render_widget(textarea.block(textarea_block), chunks[1]);

    if focus == Focus::Compose {
        let (x, y) = draft.cursor;
        f.set_cursor(x, y);
    }

    let button_style = if view.can_submit() {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };
    let mut footer = vec![Line::from(Span::styled(
        format!(" {} ", strings.publish_button),
        button_style,
    ))];
    if let Some(message) = view.validity() {
        footer.insert(0, Line::from(Span::styled(message, Style::default().fg(Color::Red))));
    }
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

fn render_comments<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    view: &PostView,
    cursor: &mut CommentCursor,
    focus: Focus,
    area: Rect,
) {
    let strings = view.locale().strings();
    let block = Block::default()
        .title(format!("{} ({})", strings.comments_title, view.comments().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(match focus {
            Focus::Browse => Color::Green,
            Focus::Compose => Color::DarkGray,
        }));

    if view.comments().is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(strings.no_comments, Style::default().fg(Color::DarkGray)))
                .block(block),
            area,
        );
        return;
    }

    // borders, highlight symbol and the avatar prefix
    let text_width = usize::from(area.width.saturating_sub(2 + 2 + 4));
    let items: Vec<ListItem> = view
        .comments()
        .iter()
        .map(|content| Comment::new(content).list_item(text_width))
        .collect();

    let mut list = List::new(items).block(block);
    if focus == Focus::Browse {
        list = list
            .highlight_style(
                Style::default()
                    .bg(Color::Gray)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
    }

    f.render_stateful_widget(list, area, &mut cursor.state);
}

fn inset_left(area: Rect, by: u16) -> Rect {
    Rect {
        x: area.x + by.min(area.width),
        width: area.width.saturating_sub(by),
        ..area
    }
}

/// The draft as drawn in the bordered textbox `area`: wrapped rows, the scroll
/// offset that keeps the cursor row visible, and the cursor after the last char.
struct DraftLayout {
    rows: Vec<String>,
    scroll: u16,
    cursor: (u16, u16),
}

impl DraftLayout {
    fn new(draft: &str, area: Rect) -> Self {
        let inner_width = area.width.saturating_sub(2).max(1);
        let inner_height = area.height.saturating_sub(2).max(1);

        let rows = wrap_chars(draft, usize::from(inner_width));
        let last_row = u16::try_from(rows.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let last_width = u16::try_from(rows.last().map_or(0, |row| row.width())).unwrap_or(u16::MAX);

        // a full last row puts the cursor at the start of the next one
        let (cursor_row, cursor_col) = if last_width >= inner_width {
            (last_row.saturating_add(1), 0)
        } else {
            (last_row, last_width)
        };
        let scroll = (cursor_row + 1).saturating_sub(inner_height);

        Self {
            rows,
            scroll,
            cursor: (area.x + 1 + cursor_col, area.y + 1 + cursor_row - scroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use ratatui::{backend::TestBackend, buffer::Buffer};

    use crate::models::{Author, Locale, PostProps};

    fn props() -> PostProps {
        PostProps {
            author: Author {
                name: "Maria Souza".to_string(),
                role: "Educator".to_string(),
                avatar_url: "https://example.com/maria.png".to_string(),
            },
            content: vec![
                ContentBlock::paragraph("Hello"),
                ContentBlock::link("example.com/talk"),
                ContentBlock {
                    kind: BlockKind::Unknown,
                    content: "hidden block".to_string(),
                },
            ],
            published_at: DateTime::parse_from_rfc3339("2022-05-03T20:00:00-03:00").unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2022-05-03T23:05:00Z").unwrap().with_timezone(&Utc)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(&buffer.get(x, y).symbol);
            }
            out.push('\n');
        }
        out
    }

    fn draw(view: &PostView, focus: Focus) -> String {
        let backend = TestBackend::new(90, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut cursor = CommentCursor::new();
        cursor.first(view.comments().len());
        terminal
            .draw(|f| render_ui(f, view, &mut cursor, focus, now()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn draw_sized(view: &PostView, focus: Focus, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut cursor = CommentCursor::new();
        cursor.first(view.comments().len());
        terminal
            .draw(|f| render_ui(f, view, &mut cursor, focus, now()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn content_lines_skip_unknown_blocks() {
        let props = props();
        let blocks = content_lines(&props.content, 80);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0][0].spans[0].content, "Hello");
        assert_eq!(blocks[1][0].spans[0].content, "example.com/talk");
        assert!(blocks[1][0].spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn content_lines_wrap_long_paragraphs() {
        let blocks = content_lines(&[ContentBlock::paragraph("feito em Rust.")], 8);
        assert_eq!(blocks[0].len(), 2);
        assert_eq!(blocks[0][1].spans[0].content, "Rust.");
    }

    #[test]
    fn sample_post_fits_a_standard_terminal() {
        let view = PostView::new(PostProps::sample(), Locale::PtBr);
        let screen = draw_sized(&view, Focus::Compose, 80, 40);
        assert!(screen.contains("Fala galera"));
        assert!(screen.contains("feito em Rust."));
        assert!(screen.contains("ana.dev/posttui"));
    }

    #[test]
    fn long_comment_wraps_inside_the_list() {
        let mut view = PostView::new(props(), Locale::PtBr);
        let comment = format!("{} FIM", "um comentario bem comprido".repeat(4));
        view.update_draft(comment);
        view.submit_comment();
        let screen = draw_sized(&view, Focus::Browse, 60, 40);
        assert!(screen.contains("FIM"));
    }

    #[test]
    fn long_draft_scrolls_to_last_row() {
        let mut view = PostView::new(props(), Locale::PtBr);
        view.update_draft("first-row\nb\nc\nd\nfinal-row".to_string());
        let screen = draw(&view, Focus::Compose);
        assert!(screen.contains("final-row"));
        assert!(!screen.contains("first-row"));
    }

    #[test]
    fn frame_shows_header_content_and_form() {
        let view = PostView::new(props(), Locale::PtBr);
        let screen = draw(&view, Focus::Compose);
        assert!(screen.contains("Maria Souza"));
        assert!(screen.contains("Educator"));
        assert!(screen.contains("há 5 minutos"));
        assert!(screen.contains("3 de maio as 20:00h"));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("example.com/talk"));
        assert!(!screen.contains("hidden block"));
        assert!(screen.contains("Deixe seu feedback"));
        assert!(screen.contains("Deixe seu comentario"));
        assert!(screen.contains("Publicar"));
        assert!(screen.contains("Nenhum comentário ainda"));
    }

    #[test]
    fn frame_lists_comments_and_validity_message() {
        let mut view = PostView::new(props(), Locale::EnUs);
        view.update_draft("Nice post".to_string());
        view.submit_comment();
        view.submit_comment();
        let screen = draw(&view, Focus::Browse);
        assert!(screen.contains("Comments (1)"));
        assert!(screen.contains("> [Y] Nice post"));
        assert!(screen.contains("This field is required"));
    }

    #[test]
    fn draft_replaces_placeholder() {
        let mut view = PostView::new(props(), Locale::EnUs);
        view.update_draft("typing".to_string());
        let screen = draw(&view, Focus::Compose);
        assert!(screen.contains("typing"));
        assert!(!screen.contains("Leave a comment"));
    }

    #[test]
    fn draft_cursor_follows_last_line() {
        let area = Rect::new(0, 10, 20, 5);
        assert_eq!(DraftLayout::new("", area).cursor, (1, 11));
        assert_eq!(DraftLayout::new("ab\ncde", area).cursor, (4, 12));
    }

    #[test]
    fn draft_cursor_tracks_soft_wraps_and_scroll() {
        // inner box is 5 columns by 3 rows
        let area = Rect::new(0, 10, 7, 5);

        let layout = DraftLayout::new("abcdefghijklmnopq", area);
        assert_eq!(layout.rows, vec!["abcde", "fghij", "klmno", "pq"]);
        assert_eq!(layout.scroll, 1);
        assert_eq!(layout.cursor, (3, 13));

        let full = DraftLayout::new("abcde", area);
        assert_eq!(full.cursor, (1, 12));
    }

    #[test]
    fn draft_cursor_measures_display_width() {
        let area = Rect::new(0, 10, 7, 5);
        let layout = DraftLayout::new("日本語", area);
        assert_eq!(layout.rows, vec!["日本", "語"]);
        assert_eq!(layout.cursor, (3, 12));
    }
}
