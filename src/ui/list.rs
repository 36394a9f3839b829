use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, ListItemView, ViewState};

use super::palette::theme;

/// Widest primary label column before names are left ragged.
const MAX_PRIMARY_WIDTH: usize = 24;

/// What: Format one row as styled spans.
///
/// Inputs:
/// - `item`: Row to render
/// - `primary_width`: Display width the primary column is padded to
///
/// Output:
/// - `Line` of `#id`, bold primary label and secondary label.
///
/// Details:
/// - Missing labels render as empty text; padding uses display width so
///   double-width names line up.
pub(crate) fn row_line(item: &ListItemView, primary_width: usize) -> Line<'static> {
    let th = theme();
    let primary = item.primary_label.clone().unwrap_or_default();
    let pad = primary_width.saturating_sub(primary.width());
    Line::from(vec![
        Span::styled(format!("#{:<5}", item.id), Style::default().fg(th.overlay2)),
        Span::styled(
            primary,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad + 2)),
        Span::styled(
            item.secondary_label.clone().unwrap_or_default(),
            Style::default().fg(th.subtext0),
        ),
    ])
}

/// Display width of the widest primary label, capped.
fn primary_column_width(items: &[ListItemView]) -> usize {
    items
        .iter()
        .filter_map(|i| i.primary_label.as_deref())
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
        .min(MAX_PRIMARY_WIDTH)
}

/// What: Render the list area for the current view state.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (list state is updated for scrolling)
/// - `area`: Target rectangle
///
/// Details:
/// - `Loading` and `Error` replace the list with a single message.
pub fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Span::styled(
            " Species ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ));

    match app.view() {
        ViewState::Loading => {
            let p = Paragraph::new(Line::from(Span::styled(
                "Loading...",
                Style::default().fg(th.yellow),
            )))
            .block(block);
            f.render_widget(p, area);
        }
        ViewState::Error { message } => {
            let p = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("Error: {message}"),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to retry, or change page.",
                    Style::default().fg(th.overlay2),
                )),
            ])
            .wrap(Wrap { trim: true })
            .block(block);
            f.render_widget(p, area);
        }
        ViewState::Ready(vm) => {
            if vm.items.is_empty() {
                let p = Paragraph::new(Line::from(Span::styled(
                    "No entries on this page.",
                    Style::default().fg(th.overlay2),
                )))
                .block(block);
                f.render_widget(p, area);
                return;
            }
            let width = primary_column_width(&vm.items);
            let items: Vec<ListItem> = vm
                .items
                .iter()
                .map(|item| ListItem::new(row_line(item, width)))
                .collect();
            let list = List::new(items)
                .style(Style::default().fg(th.text).bg(th.base))
                .highlight_style(Style::default().bg(th.surface1))
                .highlight_symbol("> ")
                .block(block);
            f.render_stateful_widget(list, area, &mut app.list_state);
        }
    }
}
