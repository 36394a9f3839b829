//! Rendering for dexpage: title bar, species list and pagination footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;

/// Pagination footer.
mod footer;
/// Species list area.
mod list;
/// Colour palette.
mod palette;

pub use palette::{Theme, theme};

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let mut title = vec![Span::styled(
        "dexpage",
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )];
    if !app.endpoint.is_empty() {
        title.push(Span::styled(
            format!("  {}", app.endpoint),
            Style::default().fg(th.overlay2),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    list::render_list(f, app, chunks[1]);
    footer::render_footer(f, app, chunks[2]);
}
