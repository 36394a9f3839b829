use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;

use super::palette::{Theme, theme};

/// What: Style for a pagination control.
///
/// Inputs:
/// - `th`: Palette
/// - `enabled`: Whether the control accepts input
///
/// Output:
/// - Accent bold when enabled; dimmed overlay when disabled.
fn control_style(th: &Theme, enabled: bool) -> Style {
    if enabled {
        Style::new().fg(th.sapphire).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(th.overlay1).add_modifier(Modifier::DIM)
    }
}

/// What: Build the controls line.
///
/// Inputs:
/// - `app`: Application state
///
/// Output:
/// - `[← Previous]  Page N  [Next →]` followed by key hints.
///
/// Details:
/// - "Previous" is disabled exactly when the page is the first; "Next" exactly
///   when the last result was not a full page.
pub(crate) fn controls_line(app: &AppState) -> Line<'static> {
    let th = theme();
    let page = app.controller.page().page_index();
    Line::from(vec![
        Span::styled(
            "[← Previous]",
            control_style(&th, app.controller.can_go_prev()),
        ),
        Span::raw("  "),
        Span::styled(format!("Page {}", page.saturating_add(1)), Style::default().fg(th.text)),
        Span::raw("  "),
        Span::styled("[Next →]", control_style(&th, app.controller.can_go_next())),
        Span::styled(
            "    ←/h prev  →/l next  ↑↓ move  r retry  q quit",
            Style::default().fg(th.overlay2),
        ),
    ])
}

/// Render the pagination footer.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let p = Paragraph::new(controls_line(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1)),
    );
    f.render_widget(p, area);
}
