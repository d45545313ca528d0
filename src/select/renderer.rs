//! Drawing the branch prompt.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::state::SelectorState;

/// Shown after the prompt until the user starts typing.
pub const HINT: &str = "(Use arrow keys or type to search)";

/// Shown in place of rows when nothing matches the query.
pub const NO_MATCHES: &str = "No matching branches";

const POINTER: &str = "\u{276F} ";

/// Styles used by the prompt.
pub struct Theme;

impl Theme {
    pub fn question_mark() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn message() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn highlighted() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

/// Rows needed to draw a prompt for `entries` branches.
pub fn viewport_height(entries: usize, page_size: usize) -> u16 {
    let rows = entries.clamp(1, page_size.max(1));
    u16::try_from(rows + 1).unwrap_or(u16::MAX)
}

/// Render the prompt line followed by the visible page of branches.
pub fn render_prompt(frame: &mut Frame, area: Rect, state: &SelectorState, message: &str) {
    let mut prompt = Line::from(vec![
        Span::styled("? ", Theme::question_mark()),
        Span::styled(message.to_string(), Theme::message()),
        Span::raw(" "),
        Span::raw(state.query().to_string()),
    ]);
    let cursor_x = area.x.saturating_add(u16::try_from(prompt.width()).unwrap_or(u16::MAX));
    if state.query().is_empty() {
        prompt.push_span(Span::styled(HINT, Theme::dimmed()));
    }

    let mut lines = vec![prompt];
    if state.match_count() == 0 {
        lines.push(Line::from(Span::styled(format!("  {NO_MATCHES}"), Theme::dimmed())));
    } else {
        lines.extend(state.page().map(|(name, highlighted)| {
            if highlighted {
                Line::from(Span::styled(format!("{POINTER}{name}"), Theme::highlighted()))
            } else {
                Line::from(format!("  {name}"))
            }
        }));
    }

    frame.render_widget(Paragraph::new(lines), area);
    frame.set_cursor_position(Position::new(
        cursor_x.min(area.right().saturating_sub(1)),
        area.y,
    ));
}
