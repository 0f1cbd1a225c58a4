use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::binding::ERROR_ICON;
use crate::ui::theme::{ACCENT, POPUP_BORDER, STATUS_ERROR, TEXT};

use super::state::AlertState;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;

/// Renders the alert on top of whatever is on screen.
pub fn render_alert(frame: &mut Frame, state: &AlertState) {
    let Some(message) = state.message() else {
        return;
    };

    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Error ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", ERROR_ICON), Style::default().fg(STATUS_ERROR)),
            Span::styled(message.to_string(), Style::default().fg(TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Create a centered rect of given size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
