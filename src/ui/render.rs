use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::binding::Region;
use crate::ui::alert::render_alert;
use crate::ui::app::{App, NumbersScreen};
use crate::ui::theme::{ACCENT, BORDER, MUTED, STATUS_ERROR, STATUS_OK, TEXT};

const TITLE: &str = "Numbers";

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    app.with_screen(|screen| {
        render_header(frame, chunks[0], screen);
        render_body(frame, chunks[1], screen);
    });
    render_footer(frame, chunks[2], app.is_loading());
    render_alert(frame, app.alert());
}

fn render_header(frame: &mut Frame, area: Rect, screen: &NumbersScreen) {
    let mut spans = vec![Span::styled(
        format!(" {} ", TITLE),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if screen.is_refreshing() {
        spans.push(Span::styled(
            screen.loading().frame(),
            Style::default().fg(STATUS_OK),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(frame: &mut Frame, area: Rect, screen: &NumbersScreen) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match screen.active_region() {
        Region::Content => screen
            .content()
            .lines()
            .iter()
            .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(TEXT))))
            .collect(),
        Region::Error => {
            let message = screen.message().message();
            let mut spans = Vec::new();
            if let Some(icon) = &message.icon {
                spans.push(Span::styled(
                    format!("{} ", icon),
                    Style::default().fg(STATUS_ERROR),
                ));
            }
            spans.push(Span::styled(message.text.clone(), Style::default().fg(TEXT)));
            centered_lines(inner, vec![Line::from(spans)])
        }
        Region::Loading => centered_lines(
            inner,
            vec![Line::from(vec![
                Span::styled(
                    format!("{} ", screen.loading().frame()),
                    Style::default().fg(STATUS_OK),
                ),
                Span::styled("Loading...", Style::default().fg(MUTED)),
            ])],
        ),
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Pads `lines` with blank lines so they sit in the vertical middle of `area`.
fn centered_lines(area: Rect, lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let padding = area.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded = vec![Line::from(""); padding as usize];
    padded.extend(lines);
    padded
}

fn render_footer(frame: &mut Frame, area: Rect, loading: bool) {
    // Reload and purge are ignored while a load is running.
    let action = if loading {
        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(TEXT)
    };
    let hint = Style::default().fg(MUTED);

    let line = Line::from(vec![
        Span::styled(" r", action),
        Span::styled(" reload  ", hint),
        Span::styled("p", action),
        Span::styled(" purge  ", hint),
        Span::styled("q", Style::default().fg(TEXT)),
        Span::styled(" quit", hint),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
