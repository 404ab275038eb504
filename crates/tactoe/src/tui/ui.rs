//! Stateless UI rendering for the game screen.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tactoe_engine::{Player, Position};

/// Renders the board, status line and, when the game is over, the alert.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tactoe - You vs. the Computer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/1-9 select  enter play  r restart  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if app.alert().is_some() {
        draw_alert(frame, area, app);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, chunk, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        None => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(mv) => (
            app.glyph(mv.player).to_string(),
            match mv.player {
                Player::Human => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                Player::Computer => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            },
        ),
    };

    let on_winning_line = app
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        base_style.bg(Color::Green)
    } else if pos == app.cursor() && !app.game().is_board_locked() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, app: &App) {
    let Some(alert) = app.alert() else {
        return;
    };

    let popup = center_rect(area, 36, 7);
    let text = vec![
        Line::from(alert.message),
        Line::default(),
        Line::from(Span::styled(
            format!("[ {} ]", alert.button),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )),
    ];
    let dialog = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(alert.title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(dialog, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
