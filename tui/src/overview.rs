//! Overview tab: executive talking-point cards.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use meridian_engine::App;
use meridian_fixtures::talking_points;

use crate::theme::{Palette, styles};

pub(crate) fn draw(frame: &mut Frame, _app: &App, area: Rect, p: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Multi-Agent Underwriting Platform",
            styles::title(p),
        )),
        Line::from(Span::styled(
            "Five cooperating agents handle intake, rating, issuance, and audit, with human \
             checkpoints at every high-stakes decision.",
            styles::muted(p),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(intro, chunks[0]);

    draw_cards(frame, chunks[1], p);
}

fn draw_cards(frame: &mut Frame, area: Rect, p: &Palette) {
    let points = talking_points();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(*row_area);
        for (c, col_area) in cols.iter().enumerate() {
            let Some(point) = points.get(r * 2 + c) else {
                continue;
            };
            let card = Paragraph::new(vec![
                Line::from(Span::styled(point.question, styles::value(p))),
                Line::from(Span::styled(point.content, styles::muted(p))),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(styles::panel_border(p))
                    .padding(Padding::horizontal(1))
                    .title(Span::styled(format!(" {} ", point.title), styles::title(p))),
            );
            frame.render_widget(card, *col_area);
        }
    }
}
