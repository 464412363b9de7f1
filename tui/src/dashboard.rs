//! Operations Center tab: live metrics grid and agent activity feed.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use meridian_engine::App;

use crate::format::minutes_ago_label;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(area);

    draw_metrics(frame, app, chunks[0], p);
    draw_activity_feed(frame, app, chunks[1], p, g);
}

fn draw_metrics(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let m = app.store().metrics();
    let cards: [(&str, String); 9] = [
        ("Submissions Processing", m.submissions_processing.to_string()),
        ("Quotes Generated", m.quotes_generated.to_string()),
        ("Policies Bound", m.policies_bound.to_string()),
        ("Endorsement Backlog", m.endorsement_backlog.to_string()),
        ("Compliance Score", format!("{:.1}%", m.compliance_score)),
        ("Avg Quote Time", format!("{:.1} min", m.avg_quote_time)),
        ("Straight-Through Rate", format!("{:.0}%", m.straight_through_rate)),
        ("Human Touch Time", format!("{:.1} min", m.human_touch_time)),
        ("Agent Accuracy", format!("{:.1}%", m.agent_accuracy)),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(area);
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);
        for (c, col_area) in cols.iter().enumerate() {
            let (label, value) = &cards[r * 3 + c];
            let card = Paragraph::new(Line::from(vec![
                Span::styled(format!("{value}  "), styles::value(p)),
                Span::styled(*label, styles::muted(p)),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(styles::panel_border(p))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, *col_area);
        }
    }
}

fn draw_activity_feed(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in app.store().filtered_audit_trail() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", minutes_ago_label(entry.minutes_ago)),
                styles::muted(p),
            ),
            Span::styled(entry.agent_name, Style::default().fg(p.primary)),
            Span::styled(format!(" {} ", g.arrow), styles::muted(p)),
            Span::styled(entry.action, Style::default().fg(p.text_secondary)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(p))
        .title(Span::styled(" Agent Activity ", styles::muted(p)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
