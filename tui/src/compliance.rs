//! Audit & Compliance tab: the filterable decision trail.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use meridian_engine::App;

use crate::format::{clock_for, truncate_to_width};
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    draw_filter(frame, app, chunks[0], p);
    draw_trail(frame, app, chunks[1], p, g);
}

fn draw_filter(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let store = app.store();
    let editing = app.is_editing_filter();

    let mut spans = vec![
        Span::styled(" policy ", styles::muted(p)),
        Span::styled(store.policy_number(), styles::value(p)),
        Span::styled("   filter: ", styles::muted(p)),
    ];
    if store.audit_filter().is_empty() && !editing {
        spans.push(Span::styled("(press / to filter)", styles::muted(p)));
    } else {
        spans.push(Span::styled(
            store.audit_filter().to_owned(),
            Style::default().fg(p.accent),
        ));
    }
    if editing {
        spans.push(Span::styled("█", Style::default().fg(p.accent)));
        spans.push(Span::styled("  [Enter done, Esc clear]", styles::muted(p)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if editing {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(if editing {
            Style::default().fg(p.accent)
        } else {
            styles::panel_border(p)
        });
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_trail(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let entries = app.store().filtered_audit_trail();

    let mut lines: Vec<Line> = Vec::new();
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            " no audit entries match the filter",
            styles::muted(p),
        )));
    }
    for entry in &entries {
        let mut header = vec![
            Span::styled(format!(" {} ", clock_for(entry.minutes_ago)), styles::muted(p)),
            Span::styled(entry.agent_name, Style::default().fg(p.primary)),
            Span::styled("  ", Style::default()),
            Span::styled(entry.action, styles::value(p)),
        ];
        if let Some(policy) = entry.policy_number {
            header.push(Span::styled(format!("  {policy}"), styles::muted(p)));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.details),
            Style::default().fg(p.text_secondary),
        )));
        // One line per entry for the access list, however many systems it hit.
        let data = format!("    data: {}", entry.data_accessed.join(", "));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&data, area.width.saturating_sub(4) as usize),
            styles::muted(p),
        )));
        if let Some(rationale) = entry.decision_rationale {
            lines.push(Line::from(Span::styled(
                format!("    {} {rationale}", g.arrow),
                Style::default().fg(p.warning),
            )));
        }
        lines.push(Line::from(""));
    }

    let title = format!(" Audit Trail ({} entries) ", entries.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(p))
        .padding(Padding::horizontal(1))
        .title(Span::styled(title, styles::muted(p)));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
