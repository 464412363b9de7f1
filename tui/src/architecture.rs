//! Agent Architecture tab: roster on the left, selected-agent detail on the
//! right. The `v` key toggles between simple and technical detail.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use meridian_engine::{Agent, App, ViewMode};
use meridian_fixtures::agents;

use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(1)])
        .split(area);

    draw_roster(frame, app, chunks[0], p, g);
    draw_detail(frame, app, chunks[1], p, g);
}

fn draw_roster(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let selected = app.store().selected_agent();
    let technical = app.store().view_mode() == ViewMode::Technical;

    let mut lines: Vec<Line> = Vec::new();
    for agent in agents() {
        let is_selected = selected == Some(agent.id);
        let style = if is_selected {
            styles::selected(p)
        } else {
            Style::default().fg(p.text_secondary)
        };
        let mut spans = vec![
            Span::styled(format!(" {} ", g.connected), Style::default().fg(p.success)),
            Span::styled(agent.name, style),
        ];
        if technical {
            spans.push(Span::styled(
                format!("  {}", agent.model),
                styles::muted(p),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("    {} {}", agent.role.label(), agent.status),
            styles::muted(p),
        )));
    }

    let title = format!(
        " Agents [j/k select, v: {}] ",
        app.store().view_mode().label()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(p))
        .title(Span::styled(title, styles::muted(p)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_detail(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(p))
        .padding(Padding::horizontal(1))
        .title(Span::styled(" Detail ", styles::muted(p)));

    let Some(agent) = app.store().selected_agent_record() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Select an agent with j/k to inspect skills, checkpoints, and MCP connections.",
            styles::muted(p),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let technical = app.store().view_mode() == ViewMode::Technical;
    let mut lines = agent_header(agent, technical, p);

    lines.push(Line::from(Span::styled("Skills", styles::title(p))));
    for skill in &agent.skills {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", g.bullet), styles::muted(p)),
            Span::styled(skill.name, styles::value(p)),
            Span::styled(format!("  {}", skill.description), styles::muted(p)),
        ]));
        if technical {
            if let (Some(input), Some(output)) = (skill.example_input, skill.example_output) {
                lines.push(Line::from(Span::styled(
                    format!("      {input} {} {output}", g.arrow),
                    Style::default().fg(p.text_secondary),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Human Checkpoints", styles::title(p))));
    for cp in &agent.human_checkpoints {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", g.human), Style::default().fg(p.human)),
            Span::styled(cp.condition, styles::value(p)),
            Span::styled(format!("  {} {}", g.arrow, cp.escalation_path), styles::muted(p)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("MCP Connections", styles::title(p))));
    for conn in &agent.mcp_connections {
        let mut spans = vec![
            Span::styled(format!("  {} ", g.connected), Style::default().fg(p.success)),
            Span::styled(conn.name, Style::default().fg(p.text_secondary)),
            Span::styled(format!("  {}", conn.operations.label()), styles::muted(p)),
        ];
        if technical {
            spans.push(Span::styled(
                format!("  {}ms", conn.latency_ms),
                Style::default().fg(p.warning),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn agent_header(agent: &Agent, technical: bool, p: &Palette) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(agent.name, styles::title(p))];
    if technical {
        title.push(Span::styled(format!("  {}", agent.model), styles::muted(p)));
        title.push(Span::styled(
            format!(
                "  {} tasks, {:.1}s avg, {:.2}% accuracy",
                agent.metrics.tasks_completed,
                agent.metrics.avg_processing_time,
                agent.metrics.accuracy_rate
            ),
            styles::muted(p),
        ));
    }
    vec![
        Line::from(title),
        Line::from(Span::styled(agent.description, styles::muted(p))),
        Line::from(""),
    ]
}
