//! Live Workflows tab: the step-playback simulator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap},
};

use meridian_engine::{App, PlaybackPhase};

use crate::format::duration_label;
use crate::theme::{Glyphs, Palette, spinner_frame, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // workflow header
            Constraint::Min(1),    // step list
            Constraint::Length(3), // progress gauge
        ])
        .split(area);

    draw_header(frame, app, chunks[0], p);
    draw_steps(frame, app, chunks[1], p, g);
    draw_progress(frame, app, chunks[2], p);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let wf = app.store().workflow();
    let phase = app.store().phase();
    let phase_style = match phase {
        PlaybackPhase::Running => Style::default().fg(p.accent),
        PlaybackPhase::Completed => Style::default().fg(p.success),
        PlaybackPhase::Paused => Style::default().fg(p.warning),
        PlaybackPhase::Idle => styles::muted(p),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(wf.name, styles::title(p)),
            Span::styled(
                format!("  ({})", wf.line_of_business.label()),
                styles::muted(p),
            ),
            Span::raw("  "),
            Span::styled(phase.label(), phase_style.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(wf.description, styles::muted(p))),
        Line::from(vec![
            Span::styled("total ", styles::muted(p)),
            Span::styled(duration_label(wf.total_time()), styles::value(p)),
            Span::styled("   automated ", styles::muted(p)),
            Span::styled(
                duration_label(wf.automation_time()),
                Style::default().fg(p.success),
            ),
            Span::styled("   human ", styles::muted(p)),
            Span::styled(
                duration_label(wf.human_time()),
                Style::default().fg(p.human),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(p))
        .padding(Padding::horizontal(1))
        .title(Span::styled(" Workflow [w to switch] ", styles::muted(p)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_steps(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    let store = app.store();
    let wf = store.workflow();
    let playback = store.playback();
    let current = playback.current_step();

    let mut lines: Vec<Line> = Vec::new();
    for (i, step) in wf.steps.iter().enumerate() {
        let done = playback.is_completed(step.id);
        let active = current == Some(i) && !done;

        let (glyph, glyph_style) = if done {
            (g.step_done.to_owned(), Style::default().fg(p.success))
        } else if active && playback.running() {
            (
                spinner_frame(app.tick_count(), app.ui_options()).to_owned(),
                Style::default().fg(p.accent),
            )
        } else if active {
            (g.step_active.to_owned(), Style::default().fg(p.warning))
        } else {
            (g.step_pending.to_owned(), styles::muted(p))
        };

        let name_style = if active {
            styles::value(p)
        } else if done {
            Style::default().fg(p.text_secondary)
        } else {
            styles::muted(p)
        };

        let mut spans = vec![
            Span::styled(format!(" {glyph} "), glyph_style),
            Span::styled(step.name, name_style),
            Span::styled(format!("  {} ", g.arrow), styles::muted(p)),
            Span::styled(step.agent, Style::default().fg(p.primary)),
            Span::styled(
                format!("  {}", duration_label(step.duration)),
                styles::muted(p),
            ),
        ];
        if step.is_human {
            spans.push(Span::styled(
                format!("  {} human in the loop", g.human),
                Style::default().fg(p.human),
            ));
        }
        lines.push(Line::from(spans));

        // The in-flight step shows what the agent is doing; completed steps
        // collapse to their output.
        if active {
            for action in &step.actions {
                lines.push(Line::from(Span::styled(
                    format!("      {} {action}", g.bullet),
                    Style::default().fg(p.text_secondary),
                )));
            }
        } else if done {
            lines.push(Line::from(Span::styled(
                format!("      {} {}", g.arrow, step.output),
                Style::default().fg(p.success),
            )));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(p))
        .title(Span::styled(
            " Steps [s start/pause, r reset] ",
            styles::muted(p),
        ));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn draw_progress(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let store = app.store();
    let wf = store.workflow();
    let total = wf.steps.len();
    let done = store.playback().completed().len();

    // Whole-run progress: completed steps plus the in-flight step's fraction.
    let step_fraction = f64::from(app.step_progress().unwrap_or(0.0));
    let ratio = if total == 0 {
        0.0
    } else {
        ((done as f64 + step_fraction) / total as f64).clamp(0.0, 1.0)
    };

    let label = match store.phase() {
        PlaybackPhase::Completed => format!("{done}/{total} steps, complete"),
        _ => format!("{done}/{total} steps"),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles::panel_border(p)),
        )
        .gauge_style(Style::default().fg(p.accent).bg(p.bg_highlight))
        .ratio(ratio)
        .label(Span::styled(label, styles::value(p)));
    frame.render_widget(gauge, area);
}
