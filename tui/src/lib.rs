//! TUI rendering for Meridian using ratatui.

mod architecture;
mod compliance;
mod dashboard;
mod documents;
mod format;
mod input;
mod overview;
mod theme;
mod workflows;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
};

use meridian_engine::{App, PlaybackPhase, Section};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Min(1),    // Section body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_tabs(frame, app, chunks[0], &palette);
    draw_section(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), styles::muted(p)),
                Span::styled(s.label(), Style::default().fg(p.text_secondary)),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.store().active_section().index())
        .highlight_style(styles::selected(p))
        .divider(Span::styled("|", styles::muted(p)));
    frame.render_widget(tabs, area);
}

fn draw_section(frame: &mut Frame, app: &App, area: Rect, p: &Palette, g: &Glyphs) {
    match app.store().active_section() {
        Section::Overview => overview::draw(frame, app, area, p),
        Section::Architecture => architecture::draw(frame, app, area, p, g),
        Section::Dashboard => dashboard::draw(frame, app, area, p, g),
        Section::Workflows => workflows::draw(frame, app, area, p, g),
        Section::Documents => documents::draw(frame, app, area, p),
        Section::Compliance => compliance::draw(frame, app, area, p, g),
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let store = app.store();
    let hints = if app.is_editing_filter() {
        "type to filter | Enter done | Esc clear"
    } else {
        match store.active_section() {
            Section::Workflows => "s start/pause | r reset | w workflow | 1-6 tabs | q quit",
            Section::Architecture => "j/k agent | v detail | Esc deselect | 1-6 tabs | q quit",
            Section::Documents => "e extract | r reset | 1-6 tabs | q quit",
            Section::Compliance => "/ filter | Esc clear | 1-6 tabs | q quit",
            Section::Overview | Section::Dashboard => "Tab next | 1-6 tabs | q quit",
        }
    };

    let phase = store.phase();
    let phase_style = match phase {
        PlaybackPhase::Running => Style::default().fg(p.accent),
        PlaybackPhase::Completed => Style::default().fg(p.success),
        PlaybackPhase::Paused => Style::default().fg(p.warning),
        PlaybackPhase::Idle => styles::muted(p),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", store.workflow().name), styles::muted(p)),
        Span::styled(phase.label(), phase_style),
        Span::styled(format!("   {hints}"), styles::muted(p)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
