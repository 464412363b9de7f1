//! Document Intelligence tab: extraction stats and a fake extraction sweep
//! that reveals the ACORD 80 fields one by one.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, Padding, Paragraph, Row, Table},
};

use meridian_engine::App;
use meridian_fixtures::{acord_fields, document_types};

use crate::theme::{Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Min(1)])
        .split(area);

    draw_document_table(frame, cols[0], p);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(cols[1]);
    draw_extraction_gauge(frame, app, right[0], p);
    draw_extracted_fields(frame, app, right[1], p);
}

fn draw_document_table(frame: &mut Frame, area: Rect, p: &Palette) {
    let header = Row::new(vec![
        Cell::from("Document"),
        Cell::from("Accuracy"),
        Cell::from("Avg Time"),
        Cell::from("Fields"),
    ])
    .style(styles::title(p));

    let rows: Vec<Row> = document_types()
        .iter()
        .map(|doc| {
            Row::new(vec![
                Cell::from(doc.name).style(Style::default().fg(p.text_secondary)),
                Cell::from(format!("{:.1}%", doc.extraction_accuracy))
                    .style(Style::default().fg(p.success)),
                Cell::from(format!("{:.1}s", doc.avg_processing_time)).style(styles::muted(p)),
                Cell::from(doc.fields_extracted.to_string()).style(styles::muted(p)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(26),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::panel_border(p))
            .padding(Padding::horizontal(1))
            .title(Span::styled(" Supported Documents ", styles::muted(p))),
    );
    frame.render_widget(table, area);
}

fn draw_extraction_gauge(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let demo = app.extraction();
    let fields = acord_fields();
    let revealed = demo.revealed_count(fields.len());

    let label = if demo.is_running() {
        format!("extracting ACORD 80: {revealed}/{} fields", fields.len())
    } else if demo.is_done() {
        let avg: f64 = fields.iter().map(|f| f.confidence).sum::<f64>() / fields.len() as f64;
        format!(
            "{} fields extracted at {avg:.1}% avg confidence [r to reset]",
            fields.len()
        )
    } else {
        "press e to run a sample extraction".to_owned()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles::panel_border(p)),
        )
        .gauge_style(Style::default().fg(p.primary).bg(p.bg_highlight))
        .ratio((demo.progress() / 100.0).clamp(0.0, 1.0))
        .label(Span::styled(label, styles::value(p)));
    frame.render_widget(gauge, area);
}

fn draw_extracted_fields(frame: &mut Frame, app: &App, area: Rect, p: &Palette) {
    let fields = acord_fields();
    let revealed = app.extraction().revealed_count(fields.len());

    let mut lines: Vec<Line> = Vec::new();
    if revealed == 0 {
        lines.push(Line::from(Span::styled(
            "Extracted fields appear here as the sweep advances.",
            styles::muted(p),
        )));
    }
    for f in &fields[..revealed] {
        let confidence_style = if f.confidence >= 98.0 {
            Style::default().fg(p.success)
        } else {
            Style::default().fg(p.warning)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<26}", f.field), styles::muted(p)),
            Span::styled(format!("{:<24}", f.value), styles::value(p)),
            Span::styled(format!("{:.1}%", f.confidence), confidence_style),
        ]));
    }

    let title = format!(" ACORD 80 Fields ({revealed}/{}) ", fields.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::panel_border(p))
        .padding(Padding::horizontal(1))
        .title(Span::styled(title, styles::muted(p)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
