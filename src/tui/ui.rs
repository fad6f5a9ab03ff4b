//! UI rendering

use super::app::App;
use quadcell_engine::engine::format_value;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub(crate) const SHEET_HEIGHT: u16 = 7;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const LABEL_WIDTH: u16 = 3;
pub(crate) const INPUT_WIDTH: u16 = 24;
pub(crate) const COLUMN_SPACING: u16 = 2;

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SHEET_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

pub fn draw(f: &mut Frame, app: &App) {
    let [sheet_area, _, status_area] = split_main_chunks(f.area());
    draw_sheet(f, app, sheet_area);
    draw_status_bar(f, app, status_area);
}

fn draw_sheet(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Input"),
        Cell::from("Value"),
    ])
    .style(Style::default().fg(Color::DarkGray));

    let rows: Vec<Row> = snapshot
        .iter()
        .map(|view| {
            let selected = view.id == app.selected;
            let input = if selected {
                // Insert cursor marker at cursor position
                let cursor = app.edit_cursor.min(view.raw_input.len());
                let (before, after) = view.raw_input.split_at(cursor);
                format!("{}│{}", before, after)
            } else {
                view.raw_input.clone()
            };
            let label_style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let input_style = if selected {
                Style::default().bg(Color::Gray).fg(Color::Black)
            } else {
                Style::default().bg(Color::DarkGray)
            };
            let value_style = if view.is_valid {
                Style::default()
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(view.id.to_string()).style(label_style),
                Cell::from(input).style(input_style),
                Cell::from(format_value(&view.value, &app.display)).style(value_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(LABEL_WIDTH),
        Constraint::Length(INPUT_WIDTH),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Quadcell "))
        .column_spacing(COLUMN_SPACING);

    f.render_widget(table, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.status_message.is_empty() {
        "Up/Down/Tab: select  Type: edit  Esc: quit".to_string()
    } else {
        app.status_message.clone()
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
