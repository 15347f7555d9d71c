//! TUI rendering logic

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use crate::cli::commands::list::pipeline_row;
use crate::cli::tui::form::{CreateForm, FormField};
use crate::cli::tui::main_app::App;
use crate::ui::{centered_rect, render_confirmation_dialog};

const COLUMN_TITLES: [&str; 5] = ["Schema", "Table", "Event Types", "Stream", "Columns Changed"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    render_pipeline_table(f, app, main_chunks[0]);
    render_status_bar(f, app, main_chunks[1]);

    // At most one overlay is drawn, dialog first
    if let Some(dialog) = &app.confirm_dialog {
        render_confirmation_dialog(f, dialog);
    } else if let Some(form) = &app.create_form {
        render_create_form(f, form);
    } else if app.show_help {
        render_help(f);
    }
}

fn render_pipeline_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(COLUMN_TITLES.iter().map(|t| {
        Cell::from(*t).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows: Vec<Row> = app
        .pipelines
        .iter()
        .map(|pipeline| Row::new(pipeline_row(pipeline).map(Cell::from)))
        .collect();

    let loading_indicator = if app.loading { " 🔄" } else { "" };
    let title = format!(
        "🚰 Pipelines ({}) @ {}{}",
        app.pipelines.len(),
        app.base_api,
        loading_indicator
    );

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(15),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    if app.pipelines.is_empty() && !app.loading {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        f.render_widget(table, area);
        let empty = Paragraph::new("No pipelines configured. Press [n] to create one.")
            .style(Style::default().fg(Color::Gray));
        if inner.height > 1 {
            let message_area = Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            };
            f.render_widget(empty, message_area);
        }
        return;
    }

    f.render_stateful_widget(table, area, &mut app.table_state.clone());
}

/// Render the key hints, refresh time and current notification
fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("[↑↓]Navigate ", Style::default().fg(Color::Cyan)),
        Span::styled("[N]New ", Style::default().fg(Color::Green)),
        Span::styled("[D]Remove ", Style::default().fg(Color::LightRed)),
        Span::styled("[R]Refresh ", Style::default().fg(Color::Magenta)),
        Span::styled("[H/?]Help ", Style::default().fg(Color::Blue)),
        Span::styled("[Q/ESC]Quit ", Style::default().fg(Color::Red)),
        Span::styled(" | ", Style::default().fg(Color::White)),
    ];

    if let Some(notification) = &app.notification {
        spans.push(Span::styled(
            format!("{} {}", notification.level.symbol(), notification.message),
            Style::default()
                .fg(notification.level.color())
                .add_modifier(Modifier::BOLD),
        ));
    } else if app.loading {
        spans.push(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(refreshed) = app.last_refreshed {
        spans.push(Span::styled(
            format!("Refreshed at {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(Color::DarkGray));

    f.render_widget(status_bar, area);
}

fn render_create_form(f: &mut Frame, form: &CreateForm) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        let focused = field == form.focused_field();
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if focused { "▏" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>16}: ", field.label()), label_style),
            Span::raw(form.value(field).to_string()),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{:>18}{}", "", field.hint()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Tab/↑↓]Field  [Enter]Create  [Esc]Cancel",
        Style::default().fg(Color::Cyan),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("New Pipeline")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from("🚰 pumpdash Help"),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("↑/↓ or j/k    Select pipeline"),
        Line::from("Home/End      First/last pipeline"),
        Line::from(""),
        Line::from("Actions:"),
        Line::from("n or c        Create a pipeline"),
        Line::from("d or Delete   Remove selected pipeline (asks first)"),
        Line::from("r             Reload the list from the backend"),
        Line::from(""),
        Line::from("Confirmation dialog:"),
        Line::from("y / n         Answer yes / no"),
        Line::from("←/→ Enter     Pick a button and press it"),
        Line::from("Esc           Dismiss without doing anything"),
        Line::from(""),
        Line::from("h or ?        Toggle this help"),
        Line::from("q/Ctrl+C/ESC  Quit"),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default().bg(Color::Black));

    f.render_widget(help_paragraph, area);
}
