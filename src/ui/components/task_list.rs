use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::format_relative_time;
use crate::storage::tasks::{Task, TaskStatus};
use crate::theme::ThemeColors;

use super::truncate;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 状态图标
        Cell::from("TITLE"),
        Cell::from("DESCRIPTION"),
        Cell::from("STATUS"),
        Cell::from("CREATED"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 数据行
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let status_style = Style::default().fg(status_color(task.status, colors));

            let description = task
                .description
                .as_deref()
                .map(|d| truncate(d, 40))
                .unwrap_or_default();

            let row_style = if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(task.status.icon()).style(status_style),
                Cell::from(task.title.clone()),
                Cell::from(description).style(Style::default().fg(colors.muted)),
                Cell::from(task.status.label()).style(status_style),
                Cell::from(format_relative_time(task.created_at))
                    .style(Style::default().fg(colors.muted)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Length(2),  // 状态图标
        Constraint::Fill(2),    // TITLE (flex)
        Constraint::Fill(3),    // DESCRIPTION (flex)
        Constraint::Length(12), // STATUS
        Constraint::Length(14), // CREATED
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    // 渲染表格（使用 TableState）
    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}

fn status_color(status: TaskStatus, colors: &ThemeColors) -> ratatui::style::Color {
    match status {
        TaskStatus::Todo => colors.status_todo,
        TaskStatus::InProgress => colors.status_in_progress,
        TaskStatus::Done => colors.status_done,
    }
}
