use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskCounts;
use crate::theme::ThemeColors;

use super::logo;

/// Header 总高度：1 (边框) + 6 (Logo) + 1 (下边距) + 1 (统计行) = 9
pub const HEADER_HEIGHT: u16 = 9;

/// 渲染顶部区域（Logo + 统计行）
pub fn render(frame: &mut Frame, area: Rect, counts: TaskCounts, colors: &ThemeColors) {
    // 外框
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 内部垂直布局
    let [logo_area, bottom_padding, counts_area] = Layout::vertical([
        Constraint::Length(logo::LOGO_HEIGHT), // Logo
        Constraint::Length(1),                 // 下边距
        Constraint::Length(1),                 // 统计行
    ])
    .areas(inner_area);

    // 渲染 Logo
    logo::render(frame, logo_area, colors);

    // 渲染统计行
    render_counts(frame, counts_area, counts, colors);

    // 填充空白区域（防止残留）
    frame.render_widget(Paragraph::new(""), bottom_padding);
}

fn render_counts(frame: &mut Frame, area: Rect, counts: TaskCounts, colors: &ThemeColors) {
    let left = Span::styled(
        " Lightweight task tracking with local persistence",
        Style::default().fg(colors.muted),
    );

    let right_spans = vec![
        Span::styled("○ ", Style::default().fg(colors.status_todo)),
        Span::styled(format!("{}  ", counts.todo), Style::default().fg(colors.text)),
        Span::styled("◐ ", Style::default().fg(colors.status_in_progress)),
        Span::styled(
            format!("{}  ", counts.in_progress),
            Style::default().fg(colors.text),
        ),
        Span::styled("● ", Style::default().fg(colors.status_done)),
        Span::styled(format!("{}  ", counts.done), Style::default().fg(colors.text)),
        Span::styled(
            format!("{} total ", counts.total),
            Style::default().fg(colors.muted),
        ),
    ];

    // 计算中间填充空格
    let total_width = area.width as usize;
    let used_width =
        left.width() + right_spans.iter().map(|s| s.width()).sum::<usize>();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let mut spans = vec![left, Span::raw(padding)];
    spans.extend(right_spans);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
