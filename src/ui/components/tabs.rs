use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{FilterTab, TaskCounts};
use crate::theme::ThemeColors;

/// 渲染过滤 Tab 栏（每个 Tab 附带对应任务数量）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_tab: FilterTab,
    counts: TaskCounts,
    colors: &ThemeColors,
) {
    let tabs = FilterTab::all();

    let mut spans = Vec::new();
    spans.push(Span::raw("   "));

    for (i, tab) in tabs.iter().enumerate() {
        let text = format!("  {} {}  ", tab.label(), tab_count(*tab, counts));

        if *tab == current_tab {
            // 选中的 Tab: 背景高亮块
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(colors.tab_active_fg)
                    .bg(colors.tab_active_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            // 未选中的 Tab: 普通显示
            spans.push(Span::styled(text, Style::default().fg(colors.muted)));
        }

        if i < tabs.len() - 1 {
            spans.push(Span::raw("  "));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Tab 上显示的任务数量
fn tab_count(tab: FilterTab, counts: TaskCounts) -> usize {
    match tab {
        FilterTab::All => counts.total,
        FilterTab::Todo => counts.todo,
        FilterTab::InProgress => counts.in_progress,
        FilterTab::Done => counts.done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_count_follows_status() {
        let counts = TaskCounts {
            total: 6,
            todo: 3,
            in_progress: 2,
            done: 1,
        };

        assert_eq!(tab_count(FilterTab::All, counts), 6);
        assert_eq!(tab_count(FilterTab::Todo, counts), 3);
        assert_eq!(tab_count(FilterTab::InProgress, counts), 2);
        assert_eq!(tab_count(FilterTab::Done, counts), 1);
    }
}
