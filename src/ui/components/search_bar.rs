//! 搜索框组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

const PLACEHOLDER: &str = "search title or description";

/// 渲染搜索框
///
/// is_editing: 是否正在输入（显示光标）；match_count 为当前条件下
/// 命中的任务数量，只在有搜索内容时显示。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    is_editing: bool,
    match_count: usize,
    colors: &ThemeColors,
) {
    let mut spans = vec![Span::styled(" /", Style::default().fg(colors.highlight))];

    spans.push(Span::styled(query, Style::default().fg(colors.text)));

    // 只在输入模式显示闪烁光标
    if is_editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // 内容为空时给出输入提示
    if query.is_empty() {
        spans.push(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(colors.muted),
        ));
    }

    // 右侧命中数量
    if !query.is_empty() {
        let label = format!("{} ", match_label(match_count));
        let used: usize = spans.iter().map(|s| s.width()).sum();
        let padding = (area.width as usize).saturating_sub(used + label.len());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(label, Style::default().fg(colors.muted)));
    }

    let line = Line::from(spans);

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bg_secondary));

    frame.render_widget(paragraph, area);
}

/// 命中数量文案，如 "3 matches"
fn match_label(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{} matches", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_label() {
        assert_eq!(match_label(0), "0 matches");
        assert_eq!(match_label(1), "1 match");
        assert_eq!(match_label(5), "5 matches");
    }
}
