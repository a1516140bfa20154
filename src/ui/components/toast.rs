use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 在屏幕底部居中显示 Toast 消息
pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    let area = frame.area();

    // 计算 Toast 尺寸和位置
    let width = toast_width(message.len(), area.width);
    let toast_height = 3;
    let toast_x = (area.width.saturating_sub(width)) / 2;
    let toast_y = area.height.saturating_sub(toast_height + 3);

    let toast_area = Rect::new(toast_x, toast_y, width, toast_height);

    // 清除背景
    frame.render_widget(Clear, toast_area);

    // 渲染 Toast
    let toast = Paragraph::new(message)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.highlight))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, toast_area);
}

/// Toast 宽度：内容加内边距，不超过可用宽度
fn toast_width(message_len: usize, area_width: u16) -> u16 {
    (message_len + 6).min((area_width as usize).saturating_sub(4)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_width_fits_message() {
        assert_eq!(toast_width(4, 80), 10);
        // 长消息不超过可用宽度
        assert_eq!(toast_width(200, 80), 76);
    }

    #[test]
    fn test_toast_width_on_tiny_terminal() {
        // 终端比内边距还窄时不能溢出
        assert_eq!(toast_width(10, 3), 0);
        assert_eq!(toast_width(10, 0), 0);
    }
}
