//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(0, 200, 255),        // 亮蓝色
        highlight: Color::Rgb(0, 200, 255),   // 亮蓝色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        status_todo: Color::Rgb(128, 128, 128),
        status_in_progress: Color::Rgb(255, 213, 79), // 黄色
        status_done: Color::Rgb(0, 230, 118),         // 绿色
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(0, 200, 255),
        warning: Color::Rgb(255, 165, 0), // 橙色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        logo: Color::Rgb(0, 110, 160),           // 深蓝色
        highlight: Color::Rgb(0, 110, 160),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        status_todo: Color::Rgb(140, 140, 140),
        status_in_progress: Color::Rgb(200, 140, 0),
        status_done: Color::Rgb(0, 150, 80),
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(0, 110, 160),
        warning: Color::Rgb(200, 120, 0),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),
        status_todo: Color::Rgb(98, 114, 164),
        status_in_progress: Color::Rgb(241, 250, 140), // yellow
        status_done: Color::Rgb(80, 250, 123),         // green
        tab_active_fg: Color::Rgb(40, 42, 54),
        tab_active_bg: Color::Rgb(255, 121, 198),
        warning: Color::Rgb(255, 184, 108), // orange
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        logo: Color::Rgb(136, 192, 208),      // frost
        highlight: Color::Rgb(129, 161, 193), // frost darker
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),       // polar night light
        border: Color::Rgb(59, 66, 82),
        status_todo: Color::Rgb(76, 86, 106),
        status_in_progress: Color::Rgb(235, 203, 139), // aurora yellow
        status_done: Color::Rgb(163, 190, 140),        // aurora green
        tab_active_fg: Color::Rgb(46, 52, 64),
        tab_active_bg: Color::Rgb(136, 192, 208),
        warning: Color::Rgb(208, 135, 112), // aurora orange
    }
}
