/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max_len - 1).collect::<String>())
    }
}

pub mod confirm_dialog;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod logo;
pub mod new_task_dialog;
pub mod search_bar;
pub mod tabs;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
