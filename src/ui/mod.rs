pub mod components;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use components::{
    confirm_dialog, empty_state, footer, header, new_task_dialog, search_bar, tabs, task_list,
    theme_selector, toast,
};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    // 是否显示搜索框：正在输入或有搜索内容
    let show_search = app.search_mode || !app.search_query.is_empty();

    let (header_area, tabs_area, search_area, list_area, footer_area) = if show_search {
        let [header_area, tabs_area, search_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(2),
            Constraint::Length(1), // 搜索框
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);
        (header_area, tabs_area, Some(search_area), list_area, footer_area)
    } else {
        let [header_area, tabs_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);
        (header_area, tabs_area, None, list_area, footer_area)
    };

    let visible = app.visible_tasks();

    // 渲染 Header（Logo + 统计）
    header::render(frame, header_area, app.counts(), colors);

    // 渲染 Tabs（带各自的任务数量）
    tabs::render(frame, tabs_area, app.filter_tab, app.counts(), colors);

    // 渲染搜索框（如果有搜索内容或正在输入）
    if let Some(search_area) = search_area {
        search_bar::render(
            frame,
            search_area,
            &app.search_query,
            app.search_mode,
            visible.len(),
            colors,
        );
    }

    // 渲染列表或空状态（使用过滤后的数据）
    if visible.is_empty() {
        empty_state::render(frame, list_area, app.filter_tab, colors);
    } else {
        let selected = app.list_state.selected();
        task_list::render(frame, list_area, &visible, selected, colors);
    }

    // 渲染 Footer
    footer::render(frame, footer_area, !visible.is_empty(), colors);

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, colors);
    }

    // 渲染新建任务弹窗（如果打开）
    if let Some(ref dialog) = app.new_task_dialog {
        new_task_dialog::render(frame, dialog, colors);
    }

    // 渲染删除确认弹窗
    if let Some(ref confirm) = app.confirm_delete {
        confirm_dialog::render(frame, confirm, colors);
    }
}
